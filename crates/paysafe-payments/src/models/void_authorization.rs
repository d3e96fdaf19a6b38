//! Void-authorization payloads: release an authorization before settlement.

use bon::Builder;
use serde::{Deserialize, Serialize};

use paysafe_core::types::Meta;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoidAuthorizationStatus {
    Received,
    Completed,
    Held,
    Failed,
    Cancelled,
    Pending,
}

/// Request body for `POST /v1/payments/{paymentId}/voidauths`.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoidAuthorizationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub merchant_ref_num: Option<String>,

    /// Amount to void, in minor units. Omitted voids the full remaining
    /// authorization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoidAuthorization {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub merchant_ref_num: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub txn_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VoidAuthorizationStatus>,
}

/// Envelope for `GET /v1/voidauths?merchantRefNum=...`. The server keys
/// the collection as `voidAuths`.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoidAuthorizationList {
    #[serde(rename = "voidAuths", skip_serializing_if = "Option::is_none")]
    pub void_auths: Option<Vec<VoidAuthorization>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}
