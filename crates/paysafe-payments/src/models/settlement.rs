//! Settlement payloads: capture of a previously authorized payment.

use bon::Builder;
use serde::{Deserialize, Serialize};

use paysafe_core::types::Meta;

use super::common::{GatewayResponse, Splitpay, TransactionRequestStatus};
use super::default_true;

/// Payment type echoed on settlement responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettlementPaymentType {
    Card,
    Paysafecash,
    Paysafecard,
    Paypal,
    Interac,
}

/// Request body for `POST /v1/payments/{paymentId}/settlements`.
///
/// `dup_check` defaults to `true` and is always sent; duplicate settlement
/// requests with the same merchant reference are then rejected server-side.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub merchant_ref_num: Option<String>,

    /// Amount to capture, in minor units. Omitted means the full
    /// authorized amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(default = "default_true")]
    #[builder(default = true)]
    pub dup_check: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub splitpay: Option<Vec<Splitpay>>,
}

/// Settlement resource returned by the server.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub merchant_ref_num: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dup_check: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub splitpay: Option<Vec<Splitpay>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<SettlementPaymentType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_to_refund: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub child_account_num: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub txn_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionRequestStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_reason_code: Option<Vec<i32>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_response: Option<GatewayResponse>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub gateway_reconciliation_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_mode: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub updated_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub status_time: Option<String>,
}

/// Envelope for `GET /v1/settlements?merchantRefNum=...`.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlements: Option<Vec<Settlement>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}
