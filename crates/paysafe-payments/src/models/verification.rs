//! Verification payloads: zero-amount account checks that validate an
//! instrument without moving money.
//!
//! Unlike payments, verifications take the card directly rather than a
//! payment handle token.

use bon::Builder;
use serde::{Deserialize, Serialize};

use paysafe_core::types::{CurrencyCode, ExtraFields, ExtraFieldsExt, Meta};

use super::card::{Card, ThreeDs};
use super::common::{
    BillingDetails, DeviceDetails, GatewayResponse, MerchantDescriptor, Profile, StoredCredential,
};
use super::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationPaymentType {
    Card,
    InteracEtransfer,
    Mazooma,
    Sightline,
    Vippreferred,
    Skrill,
    Neteller,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    Completed,
    Failed,
    Received,
    Error,
}

/// Request body for `POST /v1/verifications`.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub merchant_ref_num: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_details: Option<BillingDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub customer_ip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub currency_code: Option<CurrencyCode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_details: Option<DeviceDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub three_ds: Option<ThreeDs>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_credential_details: Option<StoredCredential>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_descriptor: Option<MerchantDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dup_check: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub description: Option<String>,

    #[serde(flatten)]
    #[builder(default)]
    pub extra: ExtraFields,
}

impl ExtraFieldsExt for VerificationRequest {
    fn extra_fields(&self) -> &ExtraFields {
        &self.extra
    }

    fn extra_fields_mut(&mut self) -> &mut ExtraFields {
        &mut self.extra
    }
}

/// Verification resource returned by the server.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub merchant_ref_num: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<VerificationPaymentType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_details: Option<BillingDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub customer_ip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub currency_code: Option<CurrencyCode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dup_check: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub txn_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VerificationStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_reason_code: Option<Vec<i32>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_response: Option<GatewayResponse>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_mode: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub updated_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub status_time: Option<String>,

    #[serde(flatten)]
    #[builder(default)]
    pub extra: ExtraFields,
}

impl ExtraFieldsExt for Verification {
    fn extra_fields(&self) -> &ExtraFields {
        &self.extra
    }

    fn extra_fields_mut(&mut self) -> &mut ExtraFields {
        &mut self.extra
    }
}

/// Envelope for `GET /v1/verifications?merchantRefNum=...`.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verifications: Option<Vec<Verification>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::models::card::CardExpiry;

    use super::*;

    #[test]
    fn test_verification_request_takes_card_directly() {
        let request = VerificationRequest::builder()
            .merchant_ref_num("verify-001")
            .card(
                Card::builder()
                    .card_num("4111111111111111")
                    .card_expiry(CardExpiry::builder().month(2).year(2029).build())
                    .cvv("111")
                    .build(),
            )
            .currency_code("USD")
            .build();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "merchantRefNum": "verify-001",
                "card": {
                    "cardNum": "4111111111111111",
                    "cardExpiry": { "month": 2, "year": 2029 },
                    "cvv": "111"
                },
                "currencyCode": "USD"
            })
        );
    }

    #[test]
    fn test_verification_response_decodes() {
        let verification: Verification = serde_json::from_value(json!({
            "id": "ver-1",
            "status": "COMPLETED",
            "paymentType": "CARD",
            "gatewayResponse": { "avsResponse": "MATCH", "cvvVerification": "MATCH" }
        }))
        .unwrap();

        assert_eq!(verification.status, Some(VerificationStatus::Completed));
        assert_eq!(
            verification.payment_type,
            Some(VerificationPaymentType::Card)
        );
    }
}
