//! Standalone credit payloads: push funds to a customer without a prior
//! payment (payouts, withdrawals, Interac e-Transfer sends).

use bon::Builder;
use serde::{Deserialize, Serialize};

use paysafe_core::types::{CurrencyCode, ExtraFields, ExtraFieldsExt, Meta};

use super::common::{BillingDetails, GatewayResponse, Profile, TransactionRequestStatus};
use super::error::ApiError;
use super::lpm::Interac;
use super::payment_handle::PaymentType;

/// Originator of the pushed funds, required on some cross-border rails.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SenderAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub street: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub zip: Option<String>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sender {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub account_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<SenderAddress>,
}

/// Request body for `POST /v1/standalonecredits`.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandaloneCreditRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub merchant_ref_num: Option<String>,

    /// Amount to push, in minor units of `currency_code`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dup_check: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub payment_handle_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub customer_ip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub currency_code: Option<CurrencyCode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_details: Option<BillingDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<Sender>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub transaction_intent: Option<String>,

    #[serde(flatten)]
    #[builder(default)]
    pub extra: ExtraFields,
}

impl ExtraFieldsExt for StandaloneCreditRequest {
    fn extra_fields(&self) -> &ExtraFields {
        &self.extra
    }

    fn extra_fields_mut(&mut self) -> &mut ExtraFields {
        &mut self.extra
    }
}

/// Standalone credit resource returned by the server.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandaloneCredit {
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
    #[builder(into)]
    pub payment_handle_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub customer_ip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub currency_code: Option<CurrencyCode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_details: Option<BillingDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<Sender>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub transaction_intent: Option<String>,

    /// Lowercase `t` on the wire, unlike the payment-handle key.
    #[serde(rename = "interacEtransfer", skip_serializing_if = "Option::is_none")]
    pub interac_etransfer: Option<Interac>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,

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

impl ExtraFieldsExt for StandaloneCredit {
    fn extra_fields(&self) -> &ExtraFields {
        &self.extra
    }

    fn extra_fields_mut(&mut self) -> &mut ExtraFields {
        &mut self.extra
    }
}

/// Body of the Interac fraud-status `PATCH`.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandaloneCreditUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub merchant_ref_num: Option<String>,

    #[serde(rename = "interacEtransfer", skip_serializing_if = "Option::is_none")]
    pub interac_etransfer: Option<Interac>,
}

/// Envelope for `GET /v1/standalonecredits?merchantRefNum=...`.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandaloneCreditList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standalone_credits: Option<Vec<StandaloneCredit>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::models::lpm::InteracFraudStatus;

    use super::*;

    #[test]
    fn test_update_request_uses_lowercase_etransfer_key() {
        let update = StandaloneCreditUpdateRequest::builder()
            .merchant_ref_num("credit-001")
            .interac_etransfer(
                Interac::builder()
                    .fraud_status(InteracFraudStatus::ConfirmLegitimate)
                    .build(),
            )
            .build();

        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({
                "merchantRefNum": "credit-001",
                "interacEtransfer": { "fraudStatus": "CONFIRM_LEGITIMATE" }
            })
        );
    }

    #[test]
    fn test_credit_request_with_sender() {
        let request = StandaloneCreditRequest::builder()
            .merchant_ref_num("credit-002")
            .amount(7500)
            .currency_code("CAD")
            .payment_handle_token("tok-interac")
            .sender(
                Sender::builder()
                    .first_name("Ana")
                    .last_name("Moreira")
                    .build(),
            )
            .build();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "merchantRefNum": "credit-002",
                "amount": 7500,
                "currencyCode": "CAD",
                "paymentHandleToken": "tok-interac",
                "sender": { "firstName": "Ana", "lastName": "Moreira" }
            })
        );
    }

    #[test]
    fn test_list_uses_standalone_credits_key() {
        let list: StandaloneCreditList = serde_json::from_value(json!({
            "standaloneCredits": [ { "id": "sc-1", "status": "COMPLETED" } ]
        }))
        .unwrap();

        let credits = list.standalone_credits.unwrap();
        assert_eq!(credits[0].status, Some(TransactionRequestStatus::Completed));
    }
}
