//! Refund payloads: return settled funds to the customer.

use bon::Builder;
use serde::{Deserialize, Serialize};

use paysafe_core::types::{CurrencyCode, Meta};

use super::common::{GatewayResponse, Splitpay, TransactionRequestStatus};
use super::default_true;
use super::payment_handle::PaymentType;

/// Request body for `POST /v1/settlements/{settlementId}/refunds`.
///
/// Like settlements, `dup_check` defaults to `true` and is always sent.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub merchant_ref_num: Option<String>,

    /// Amount to return, in minor units. Omitted means the full settled
    /// amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(default = "default_true")]
    #[builder(default = true)]
    pub dup_check: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub splitpay: Option<Vec<Splitpay>>,
}

/// Refund resource returned by the server.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
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
    pub payment_type: Option<PaymentType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub currency_code: Option<CurrencyCode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub txn_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionRequestStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_response: Option<GatewayResponse>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub gateway_reconciliation_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub child_account_num: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_reason_code: Option<Vec<i32>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_mode: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub updated_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub status_time: Option<String>,
}

/// Envelope for `GET /v1/refunds?merchantRefNum=...`.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunds: Option<Vec<Refund>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_refund_request_carries_dup_check_default() {
        let request = RefundRequest::builder()
            .merchant_ref_num("refund-001")
            .build();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "merchantRefNum": "refund-001", "dupCheck": true })
        );
    }

    #[test]
    fn test_refund_response_round_trip() {
        let wire = json!({
            "id": "rfd-1",
            "merchantRefNum": "refund-001",
            "amount": 300,
            "status": "COMPLETED",
            "currencyCode": "CAD"
        });

        let refund: Refund = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(refund.status, Some(TransactionRequestStatus::Completed));
        assert_eq!(serde_json::to_value(&refund).unwrap(), wire);
    }
}
