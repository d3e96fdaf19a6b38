//! Payment payloads: authorize (and optionally settle) against a payable
//! payment handle token.

use bon::Builder;
use serde::{Deserialize, Serialize};

use paysafe_core::types::{CurrencyCode, ExtraFields, ExtraFieldsExt, Meta};

use super::common::{
    BillingDetails, GatewayResponse, MerchantDescriptor, Profile, ReturnLink, Splitpay,
    StoredCredential,
};
use super::error::ApiError;
use super::payment_handle::PaymentType;
use super::payment_method::PaymentMethodSlot;
use super::settlement::Settlement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentRequestStatus {
    Received,
    Processing,
    Completed,
    Held,
    Failed,
    Cancelled,
    Pending,
}

/// Request body for `POST /v1/payments`.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub merchant_ref_num: Option<String>,

    /// Amount in minor units of `currency_code`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dup_check: Option<bool>,

    /// `true` authorizes and settles in one step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settle_with_auth: Option<bool>,

    /// Token of a `PAYABLE` payment handle.
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
    pub pre_auth: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub splitpay: Option<Vec<Splitpay>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_credential_details: Option<StoredCredential>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_descriptor: Option<MerchantDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,

    #[serde(flatten)]
    #[builder(default)]
    pub extra: ExtraFields,
}

impl ExtraFieldsExt for PaymentRequest {
    fn extra_fields(&self) -> &ExtraFields {
        &self.extra
    }

    fn extra_fields_mut(&mut self) -> &mut ExtraFields {
        &mut self.extra
    }
}

/// Payment resource returned by the server.
///
/// A declined payment still arrives as a successful HTTP response; the
/// decline shows up in `status`/`gateway_response`, not as a client error.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
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
    pub settle_with_auth: Option<bool>,

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
    pub pre_auth: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub transaction_intent: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_response: Option<GatewayResponse>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_links: Option<Vec<ReturnLink>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_details: Option<BillingDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_profile: Option<Profile>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_descriptor: Option<MerchantDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub description: Option<String>,

    /// Remaining authorized amount that can still be settled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_to_settle: Option<i64>,

    /// Settled amount that can still be refunded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_to_refund: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub child_account_num: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub txn_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentRequestStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_reason_code: Option<Vec<i32>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlements: Option<Vec<Settlement>>,

    /// Processor-level error details for failed payments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub status_reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub gateway_reconciliation_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub updated_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub status_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_mode: Option<bool>,

    #[serde(flatten)]
    #[builder(into, default)]
    pub payment_method: PaymentMethodSlot,

    #[serde(flatten)]
    #[builder(default)]
    pub extra: ExtraFields,
}

impl ExtraFieldsExt for Payment {
    fn extra_fields(&self) -> &ExtraFields {
        &self.extra
    }

    fn extra_fields_mut(&mut self) -> &mut ExtraFields {
        &mut self.extra
    }
}

/// Envelope for `GET /v1/payments?merchantRefNum=...`.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payments: Option<Vec<Payment>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_request_serializes_only_populated_fields() {
        let request = PaymentRequest::builder()
            .merchant_ref_num("ref-001")
            .amount(1099)
            .currency_code("USD")
            .payment_handle_token("tok-abc")
            .settle_with_auth(true)
            .build();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "merchantRefNum": "ref-001",
                "amount": 1099,
                "currencyCode": "USD",
                "paymentHandleToken": "tok-abc",
                "settleWithAuth": true
            })
        );
    }

    #[test]
    fn test_builder_order_does_not_matter() {
        let a = PaymentRequest::builder()
            .merchant_ref_num("ref-002")
            .amount(250)
            .currency_code("EUR")
            .build();
        let b = PaymentRequest::builder()
            .currency_code("EUR")
            .amount(250)
            .merchant_ref_num("ref-002")
            .build();

        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap()
        );
    }

    #[test]
    fn test_extra_field_serializes_as_flat_sibling() {
        let request = PaymentRequest::builder()
            .merchant_ref_num("ref-003")
            .build()
            .with_extra_field("extra1", json!("v1"))
            .unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "merchantRefNum": "ref-003", "extra1": "v1" })
        );
    }

    #[test]
    fn test_extra_field_rejects_declared_attribute() {
        let err = PaymentRequest::builder()
            .merchant_ref_num("ref-004")
            .build()
            .with_extra_field("merchantRefNum", json!("other"))
            .unwrap_err();

        assert!(err.to_string().contains("merchantRefNum"));
    }

    #[test]
    fn test_sparse_response_decodes() {
        let payment: Payment = serde_json::from_value(json!({
            "id": "pay-1",
            "status": "COMPLETED",
            "amount": 1099
        }))
        .unwrap();

        assert_eq!(payment.id.as_deref(), Some("pay-1"));
        assert_eq!(payment.status, Some(PaymentRequestStatus::Completed));
        assert_eq!(payment.amount, Some(1099));
        assert!(payment.merchant_ref_num.is_none());
        assert!(payment.gateway_response.is_none());
        assert!(payment.payment_method.is_empty());
        assert!(payment.extra.is_empty());
    }

    #[test]
    fn test_declined_payment_is_data_not_error() {
        let payment: Payment = serde_json::from_value(json!({
            "id": "pay-2",
            "status": "FAILED",
            "gatewayResponse": { "code": "3022", "responseCode": "DECLINED" },
            "error": { "code": "3022", "message": "The account is declined." }
        }))
        .unwrap();

        assert_eq!(payment.status, Some(PaymentRequestStatus::Failed));
        assert_eq!(
            payment.gateway_response.unwrap().response_code.as_deref(),
            Some("DECLINED")
        );
        assert_eq!(payment.error.unwrap().code.as_deref(), Some("3022"));
    }

    #[test]
    fn test_unknown_response_fields_round_trip() {
        let wire = json!({
            "id": "pay-3",
            "status": "COMPLETED",
            "serverOnlyField": [1, 2, 3]
        });

        let payment: Payment = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(payment.extra.get("serverOnlyField"), Some(&json!([1, 2, 3])));
        assert_eq!(serde_json::to_value(&payment).unwrap(), wire);
    }
}
