//! Original credit payloads: push funds back onto a card (OCT) without a
//! prior payment in this wallet.

use bon::Builder;
use serde::{Deserialize, Serialize};

use paysafe_core::types::{CurrencyCode, ExtraFields, ExtraFieldsExt, Meta};

use super::common::{GatewayResponse, TransactionRequestStatus};
use super::error::ApiError;
use super::payment_handle::PaymentType;

/// Request body for `POST /v1/originalcredits`.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginalCreditRequest {
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

    #[serde(flatten)]
    #[builder(default)]
    pub extra: ExtraFields,
}

impl ExtraFieldsExt for OriginalCreditRequest {
    fn extra_fields(&self) -> &ExtraFields {
        &self.extra
    }

    fn extra_fields_mut(&mut self) -> &mut ExtraFields {
        &mut self.extra
    }
}

/// Original credit resource returned by the server.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginalCredit {
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

impl ExtraFieldsExt for OriginalCredit {
    fn extra_fields(&self) -> &ExtraFields {
        &self.extra
    }

    fn extra_fields_mut(&mut self) -> &mut ExtraFields {
        &mut self.extra
    }
}

/// Envelope for `GET /v1/originalcredits?merchantRefNum=...`.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginalCreditList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_credits: Option<Vec<OriginalCredit>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_request_minimal_shape() {
        let request = OriginalCreditRequest::builder()
            .merchant_ref_num("oct-001")
            .amount(1500)
            .currency_code("USD")
            .payment_handle_token("tok-card")
            .build();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "merchantRefNum": "oct-001",
                "amount": 1500,
                "currencyCode": "USD",
                "paymentHandleToken": "tok-card"
            })
        );
    }

    #[test]
    fn test_response_status_decodes() {
        let credit: OriginalCredit = serde_json::from_value(json!({
            "id": "oc-1",
            "status": "PENDING",
            "paymentType": "CARD"
        }))
        .unwrap();

        assert_eq!(credit.status, Some(TransactionRequestStatus::Pending));
        assert_eq!(credit.payment_type, Some(PaymentType::Card));
    }
}
