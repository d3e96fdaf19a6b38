//! Payment-methods lookup: which instrument families an account can
//! accept for a given currency.

use bon::Builder;
use serde::{Deserialize, Serialize};

use paysafe_core::types::CurrencyCode;

use super::payment_handle::PaymentType;

/// One payment method enabled on the merchant account.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailablePaymentMethod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub currency_code: Option<CurrencyCode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub account_id: Option<String>,
}

/// Response body of `GET /v1/paymentmethods?currencyCode=...`.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookUpPaymentMethodsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<Vec<AvailablePaymentMethod>>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_lookup_response_decodes_methods() {
        let response: LookUpPaymentMethodsResponse = serde_json::from_value(json!({
            "paymentMethods": [
                { "paymentMethod": "CARD", "currencyCode": "USD", "accountId": "1009688230" },
                { "paymentMethod": "PAY BY BANK", "currencyCode": "USD", "accountId": "1009688231" }
            ]
        }))
        .unwrap();

        let methods = response.payment_methods.unwrap();
        assert_eq!(methods.len(), 2);
        assert_eq!(methods[0].payment_method, Some(PaymentType::Card));
        assert_eq!(methods[1].payment_method, Some(PaymentType::PayByBank));
        assert_eq!(methods[0].currency_code, Some(CurrencyCode::Usd));
    }
}
