//! Digital wallet payloads (Apple Pay and Google Pay).
//!
//! The documented tokenization layers are typed; the opaque decrypted blobs
//! the processor relays untouched stay as [`AnyJson`].

use bon::Builder;
use serde::{Deserialize, Serialize};

use paysafe_core::types::AnyJson;

#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplePayTokenHeader {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub transaction_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub ephemeral_public_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub public_key_hash: Option<String>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplePayPaymentMethod {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub network: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub method_type: Option<String>,
}

/// Encrypted PKPaymentToken payment data as produced by the device.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplePayTokenPaymentData {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub data: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub signature: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<ApplePayTokenHeader>,

    /// Decrypted form, present only on server responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decrypted_data: Option<AnyJson>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplePayTokenData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_data: Option<ApplePayTokenPaymentData>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<ApplePayPaymentMethod>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub transaction_identifier: Option<String>,
}

/// Postal contact captured by the Apple Pay sheet.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplePayBillingContact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_lines: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub administrative_area: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub country_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub family_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub given_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub locality: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub phonetic_family_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub phonetic_given_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub postal_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub sub_administrative_area: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub sub_locality: Option<String>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplePayPaymentToken {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<ApplePayTokenData>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_contact: Option<ApplePayBillingContact>,
}

/// Apple Pay variant payload for a payment handle.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplePay {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_billing_address: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub apple_pay_payment_token: Option<ApplePayPaymentToken>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_contact: Option<ApplePayBillingContact>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GooglePayTokenizationData {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub token: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub tokenization_type: Option<String>,

    /// Decrypted form, present only on server responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decrypted_token: Option<AnyJson>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GooglePayPaymentMethodDataInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<AnyJson>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub card_details: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub card_network: Option<String>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GooglePayPaymentMethodData {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<GooglePayPaymentMethodDataInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokenization_data: Option<GooglePayTokenizationData>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub data_type: Option<String>,
}

/// PaymentData response from the Google Pay API, wrapped for submission.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GooglePayPaymentToken {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version_minor: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_data: Option<GooglePayPaymentMethodData>,
}

/// Google Pay variant payload for a payment handle.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GooglePay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_pay_payment_token: Option<GooglePayPaymentToken>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_google_pay_nested_wire_shape() {
        let wallet = GooglePay::builder()
            .google_pay_payment_token(
                GooglePayPaymentToken::builder()
                    .api_version(2)
                    .api_version_minor(0)
                    .payment_method_data(
                        GooglePayPaymentMethodData::builder()
                            .data_type("CARD")
                            .tokenization_data(
                                GooglePayTokenizationData::builder()
                                    .token("ey...")
                                    .tokenization_type("PAYMENT_GATEWAY")
                                    .build(),
                            )
                            .build(),
                    )
                    .build(),
            )
            .build();

        assert_eq!(
            serde_json::to_value(&wallet).unwrap(),
            json!({
                "googlePayPaymentToken": {
                    "apiVersion": 2,
                    "apiVersionMinor": 0,
                    "paymentMethodData": {
                        "type": "CARD",
                        "tokenizationData": {
                            "token": "ey...",
                            "type": "PAYMENT_GATEWAY"
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn test_apple_pay_decrypted_blob_round_trips_untouched() {
        let wire = json!({
            "applePayPaymentToken": {
                "token": {
                    "paymentData": {
                        "version": "EC_v1",
                        "decryptedData": {
                            "applicationPrimaryAccountNumber": "4111111111111111",
                            "currencyCode": "840",
                            "custom": { "nested": [1, 2, 3] }
                        }
                    },
                    "transactionIdentifier": "abc123"
                }
            }
        });

        let wallet: ApplePay = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(serde_json::to_value(&wallet).unwrap(), wire);
    }
}
