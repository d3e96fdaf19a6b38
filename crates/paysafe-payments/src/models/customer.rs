//! Customer vault payloads: stored customers, their addresses, stored
//! payment handles, and single-use customer tokens for checkout sessions.

use bon::Builder;
use serde::{Deserialize, Serialize};

use paysafe_core::types::CurrencyCode;

use super::card::{CardAuthentication, ThreeDs};
use super::common::{
    BillingDetails, DateOfBirth, GatewayResponse, Gender, Locale, Mandate, MerchantDescriptor,
    Profile, ShippingDetails,
};
use super::payment_handle::{Action, PaymentHandleStatus, PaymentHandleUsage, PaymentType};
use super::payment_method::PaymentMethodSlot;

/// New customers start as `INITIAL` until the first instrument is
/// attached, after which the server reports `ACTIVE`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerStatus {
    Initial,
    #[default]
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddressStatus {
    Active,
    Initial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SingleUseCustomerTokenStatus {
    Initial,
    Active,
}

/// Instrument families a single-use token may expose to the checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SingleUseTokenPaymentType {
    Card,
    Eft,
    Ach,
    Bacs,
    Sepa,
}

/// Request body for `POST /v1/customers` and `PUT /v1/customers/{id}`.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    /// The merchant's own identifier; unique per customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub merchant_customer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub middle_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<DateOfBirth>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub cell_phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub nationality: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub ip: Option<String>,

    /// Seeds the vault from an existing multi-use payment handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub payment_handle_token_from: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub account_id: Option<String>,
}

/// Address stored against a customer.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AddressStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub nick_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub street: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub street2: Option<String>,

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

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_shipping_address_indicator: Option<bool>,
}

/// Payment handle stored in the customer vault (multi-use).
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPaymentHandle {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentHandleStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<PaymentHandleUsage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub currency_code: Option<CurrencyCode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub payment_handle_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub customer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub merchant_ref_num: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub customer_ip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_details: Option<BillingDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_descriptor: Option<MerchantDescriptor>,

    /// Reference to a stored address instead of inline billing details.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub billing_details_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub payment_handle_token_from: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub three_ds: Option<ThreeDs>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<CardAuthentication>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub transaction_intent: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_response: Option<GatewayResponse>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_details: Option<ShippingDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dup_check: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandates: Option<Vec<Mandate>>,

    #[serde(flatten)]
    #[builder(into, default)]
    pub payment_method: PaymentMethodSlot,
}

/// Request body for `POST /v1/customers/{customerId}/paymenthandles`.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPaymentHandleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub merchant_ref_num: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub customer_ip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_details: Option<BillingDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub billing_details_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub currency_code: Option<CurrencyCode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub payment_handle_token_from: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dup_check: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandates: Option<Vec<Mandate>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,

    #[serde(flatten)]
    #[builder(into, default)]
    pub payment_method: PaymentMethodSlot,
}

/// Customer resource returned by the server.
///
/// `status` carries a documented default of `ACTIVE` and is always
/// serialized.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub account_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub merchant_customer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub middle_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<DateOfBirth>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub cell_phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub nationality: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub ip: Option<String>,

    #[serde(default)]
    #[builder(default)]
    pub status: CustomerStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub payment_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<Address>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_handles: Option<Vec<CustomerPaymentHandle>>,
}

/// Request body for `POST /v1/customers/{customerId}/singleusecustomertokens`.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleUseCustomerTokenRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub merchant_ref_num: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<Vec<SingleUseTokenPaymentType>>,
}

/// Single-use customer token resource.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleUseCustomerToken {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub merchant_ref_num: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<Vec<SingleUseTokenPaymentType>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_live_seconds: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SingleUseCustomerTokenStatus>,

    /// The token itself, passed to the client-side SDK.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub single_use_customer_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub middle_name: Option<String>,

    /// All lowercase on the wire, unlike every other name field.
    #[serde(rename = "lastname", skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub lastname: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<DateOfBirth>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub ip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub nationality: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<Address>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_handles: Option<Vec<CustomerPaymentHandle>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub customer_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_customer_status_defaults_to_active() {
        let customer = Customer::builder().id("cust-1").build();

        assert_eq!(customer.status, CustomerStatus::Active);
        assert_eq!(
            serde_json::to_value(&customer).unwrap(),
            json!({ "id": "cust-1", "status": "ACTIVE" })
        );
    }

    #[test]
    fn test_customer_status_backfilled_on_deserialize() {
        let customer: Customer = serde_json::from_value(json!({
            "id": "cust-2",
            "merchantCustomerId": "mc-9"
        }))
        .unwrap();
        assert_eq!(customer.status, CustomerStatus::Active);
    }

    #[test]
    fn test_single_use_token_lastname_wire_name() {
        let token = SingleUseCustomerToken::builder()
            .first_name("Sam")
            .lastname("Hale")
            .build();

        assert_eq!(
            serde_json::to_value(&token).unwrap(),
            json!({ "firstName": "Sam", "lastname": "Hale" })
        );
    }

    #[test]
    fn test_customer_payment_handle_request_embeds_variant() {
        use crate::models::lpm::{Ach, AchPayMethod, BankAccountType};
        use crate::models::payment_method::PaymentMethod;

        let request = CustomerPaymentHandleRequest::builder()
            .merchant_ref_num("cph-001")
            .payment_type(PaymentType::Ach)
            .payment_method(PaymentMethod::Ach(
                Ach::builder()
                    .account_holder_name("Pat Doe")
                    .pay_method(AchPayMethod::Web)
                    .account_type(BankAccountType::Checking)
                    .account_number("999999999")
                    .routing_number("211589828")
                    .build(),
            ))
            .build();

        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(wire["merchantRefNum"], json!("cph-001"));
        assert_eq!(wire["paymentType"], json!("ACH"));
        assert_eq!(wire["ach"]["accountHolderName"], json!("Pat Doe"));
        assert!(wire.get("card").is_none());
    }

    #[test]
    fn test_vaulted_customer_with_nested_handles() {
        let customer: Customer = serde_json::from_value(json!({
            "id": "cust-3",
            "status": "ACTIVE",
            "addresses": [ { "id": "addr-1", "status": "ACTIVE", "country": "US" } ],
            "paymentHandles": [ {
                "id": "ph-9",
                "status": "PAYABLE",
                "paymentType": "CARD",
                "card": { "lastDigits": "1111", "cardType": "VI" }
            } ]
        }))
        .unwrap();

        let handles = customer.payment_handles.unwrap();
        assert_eq!(handles[0].payment_method.kind(), Some("card"));
        assert_eq!(
            handles[0]
                .payment_method
                .card
                .as_ref()
                .unwrap()
                .last_digits
                .as_deref(),
            Some("1111")
        );
    }
}
