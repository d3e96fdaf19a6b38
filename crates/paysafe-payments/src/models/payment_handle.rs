//! Payment handle payloads.
//!
//! A handle captures a payment method once (card entry, wallet token,
//! hosted redirect) and yields a `paymentHandleToken` that the settlement
//! carrying endpoints consume.

use bon::Builder;
use serde::{Deserialize, Serialize};

use paysafe_core::types::{CurrencyCode, ExtraFields, ExtraFieldsExt, Meta};

use super::card::{BrowserDetails, CardAuthentication, ThreeDs};
use super::common::{
    BillingDetails, DeviceDetails, GatewayResponse, Link, Mandate, MerchantDescriptor,
    PaymentDetails, Profile, ReturnLink, ShippingDetails,
};
use super::payment_method::PaymentMethodSlot;

/// Payment-type discriminator used across handles and lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    Card,
    Skrill,
    Neteller,
    Paysafecash,
    Paysafecard,
    Paypal,
    /// Wire value contains a space, not an underscore.
    #[serde(rename = "PAY BY BANK")]
    PayByBank,
    Venmo,
    Vippreferred,
    Mazooma,
    Mbway,
    Multibanco,
    Sightline,
    InteracEtransfer,
    RapidTransfer,
    #[serde(rename = "SKRILL1TAP")]
    Skrill1Tap,
    Ach,
    Eft,
    Bacs,
    Sepa,
    OnlineBankTransfer,
    Pix,
    Khipu,
    Mach,
    BoletoBancario,
    SafetypayCash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Payment,
    StandaloneCredit,
    OriginalCredit,
    Verification,
}

/// Handle lifecycle. Only `PAYABLE` handles can fund a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentHandleStatus {
    Initiated,
    Payable,
    Processing,
    Failed,
    Expired,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentHandleUsage {
    SingleUse,
    MultiUse,
}

/// What the caller must do next to move the handle forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    None,
    Redirect,
    Lookup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionMode {
    Synchronous,
    Asynchronous,
}

/// Request body for `POST /v1/paymenthandles`.
///
/// Exactly one payment method may be attached; see
/// [`PaymentMethodSlot`](super::payment_method::PaymentMethodSlot).
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentHandleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub merchant_ref_num: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub account_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,

    /// Amount in minor units of `currency_code`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub currency_code: Option<CurrencyCode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_details: Option<BillingDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_descriptor: Option<MerchantDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_links: Option<Vec<ReturnLink>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub customer_ip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_details: Option<ShippingDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub three_ds: Option<ThreeDs>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<CardAuthentication>,

    /// Token of a multi-use handle this single-use handle derives from.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub payment_handle_token_from: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub transaction_intent: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_details: Option<BrowserDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_details: Option<DeviceDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dup_check: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandates: Option<Vec<Mandate>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_expiry_in_minutes: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_details: Option<PaymentDetails>,

    /// Older spelling some processors still return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_expiry_minutes: Option<u32>,

    #[serde(flatten)]
    #[builder(into, default)]
    pub payment_method: PaymentMethodSlot,

    #[serde(flatten)]
    #[builder(default)]
    pub extra: ExtraFields,
}

impl ExtraFieldsExt for PaymentHandleRequest {
    fn extra_fields(&self) -> &ExtraFields {
        &self.extra
    }

    fn extra_fields_mut(&mut self) -> &mut ExtraFields {
        &mut self.extra
    }
}

/// Payment handle resource returned by the server.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentHandle {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub id: Option<String>,

    /// Token consumed by the payments endpoints while the handle is payable.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub payment_handle_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub txn_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentHandleStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_mode: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<PaymentHandleUsage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_mode: Option<ExecutionMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_live_seconds: Option<u32>,

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
    pub links: Option<Vec<Link>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub merchant_ref_num: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub account_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub currency_code: Option<CurrencyCode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_details: Option<BillingDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_descriptor: Option<MerchantDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_links: Option<Vec<ReturnLink>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub customer_ip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_details: Option<ShippingDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip3ds: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub three_ds: Option<ThreeDs>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<CardAuthentication>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub payment_handle_token_from: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub transaction_intent: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_response: Option<GatewayResponse>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_details: Option<BrowserDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_details: Option<DeviceDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dup_check: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandates: Option<Vec<Mandate>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_expiry_in_minutes: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_details: Option<PaymentDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_expiry_minutes: Option<u32>,

    #[serde(flatten)]
    #[builder(into, default)]
    pub payment_method: PaymentMethodSlot,

    #[serde(flatten)]
    #[builder(default)]
    pub extra: ExtraFields,
}

impl ExtraFieldsExt for PaymentHandle {
    fn extra_fields(&self) -> &ExtraFields {
        &self.extra
    }

    fn extra_fields_mut(&mut self) -> &mut ExtraFields {
        &mut self.extra
    }
}

/// Envelope for `GET /v1/paymenthandles?merchantRefNum=...`.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentHandleList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_handles: Option<Vec<PaymentHandle>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::models::card::{Card, CardExpiry};
    use crate::models::common::ReturnLinkRel;
    use crate::models::payment_method::PaymentMethod;

    use super::*;

    #[test]
    fn test_card_handle_request_wire_shape() {
        let request = PaymentHandleRequest::builder()
            .merchant_ref_num("handle-001")
            .transaction_type(TransactionType::Payment)
            .payment_type(PaymentType::Card)
            .amount(500)
            .currency_code("USD")
            .payment_method(PaymentMethod::Card(
                Card::builder()
                    .card_num("4111111111111111")
                    .card_expiry(CardExpiry::builder().month(10).year(2028).build())
                    .cvv("123")
                    .build(),
            ))
            .build();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "merchantRefNum": "handle-001",
                "transactionType": "PAYMENT",
                "paymentType": "CARD",
                "amount": 500,
                "currencyCode": "USD",
                "card": {
                    "cardNum": "4111111111111111",
                    "cardExpiry": { "month": 10, "year": 2028 },
                    "cvv": "123"
                }
            })
        );
    }

    #[test]
    fn test_pay_by_bank_wire_value_has_space() {
        assert_eq!(
            serde_json::to_value(PaymentType::PayByBank).unwrap(),
            json!("PAY BY BANK")
        );
        let back: PaymentType = serde_json::from_value(json!("PAY BY BANK")).unwrap();
        assert_eq!(back, PaymentType::PayByBank);
    }

    #[test]
    fn test_handle_response_with_unknown_fields() {
        let handle: PaymentHandle = serde_json::from_value(json!({
            "id": "ph-1",
            "paymentHandleToken": "tok-abc",
            "status": "PAYABLE",
            "usage": "SINGLE_USE",
            "action": "NONE",
            "executionMode": "SYNCHRONOUS",
            "links": [ { "rel": "redirect_payment", "href": "https://pay.example" } ],
            "newServerField": { "a": 1 }
        }))
        .unwrap();

        assert_eq!(handle.status, Some(PaymentHandleStatus::Payable));
        assert_eq!(
            handle.links.as_ref().unwrap()[0].rel,
            Some(ReturnLinkRel::RedirectPayment)
        );
        assert_eq!(handle.extra.get("newServerField"), Some(&json!({ "a": 1 })));
    }

    #[test]
    fn test_list_envelope_round_trip() {
        let wire = json!({
            "paymentHandles": [ { "id": "ph-1" }, { "id": "ph-2" } ],
            "meta": { "numberOfRecords": 2, "limit": 10, "page": 1 }
        });

        let list: PaymentHandleList = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(list.payment_handles.as_ref().unwrap().len(), 2);
        assert_eq!(list.meta.as_ref().unwrap().number_of_records, Some(2));
        assert_eq!(serde_json::to_value(&list).unwrap(), wire);
    }
}
