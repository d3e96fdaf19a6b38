//! Nested payloads shared across many parent request/response types:
//! billing/shipping details, customer profiles, stored-credential metadata,
//! mandates, return links, and the processor's gateway response.

use bon::Builder;
use serde::{Deserialize, Serialize};

/// Transaction lifecycle status shared by settlements, refunds, credits
/// and cancellation responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionRequestStatus {
    Received,
    Initiated,
    Pending,
    Failed,
    Cancelled,
    Expired,
    Completed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoredCredentialRequestType {
    #[default]
    Adhoc,
    Topup,
    Recurring,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoredCredentialRequestOccurrence {
    #[default]
    Initial,
    Subsequent,
}

/// Flags a transaction as using stored card credentials.
///
/// `credential_type` and `occurrence` carry documented non-null defaults
/// (`ADHOC` / `INITIAL`): they are always present on the wire, even when the
/// caller never set them.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredCredential {
    #[serde(rename = "type", default)]
    #[builder(default)]
    pub credential_type: StoredCredentialRequestType,

    #[serde(default)]
    #[builder(default)]
    pub occurrence: StoredCredentialRequestOccurrence,

    /// Transaction id of the initial recurring payment, as assigned by Paysafe.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub initial_transaction_id: Option<String>,

    /// Initial transaction id assigned by an external provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub external_initial_transaction_id: Option<String>,
}

/// Billing address attached to a payment or stored with a handle.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub nick_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub street: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub street1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub street2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub state: Option<String>,

    /// Two-letter ISO 3166-1 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub zip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipMethod {
    /// Next-day or overnight shipping.
    #[serde(rename = "N")]
    NextDay,
    /// Two-day service.
    #[serde(rename = "T")]
    TwoDayService,
    /// Lowest-cost shipping.
    #[serde(rename = "C")]
    LowestCost,
    #[serde(rename = "O")]
    Other,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_method: Option<ShipMethod>,

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
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

/// Locales supported for customer communication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "en_US")]
    EnUs,
    #[serde(rename = "fr_CA")]
    FrCa,
    #[serde(rename = "en_CA")]
    EnCa,
    #[serde(rename = "en_GB")]
    EnGb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactVerification {
    NotVerified,
    Verified,
}

#[derive(Builder, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateOfBirth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityDocument {
    /// Document kind, e.g. `SOCIAL_SECURITY`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub document_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub document_number: Option<String>,
}

/// Customer profile embedded in payment handles and payments.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub status: Option<String>,

    /// The merchant's own identifier for this customer.
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
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<ContactVerification>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_verified: Option<ContactVerification>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<DateOfBirth>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub nationality: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_documents: Option<Vec<IdentityDocument>>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub device_id: Option<String>,
}

/// Descriptor shown on the customer's card statement.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub dynamic_descriptor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MandateRequestStatus {
    Pending,
    Active,
    Cancelled,
    Inactive,
}

/// Bank-transfer mandate reference returned with BACS/SEPA handles.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mandate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MandateRequestStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub status_reason: Option<String>,
}

/// Where the endpoint should redirect the customer after a hosted flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnLinkRel {
    RedirectPayment,
    RedirectRegistration,
    OnCompleted,
    Default,
    OnFailed,
    OnCancelled,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<ReturnLinkRel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub href: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub method: Option<String>,
}

/// Link emitted by the server on hosted-flow responses. Same shape as
/// [`ReturnLink`], kept separate because the server owns these values.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<ReturnLinkRel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub href: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub method: Option<String>,
}

/// Marketplace split instruction: route part of the funds to a linked account.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Splitpay {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub linked_account: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<i64>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub country_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name_codes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvsResponse {
    Match,
    MatchAddressOnly,
    MatchZipOnly,
    NoMatch,
    NotProcessed,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CvvVerification {
    Match,
    NoMatch,
    NotProcessed,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NameVerification {
    Match,
    PartialMatch,
    NoMatch,
    NotProcessed,
    Unknown,
}

/// Raw details returned by the downstream processor.
///
/// Populated on responses only. A decline reported here arrives with a
/// successful HTTP status; callers inspect the payload's `status` field
/// rather than relying on an error.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub processor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub response_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub response_code_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub avs_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avs_response: Option<AvsResponse>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv_verification: Option<CvvVerification>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_verification: Option<NameVerification>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub balance_response: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub mid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub terminal_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub batch_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub seq_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub effective_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub auth_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub txn_date_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub reference_nbr: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub response_reason_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub cvv2_result: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub order_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub operation_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub request_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub response_id: Option<String>,
}

/// Body of a `PUT` cancellation: the only accepted value is `CANCELLED`.
#[derive(Builder, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelRequest {
    pub status: TransactionRequestStatus,
}

impl CancelRequest {
    /// Shorthand for the one meaningful cancellation body.
    pub fn cancelled() -> Self {
        CancelRequest {
            status: TransactionRequestStatus::Cancelled,
        }
    }
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionRequestStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub txn_time: Option<String>,
}
