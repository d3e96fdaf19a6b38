//! Local and alternate payment method payloads: wallets-by-reference
//! (Skrill, Neteller, PayPal, Venmo), cash vouchers, US/CA/UK/EU bank
//! rails, and Interac e-Transfer.
//!
//! Country, language, and bank-name codes stay as plain strings; the server
//! validates them and the accepted sets change without SDK releases.

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::common::Mandate;

#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skrill {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub consumer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub email_subject: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub email_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub recipient_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub logo_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub detail1_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub detail1_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub country_code: Option<String>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Neteller {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub consumer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub recipient_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub logo_url: Option<String>,
}

/// Cash voucher paid at a Paysafecash point of sale.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paysafecash {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub consumer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_age_restriction: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub kyc_level_restriction: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub country_restriction: Option<String>,

    /// Minutes until the generated barcode expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<u32>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paysafecard {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub consumer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_age_restriction: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub kyc_level_restriction: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub country_restriction: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub submerchant_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaypalShippingPreference {
    GetFromFile,
    NoShipping,
    SetProvidedAddress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaypalRecipientType {
    PaypalId,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paypal {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub consumer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub recipient_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_preference: Option<PaypalShippingPreference>,

    /// Note shown to the consumer in the PayPal checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub consumer_message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub order_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_type: Option<PaypalRecipientType>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venmo {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub consumer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub merchant_account_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub profile_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AchPayMethod {
    Web,
    Tel,
    Ppd,
    Ccd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BankAccountType {
    Savings,
    Checking,
    Loan,
}

/// US bank account pulled over the ACH network.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ach {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub account_holder_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_method: Option<AchPayMethod>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<BankAccountType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub account_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub routing_number: Option<String>,

    /// Response only, after the account number is masked.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub last_digits: Option<String>,
}

/// Registered ACH account reference used by Play+ and VIP Preferred.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchBankAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub bank_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub registration_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub routing_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub account_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub last_digits: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub payment_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub payment_handle_token: Option<String>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vippreferred {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub consumer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub registration_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub payment_handle_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ach: Option<AchBankAccount>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ach_bank_accounts: Option<Vec<AchBankAccount>>,
}

/// Play+ (Sightline) account reference.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sightline {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub consumer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub ssn: Option<String>,

    #[serde(rename = "last4ssn", skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub last4_ssn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub last_digits: Option<String>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayByBankAch {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub payment_handle_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<BankAccountType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub routing_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub last_digits: Option<String>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayByBank {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub consumer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub registration_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ach: Option<PayByBankAch>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MazoomaAch {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub payment_handle_token: Option<String>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mazooma {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub consumer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ach: Option<MazoomaAch>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteracTransferType {
    #[serde(rename = "ALIAS_REGULAR")]
    Regular,
    #[serde(rename = "ALIAS_AUTODEPOSIT")]
    Autodeposit,
}

/// Fraud disposition reported back to Interac on a completed transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InteracFraudStatus {
    ConfirmFraud,
    ConfirmLegitimate,
    Scam,
    PresumeLegitimate,
    Suspicious,
}

/// Interac e-Transfer details, used both in payment handles and in
/// standalone-credit fraud updates.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interac {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub consumer_id: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub transfer_kind: Option<String>,

    /// Security question for transfers without autodeposit.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub question: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub answer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_type: Option<InteracTransferType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fraud_status: Option<InteracFraudStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub fraud_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub payment_reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub method: Option<String>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RapidTransfer {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub consumer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub country_code: Option<String>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skrill1Tap {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub consumer_id: Option<String>,

    /// Upper bound for subsequent one-tap debits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<i64>,
}

/// Canadian EFT bank account.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eft {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub account_holder_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub account_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub transit_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub institution_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub last_digits: Option<String>,
}

/// UK BACS direct debit account, carries its signed mandate.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bacs {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub nick_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub account_holder_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub account_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub sort_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate: Option<Mandate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub last_digits: Option<String>,
}

/// SEPA direct debit account, carries its signed mandate.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sepa {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub nick_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub account_holder_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub bic: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub iban: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate: Option<Mandate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub last_digits: Option<String>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyPayCash {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub country_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name_codes: Option<Vec<String>>,
}
