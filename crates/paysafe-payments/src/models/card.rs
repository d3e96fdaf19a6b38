//! Card payloads: the card container itself, its expiry, and the 3-D Secure
//! authentication data that rides along on card payments.

use bon::Builder;
use serde::{Deserialize, Serialize};

/// Card network, as two-letter processor codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    #[serde(rename = "AM")]
    AmericanExpress,
    #[serde(rename = "DI")]
    Discover,
    #[serde(rename = "JC")]
    Jcb,
    #[serde(rename = "MC")]
    Mastercard,
    #[serde(rename = "MD")]
    Maestro,
    #[serde(rename = "SO")]
    Solo,
    #[serde(rename = "VI")]
    Visa,
    #[serde(rename = "VD")]
    VisaDebit,
    #[serde(rename = "VE")]
    VisaElectron,
}

/// Present only when the card is stored against a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardStatus {
    Active,
    Suspended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardCategory {
    Credit,
    Debit,
    Prepaid,
}

/// Expiry date of a card. Both parts are required whenever the expiry
/// itself is sent.
#[derive(Builder, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardExpiry {
    pub month: u16,
    pub year: u16,
}

/// Card details for a payment handle or stored customer instrument.
///
/// On requests the merchant supplies `card_num`/`card_expiry`/`cvv` (or a
/// `card_id` from the save-card flow); on responses the server masks the
/// number down to `last_digits` and `card_bin`.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub card_num: Option<String>,

    /// Card id returned in the response during the save-card flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub card_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_expiry: Option<CardExpiry>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub cvv: Option<String>,

    /// Cardholder name. Mandatory for 3DS flows.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub holder_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type: Option<CardType>,

    /// Last four digits, response only.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub last_digits: Option<String>,

    /// First six digits of the Bank Identification Number.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub card_bin: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub issuing_country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CardStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_category: Option<CardCategory>,
}

/// 3-D Secure request parameters sent with a card payment handle.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeDs {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub device_fingerprinting_id: Option<String>,

    /// Fully qualified URL of the merchant site.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub merchant_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub device_channel: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub requestor_challenge_preference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub message_category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub transaction_intent: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub authentication_purpose: Option<String>,
}

/// Browser environment snapshot for the 3DS2 risk engine.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub accept_header: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_depth_bits: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub customer_ip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub java_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub javascript_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_height: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_width: Option<u32>,

    /// Minutes between UTC and the browser's local time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone_offset: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub user_agent: Option<String>,
}

/// Externally sourced 3DS authentication results, attached when the
/// merchant ran authentication outside Paysafe.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardAuthentication {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub eci: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub cavv: Option<String>,

    #[serde(rename = "threeDResult", skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub three_d_result: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub directory_server_transaction_id: Option<String>,

    #[serde(rename = "threeDSecureVersion", skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub three_d_secure_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub exemption_indicator: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_card_request_shape() {
        let card = Card::builder()
            .card_num("4111111111111111")
            .card_expiry(CardExpiry::builder().month(12).year(2027).build())
            .cvv("111")
            .holder_name("Jane Roe")
            .build();

        assert_eq!(
            serde_json::to_value(&card).unwrap(),
            json!({
                "cardNum": "4111111111111111",
                "cardExpiry": { "month": 12, "year": 2027 },
                "cvv": "111",
                "holderName": "Jane Roe"
            })
        );
    }

    #[test]
    fn test_masked_card_response_deserializes() {
        let card: Card = serde_json::from_value(json!({
            "cardExpiry": { "month": 6, "year": 2026 },
            "cardType": "VI",
            "lastDigits": "1111",
            "cardBin": "411111",
            "status": "ACTIVE"
        }))
        .unwrap();

        assert_eq!(card.card_type, Some(CardType::Visa));
        assert_eq!(card.last_digits.as_deref(), Some("1111"));
        assert_eq!(card.status, Some(CardStatus::Active));
        assert!(card.card_num.is_none());
    }

    #[test]
    fn test_card_expiry_equal_builders_hash_alike() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let a = CardExpiry::builder().month(3).year(2028).build();
        let b = CardExpiry { month: 3, year: 2028 };
        assert_eq!(a, b);

        let mut ha = DefaultHasher::new();
        let mut hb = DefaultHasher::new();
        a.hash(&mut ha);
        b.hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
    }

    #[test]
    fn test_card_authentication_wire_names() {
        let auth = CardAuthentication::builder()
            .eci("05")
            .three_d_result("Y")
            .three_d_secure_version("2.2.0")
            .build();

        assert_eq!(
            serde_json::to_value(&auth).unwrap(),
            json!({
                "eci": "05",
                "threeDResult": "Y",
                "threeDSecureVersion": "2.2.0"
            })
        );
    }
}
