//! [`CurrencyCode`] identifies the currency of a monetary amount.
//!
//! This module holds its type definition and implementations.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// An ISO 4217 alphabetic currency code, e.g. `"USD"`.
///
/// Codes outside the common set are preserved verbatim in
/// [`CurrencyCode::Other`] so responses never fail to decode on an
/// unlisted currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CurrencyCode {
    Aud,
    Brl,
    Bgn,
    Cad,
    Chf,
    Czk,
    Dkk,
    Eur,
    Gbp,
    Hkd,
    Huf,
    Ils,
    Inr,
    Isk,
    Jpy,
    Krw,
    Mxn,
    Nok,
    Nzd,
    Pen,
    Pln,
    Ron,
    Sek,
    Sgd,
    Thb,
    Try,
    Twd,
    Usd,
    Zar,
    Other(String),
}

impl CurrencyCode {
    pub fn as_str(&self) -> &str {
        match self {
            CurrencyCode::Aud => "AUD",
            CurrencyCode::Brl => "BRL",
            CurrencyCode::Bgn => "BGN",
            CurrencyCode::Cad => "CAD",
            CurrencyCode::Chf => "CHF",
            CurrencyCode::Czk => "CZK",
            CurrencyCode::Dkk => "DKK",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Hkd => "HKD",
            CurrencyCode::Huf => "HUF",
            CurrencyCode::Ils => "ILS",
            CurrencyCode::Inr => "INR",
            CurrencyCode::Isk => "ISK",
            CurrencyCode::Jpy => "JPY",
            CurrencyCode::Krw => "KRW",
            CurrencyCode::Mxn => "MXN",
            CurrencyCode::Nok => "NOK",
            CurrencyCode::Nzd => "NZD",
            CurrencyCode::Pen => "PEN",
            CurrencyCode::Pln => "PLN",
            CurrencyCode::Ron => "RON",
            CurrencyCode::Sek => "SEK",
            CurrencyCode::Sgd => "SGD",
            CurrencyCode::Thb => "THB",
            CurrencyCode::Try => "TRY",
            CurrencyCode::Twd => "TWD",
            CurrencyCode::Usd => "USD",
            CurrencyCode::Zar => "ZAR",
            CurrencyCode::Other(code) => code.as_str(),
        }
    }
}

impl From<&str> for CurrencyCode {
    fn from(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "AUD" => CurrencyCode::Aud,
            "BRL" => CurrencyCode::Brl,
            "BGN" => CurrencyCode::Bgn,
            "CAD" => CurrencyCode::Cad,
            "CHF" => CurrencyCode::Chf,
            "CZK" => CurrencyCode::Czk,
            "DKK" => CurrencyCode::Dkk,
            "EUR" => CurrencyCode::Eur,
            "GBP" => CurrencyCode::Gbp,
            "HKD" => CurrencyCode::Hkd,
            "HUF" => CurrencyCode::Huf,
            "ILS" => CurrencyCode::Ils,
            "INR" => CurrencyCode::Inr,
            "ISK" => CurrencyCode::Isk,
            "JPY" => CurrencyCode::Jpy,
            "KRW" => CurrencyCode::Krw,
            "MXN" => CurrencyCode::Mxn,
            "NOK" => CurrencyCode::Nok,
            "NZD" => CurrencyCode::Nzd,
            "PEN" => CurrencyCode::Pen,
            "PLN" => CurrencyCode::Pln,
            "RON" => CurrencyCode::Ron,
            "SEK" => CurrencyCode::Sek,
            "SGD" => CurrencyCode::Sgd,
            "THB" => CurrencyCode::Thb,
            "TRY" => CurrencyCode::Try,
            "TWD" => CurrencyCode::Twd,
            "USD" => CurrencyCode::Usd,
            "ZAR" => CurrencyCode::Zar,
            other => CurrencyCode::Other(other.to_string()),
        }
    }
}

impl From<String> for CurrencyCode {
    fn from(value: String) -> Self {
        CurrencyCode::from(value.as_str())
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CurrencyCode::from(s))
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for CurrencyCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CurrencyCode::from(s))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_serialize_common_code() {
        assert_eq!(serde_json::to_value(CurrencyCode::Usd).unwrap(), json!("USD"));
        assert_eq!(serde_json::to_value(CurrencyCode::Eur).unwrap(), json!("EUR"));
    }

    #[test]
    fn test_deserialize_common_code() {
        let code: CurrencyCode = serde_json::from_value(json!("CAD")).unwrap();
        assert_eq!(code, CurrencyCode::Cad);
    }

    #[test]
    fn test_unlisted_code_round_trips() {
        let code: CurrencyCode = serde_json::from_value(json!("XTS")).unwrap();
        assert_eq!(code, CurrencyCode::Other("XTS".to_string()));
        assert_eq!(serde_json::to_value(&code).unwrap(), json!("XTS"));
    }

    #[test]
    fn test_from_str_normalizes_case() {
        assert_eq!(CurrencyCode::from("usd"), CurrencyCode::Usd);
        assert_eq!(CurrencyCode::from("xts"), CurrencyCode::Other("XTS".to_string()));
    }
}
