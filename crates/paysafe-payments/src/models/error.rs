//! Structured error payloads the gateway attaches to failed and
//! declined transactions.
//!
//! The same shape appears in two places: nested under the `error` key of
//! a non-2xx response body, and inline on otherwise-successful resources
//! whose processing failed downstream (for example a `FAILED` settlement).

use bon::Builder;
use serde::{Deserialize, Serialize};

/// One request field the gateway rejected, with the reason.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub field: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub error: Option<String>,
}

/// Processor-specific detail forwarded alongside the primary error code.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalDetail {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub detail_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub message: Option<String>,
}

/// The gateway's error object.
///
/// `code` is a stable numeric-string identifier (for example `"3002"`);
/// `message` is human-readable and may change between releases.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<Vec<FieldError>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_details: Option<Vec<AdditionalDetail>>,
}

/// Top-level body of a non-2xx response: `{ "error": { ... } }`.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_error_response_decodes_nested_error() {
        let body: ErrorResponse = serde_json::from_value(json!({
            "error": {
                "code": "5068",
                "message": "Field error(s)",
                "fieldErrors": [
                    { "field": "amount", "error": "must be greater than 0" }
                ]
            }
        }))
        .unwrap();

        let error = body.error.unwrap();
        assert_eq!(error.code.as_deref(), Some("5068"));
        let field_errors = error.field_errors.unwrap();
        assert_eq!(field_errors[0].field.as_deref(), Some("amount"));
    }

    #[test]
    fn test_additional_detail_type_wire_name() {
        let detail = AdditionalDetail::builder()
            .detail_type("PROCESSOR")
            .code("05")
            .message("Do not honor")
            .build();

        assert_eq!(
            serde_json::to_value(&detail).unwrap(),
            json!({ "type": "PROCESSOR", "code": "05", "message": "Do not honor" })
        );
    }
}
