//! SDK error type, mapping PaymentsAPI response statuses onto variants.
//!
//! Anything other than HTTP 200 or 201 becomes a [`PaysafeSdkError`]. Note
//! that a *decline* delivered with a 2xx status (for example a `FAILED`
//! payment handle) is data, not an error; only HTTP 402 surfaces as
//! [`PaysafeSdkError::RequestDeclined`].

use paysafe_core::types::AnyJson;

use crate::models::error::{ApiError, ErrorResponse};

/// Response header carrying the gateway's correlation identifier.
///
/// Quote it when raising an issue with Paysafe support.
pub const CORRELATION_ID_HEADER: &str = "X-INTERNAL-CORRELATION-ID";

#[derive(Debug, thiserror::Error)]
pub enum PaysafeSdkError {
    /// HTTP 400: the request body or parameters failed validation.
    #[error("invalid request (HTTP {status})")]
    InvalidRequest {
        status: u16,
        correlation_id: Option<String>,
        error: Option<ApiError>,
    },

    /// HTTP 401: the API key is missing, malformed, or revoked.
    #[error("invalid credentials (HTTP {status})")]
    InvalidCredentials {
        status: u16,
        correlation_id: Option<String>,
        error: Option<ApiError>,
    },

    /// HTTP 402: the gateway processed the request and declined it.
    ///
    /// `body` retains the full response resource; the declined object
    /// carries its usual fields alongside the embedded error.
    #[error("request declined (HTTP {status})")]
    RequestDeclined {
        status: u16,
        correlation_id: Option<String>,
        error: Option<ApiError>,
        body: Option<AnyJson>,
    },

    /// HTTP 403: the key is valid but not entitled to this resource.
    #[error("unauthorized (HTTP {status})")]
    Unauthorized {
        status: u16,
        correlation_id: Option<String>,
        error: Option<ApiError>,
    },

    /// HTTP 409: the request conflicts with current resource state.
    #[error("request conflict (HTTP {status})")]
    RequestConflict {
        status: u16,
        correlation_id: Option<String>,
        error: Option<ApiError>,
    },

    /// HTTP 5xx: the gateway failed internally.
    #[error("PaymentsAPI internal error (HTTP {status})")]
    Api {
        status: u16,
        correlation_id: Option<String>,
        error: Option<ApiError>,
    },

    /// Any other non-2xx status the taxonomy does not name.
    #[error("unexpected PaymentsAPI response (HTTP {status})")]
    Unexpected {
        status: u16,
        correlation_id: Option<String>,
        error: Option<ApiError>,
    },

    #[error("connection error: {0}")]
    Connection(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Serde JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("payload error: {0}")]
    Payload(#[from] paysafe_core::errors::Error),
}

pub type Result<T> = std::result::Result<T, PaysafeSdkError>;

impl PaysafeSdkError {
    /// Builds the error for a non-2xx response.
    ///
    /// The body is decoded as `{ "error": { ... } }`; declined resources
    /// carry the same key at top level, so one shape covers both. A body
    /// that fails to decode leaves `error` unset rather than masking the
    /// HTTP status.
    pub fn from_response(status: u16, correlation_id: Option<String>, body: &[u8]) -> Self {
        let error = serde_json::from_slice::<ErrorResponse>(body)
            .ok()
            .and_then(|response| response.error);

        match status {
            400 => Self::InvalidRequest {
                status,
                correlation_id,
                error,
            },
            401 => Self::InvalidCredentials {
                status,
                correlation_id,
                error,
            },
            402 => Self::RequestDeclined {
                status,
                correlation_id,
                error,
                body: serde_json::from_slice(body).ok(),
            },
            403 => Self::Unauthorized {
                status,
                correlation_id,
                error,
            },
            409 => Self::RequestConflict {
                status,
                correlation_id,
                error,
            },
            500.. => Self::Api {
                status,
                correlation_id,
                error,
            },
            _ => Self::Unexpected {
                status,
                correlation_id,
                error,
            },
        }
    }

    /// HTTP status of the response, when the error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidRequest { status, .. }
            | Self::InvalidCredentials { status, .. }
            | Self::RequestDeclined { status, .. }
            | Self::Unauthorized { status, .. }
            | Self::RequestConflict { status, .. }
            | Self::Api { status, .. }
            | Self::Unexpected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Value of the gateway's correlation-id header, when present.
    pub fn correlation_id(&self) -> Option<&str> {
        match self {
            Self::InvalidRequest { correlation_id, .. }
            | Self::InvalidCredentials { correlation_id, .. }
            | Self::RequestDeclined { correlation_id, .. }
            | Self::Unauthorized { correlation_id, .. }
            | Self::RequestConflict { correlation_id, .. }
            | Self::Api { correlation_id, .. }
            | Self::Unexpected { correlation_id, .. } => correlation_id.as_deref(),
            _ => None,
        }
    }

    /// The gateway's structured error object, when the body carried one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::InvalidRequest { error, .. }
            | Self::InvalidCredentials { error, .. }
            | Self::RequestDeclined { error, .. }
            | Self::Unauthorized { error, .. }
            | Self::RequestConflict { error, .. }
            | Self::Api { error, .. }
            | Self::Unexpected { error, .. } => error.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn error_body() -> Vec<u8> {
        json!({
            "error": {
                "code": "3002",
                "message": "You submitted an invalid card number"
            }
        })
        .to_string()
        .into_bytes()
    }

    #[test]
    fn test_status_taxonomy() {
        let cases: [(u16, fn(&PaysafeSdkError) -> bool); 7] = [
            (400, |e| matches!(e, PaysafeSdkError::InvalidRequest { .. })),
            (401, |e| {
                matches!(e, PaysafeSdkError::InvalidCredentials { .. })
            }),
            (402, |e| matches!(e, PaysafeSdkError::RequestDeclined { .. })),
            (403, |e| matches!(e, PaysafeSdkError::Unauthorized { .. })),
            (409, |e| matches!(e, PaysafeSdkError::RequestConflict { .. })),
            (500, |e| matches!(e, PaysafeSdkError::Api { .. })),
            (404, |e| matches!(e, PaysafeSdkError::Unexpected { .. })),
        ];

        for (status, matches_variant) in cases {
            let error = PaysafeSdkError::from_response(status, None, &error_body());
            assert!(matches_variant(&error), "status {status} mapped wrong");
            assert_eq!(error.status(), Some(status));
            assert_eq!(error.api_error().unwrap().code.as_deref(), Some("3002"));
        }
    }

    #[test]
    fn test_503_maps_to_api_error() {
        let error = PaysafeSdkError::from_response(503, None, b"");
        assert!(matches!(error, PaysafeSdkError::Api { .. }));
        assert!(error.api_error().is_none());
    }

    #[test]
    fn test_declined_retains_full_body() {
        let body = json!({
            "id": "pay-77",
            "merchantRefNum": "ref-77",
            "status": "FAILED",
            "error": { "code": "3022", "message": "The card has been declined" }
        })
        .to_string()
        .into_bytes();

        let error =
            PaysafeSdkError::from_response(402, Some("corr-1".to_string()), &body);

        assert_eq!(error.correlation_id(), Some("corr-1"));
        assert_eq!(error.api_error().unwrap().code.as_deref(), Some("3022"));
        match &error {
            PaysafeSdkError::RequestDeclined { body: Some(body), .. } => {
                assert_eq!(body["id"], json!("pay-77"));
                assert_eq!(body["status"], json!("FAILED"));
            }
            other => panic!("expected RequestDeclined with body, got {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_body_keeps_status() {
        let error = PaysafeSdkError::from_response(400, None, b"<html>bad gateway</html>");
        assert!(matches!(error, PaysafeSdkError::InvalidRequest { .. }));
        assert!(error.api_error().is_none());
    }
}
