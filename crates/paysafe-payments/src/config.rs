//! Client configuration: target environment and per-request overrides.

use std::time::Duration;

use bon::Builder;

/// Which gateway the client talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Production gateway, real money movement.
    Live,
    /// Merchant test gateway.
    #[default]
    Test,
}

impl Environment {
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Live => "https://api.paysafe.com",
            Environment::Test => "https://api.test.paysafe.com",
        }
    }
}

/// Simulated processing outcome, honored by the test gateway only.
///
/// `External` exercises the full downstream acquirer simulation;
/// `Internal` short-circuits inside the gateway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PaymentSimulator {
    #[default]
    External,
    Internal,
}

impl PaymentSimulator {
    pub(crate) fn header_value(self) -> &'static str {
        match self {
            PaymentSimulator::External => "EXTERNAL",
            PaymentSimulator::Internal => "INTERNAL",
        }
    }
}

/// Per-call overrides for settings the client otherwise applies globally.
///
/// Every service method accepts an `Option<&RequestOptions>`; pass `None`
/// to use the client's defaults.
#[derive(Builder, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Overrides the client's response timeout for this call.
    pub response_timeout: Option<Duration>,
    /// Overrides how many times a failed GET is retried for this call.
    pub max_automatic_retries: Option<u8>,
    /// Selects the simulator on the test gateway. Ignored against `Live`.
    pub simulator: Option<PaymentSimulator>,
}
