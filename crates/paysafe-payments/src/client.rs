//! HTTP client for the PaymentsAPI gateway.
//!
//! [`PaysafeClient`] owns the connection pool, the standing request
//! headers, and the retry policy. Service accessors hang off it in
//! [`crate::services`]; this module only knows how to move JSON over
//! the wire and turn responses into [`Result`]s.

use std::time::Duration;

use base64::{Engine, prelude::BASE64_STANDARD};
use http::Method;
use http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use rand::Rng;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::{Environment, RequestOptions};
use crate::errors::{CORRELATION_ID_HEADER, PaysafeSdkError, Result};

/// Every endpoint lives under this prefix on the gateway host.
const PATH_PREFIX: &str = "/paymenthub";

const CONTENT_TYPE_JSON: &str = "application/json;charset=utf-8";
const TRANSACTION_SOURCE_HEADER: HeaderName = HeaderName::from_static("x-transaction-source");
const TRANSACTION_SOURCE: &str = "RustSDK";
const SIMULATOR_HEADER: HeaderName = HeaderName::from_static("simulator");

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_RESPONSE_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_MAX_AUTOMATIC_RETRIES: u8 = 2;
const MAX_ALLOWED_AUTOMATIC_RETRIES: u8 = 5;

const RETRY_BASE_DELAY_MS: u64 = 100;

/// Client for the Paysafe Payments REST API.
///
/// Cheap to clone; all clones share the connection pool. Build one per
/// API key via [`PaysafeClient::new`] or [`PaysafeClient::builder`].
#[derive(Debug, Clone)]
pub struct PaysafeClient {
    http: reqwest::Client,
    base_url: String,
    environment: Environment,
    max_automatic_retries: u8,
}

impl PaysafeClient {
    /// Builds a client with default timeouts and retry policy.
    ///
    /// The API key is the `username:password` pair from the merchant
    /// portal, passed unencoded.
    pub fn new(api_key: impl Into<String>, environment: Environment) -> Result<Self> {
        Self::builder().api_key(api_key).environment(environment).build()
    }

    pub fn builder() -> PaysafeClientBuilder {
        PaysafeClientBuilder::default()
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Points the client at a different host, keeping the path layout.
    ///
    /// Intended for mock gateways in tests.
    pub fn override_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// Joins base URL, gateway prefix, endpoint path, and query pairs.
    pub(crate) fn request_url(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}{}", self.base_url, PATH_PREFIX, endpoint))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
        options: Option<&RequestOptions>,
    ) -> Result<T> {
        let url = self.request_url(endpoint, query)?;
        let max_retries = self.effective_max_retries(options)?;

        let mut attempt: u8 = 0;
        let response = loop {
            let request = self.apply_options(self.http.get(url.clone()), options, false)?;
            #[cfg(feature = "tracing")]
            tracing::debug!("GET {}", url);

            match request.send().await {
                Ok(response) => break response,
                Err(error) if attempt < max_retries && is_retryable(&error) => {
                    attempt += 1;
                    let delay = retry_delay(attempt);
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        "GET {} failed ({}), retry {} of {} after {:?}",
                        url,
                        error,
                        attempt,
                        max_retries,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(error) => return Err(error.into()),
            }
        };

        decode_json(response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
        options: Option<&RequestOptions>,
    ) -> Result<T> {
        let response = self.send_body(Method::POST, endpoint, body, options).await?;
        decode_json(response).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
        options: Option<&RequestOptions>,
    ) -> Result<T> {
        let response = self.send_body(Method::PUT, endpoint, body, options).await?;
        decode_json(response).await
    }

    pub(crate) async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
        options: Option<&RequestOptions>,
    ) -> Result<T> {
        let response = self.send_body(Method::PATCH, endpoint, body, options).await?;
        decode_json(response).await
    }

    /// DELETE with no response body expected on success.
    pub(crate) async fn delete(
        &self,
        endpoint: &str,
        options: Option<&RequestOptions>,
    ) -> Result<()> {
        let url = self.request_url(endpoint, &[])?;
        self.effective_max_retries(options)?;
        #[cfg(feature = "tracing")]
        tracing::debug!("DELETE {}", url);

        let request = self.apply_options(self.http.delete(url), options, true)?;
        let response = request.send().await?;
        let status = response.status().as_u16();
        if success(status) {
            return Ok(());
        }
        let correlation_id = correlation_id(response.headers());
        let body = response.bytes().await?;
        Err(PaysafeSdkError::from_response(status, correlation_id, &body))
    }

    async fn send_body<B: Serialize>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
        options: Option<&RequestOptions>,
    ) -> Result<reqwest::Response> {
        let url = self.request_url(endpoint, &[])?;
        self.effective_max_retries(options)?;
        let body = serde_json::to_vec(body)?;
        #[cfg(feature = "tracing")]
        tracing::debug!("{} {}", method, url);

        let request = self
            .apply_options(self.http.request(method, url), options, true)?
            .body(body);
        Ok(request.send().await?)
    }

    /// Applies per-call overrides. The simulator header is honored only
    /// on mutating verbs against the test gateway, matching what the
    /// gateway itself accepts.
    fn apply_options(
        &self,
        mut request: reqwest::RequestBuilder,
        options: Option<&RequestOptions>,
        simulator_allowed: bool,
    ) -> Result<reqwest::RequestBuilder> {
        let Some(options) = options else {
            return Ok(request);
        };

        if let Some(timeout) = options.response_timeout {
            if timeout.is_zero() {
                return Err(PaysafeSdkError::InvalidConfiguration(
                    "Response timeout must be a positive value".to_string(),
                ));
            }
            request = request.timeout(timeout);
        }

        if simulator_allowed && self.environment == Environment::Test {
            if let Some(simulator) = options.simulator {
                request = request.header(SIMULATOR_HEADER, simulator.header_value());
            }
        }

        Ok(request)
    }

    fn effective_max_retries(&self, options: Option<&RequestOptions>) -> Result<u8> {
        match options.and_then(|options| options.max_automatic_retries) {
            Some(retries) if retries > MAX_ALLOWED_AUTOMATIC_RETRIES => {
                Err(PaysafeSdkError::InvalidConfiguration(
                    "Maximum allowed number of automatic retries is 5".to_string(),
                ))
            }
            Some(retries) => Ok(retries),
            None => Ok(self.max_automatic_retries),
        }
    }
}

/// `Basic` authorization header value for a raw `username:password` key.
pub fn basic_authentication_header(api_key: &str) -> String {
    format!("Basic {}", BASE64_STANDARD.encode(api_key.as_bytes()))
}

fn success(status: u16) -> bool {
    status == 200 || status == 201
}

fn correlation_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(CORRELATION_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

async fn decode_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status().as_u16();
    let correlation_id = correlation_id(response.headers());
    let body = response.bytes().await?;
    if success(status) {
        Ok(serde_json::from_slice(&body)?)
    } else {
        Err(PaysafeSdkError::from_response(status, correlation_id, &body))
    }
}

fn is_retryable(error: &reqwest::Error) -> bool {
    error.is_connect() || error.is_timeout()
}

/// Exponential backoff with jitter: 100ms tripled per prior failure,
/// scaled by a random factor in `[0.75, 1.00)`.
fn retry_delay(attempt: u8) -> Duration {
    let mut delay_ms = RETRY_BASE_DELAY_MS;
    for _ in 1..attempt {
        delay_ms *= 3;
    }
    let jitter: f64 = rand::rng().random_range(0.75..1.00);
    Duration::from_millis(delay_ms).mul_f64(jitter)
}

fn validate_api_key(api_key: &str) -> Result<()> {
    if api_key.trim().is_empty() {
        return Err(PaysafeSdkError::InvalidConfiguration(
            "You must provide non-blank api key in format 'username:password'".to_string(),
        ));
    }
    let well_formed = match api_key.split_once(':') {
        Some((username, password)) => {
            !username.is_empty()
                && !password.is_empty()
                && !api_key.chars().any(char::is_whitespace)
                && !password.contains(':')
        }
        None => false,
    };
    if !well_formed {
        return Err(PaysafeSdkError::InvalidConfiguration(
            "Api key does not match format 'username:password'".to_string(),
        ));
    }
    Ok(())
}

/// Fallible builder for [`PaysafeClient`].
///
/// `build` validates the API key shape and the retry bound before any
/// request is made, so a misconfigured client fails fast.
#[derive(Debug, Default)]
pub struct PaysafeClientBuilder {
    api_key: Option<String>,
    environment: Option<Environment>,
    connect_timeout: Option<Duration>,
    response_timeout: Option<Duration>,
    max_automatic_retries: Option<u8>,
}

impl PaysafeClientBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// TCP connect timeout, 30 seconds unless set.
    pub fn connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = Some(connect_timeout);
        self
    }

    /// Whole-request timeout, 60 seconds unless set.
    pub fn response_timeout(mut self, response_timeout: Duration) -> Self {
        self.response_timeout = Some(response_timeout);
        self
    }

    /// How many times a failed GET is retried, 0 to 5. Defaults to 2.
    pub fn max_automatic_retries(mut self, max_automatic_retries: u8) -> Self {
        self.max_automatic_retries = Some(max_automatic_retries);
        self
    }

    pub fn build(self) -> Result<PaysafeClient> {
        let api_key = self.api_key.unwrap_or_default();
        validate_api_key(&api_key)?;

        let max_automatic_retries = self
            .max_automatic_retries
            .unwrap_or(DEFAULT_MAX_AUTOMATIC_RETRIES);
        if max_automatic_retries > MAX_ALLOWED_AUTOMATIC_RETRIES {
            return Err(PaysafeSdkError::InvalidConfiguration(
                "Maximum allowed number of automatic retries is 5".to_string(),
            ));
        }

        let connect_timeout = self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT);
        let response_timeout = self.response_timeout.unwrap_or(DEFAULT_RESPONSE_TIMEOUT);
        if connect_timeout.is_zero() {
            return Err(PaysafeSdkError::InvalidConfiguration(
                "Connect timeout must be a positive value".to_string(),
            ));
        }
        if response_timeout.is_zero() {
            return Err(PaysafeSdkError::InvalidConfiguration(
                "Response timeout must be a positive value".to_string(),
            ));
        }

        let environment = self.environment.unwrap_or_default();
        let http = reqwest::Client::builder()
            .default_headers(standing_headers(&api_key)?)
            .connect_timeout(connect_timeout)
            .timeout(response_timeout)
            .build()?;

        Ok(PaysafeClient {
            http,
            base_url: environment.base_url().to_string(),
            environment,
            max_automatic_retries,
        })
    }
}

fn standing_headers(api_key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    let mut authorization = HeaderValue::from_str(&basic_authentication_header(api_key))
        .map_err(|error| PaysafeSdkError::InvalidConfiguration(error.to_string()))?;
    authorization.set_sensitive(true);
    headers.insert(AUTHORIZATION, authorization);

    headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
    headers.insert(
        TRANSACTION_SOURCE_HEADER,
        HeaderValue::from_static(TRANSACTION_SOURCE),
    );

    let user_agent = format!(
        "PaymentsAPI RUSTSDK/{} ({}; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH,
    );
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(&user_agent)
            .map_err(|error| PaysafeSdkError::InvalidConfiguration(error.to_string()))?,
    );

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> PaysafeClient {
        PaysafeClient::new("clientId:clientKey", Environment::Test).unwrap()
    }

    #[test]
    fn test_basic_authentication_header_vector() {
        assert_eq!(
            basic_authentication_header("clientId:clientKey"),
            "Basic Y2xpZW50SWQ6Y2xpZW50S2V5"
        );
    }

    #[test]
    fn test_api_key_validation() {
        assert!(validate_api_key("user:pass").is_ok());

        for bad in ["", "   ", "nopcolon", "user:", ":pass", "user:pa:ss", "us er:pass", "user: pass"] {
            assert!(validate_api_key(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_builder_rejects_excessive_retries() {
        let result = PaysafeClient::builder()
            .api_key("user:pass")
            .max_automatic_retries(6)
            .build();
        assert!(matches!(
            result,
            Err(PaysafeSdkError::InvalidConfiguration(_))
        ));

        assert!(
            PaysafeClient::builder()
                .api_key("user:pass")
                .max_automatic_retries(5)
                .build()
                .is_ok()
        );
    }

    #[test]
    fn test_builder_requires_api_key() {
        assert!(matches!(
            PaysafeClient::builder().build(),
            Err(PaysafeSdkError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_request_url_joins_prefix_and_query() {
        let client = test_client();
        let url = client
            .request_url(
                "/v1/payments",
                &[("merchantRefNum", "ref-1".to_string()), ("limit", "10".to_string())],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.test.paysafe.com/paymenthub/v1/payments?merchantRefNum=ref-1&limit=10"
        );
    }

    #[test]
    fn test_override_base_url() {
        let mut client = test_client();
        client.override_base_url("http://127.0.0.1:9099");
        let url = client.request_url("/v1/monitor", &[]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9099/paymenthub/v1/monitor");
    }

    #[test]
    fn test_correlation_id_extracted_from_headers() {
        let mut headers = HeaderMap::new();
        assert_eq!(correlation_id(&headers), None);

        headers.insert(
            HeaderName::from_static("x-internal-correlation-id"),
            HeaderValue::from_static("8c2b1f33-9f1e-4b0a-bf0e-5a1d3c2e4f6a"),
        );
        assert_eq!(
            correlation_id(&headers).as_deref(),
            Some("8c2b1f33-9f1e-4b0a-bf0e-5a1d3c2e4f6a")
        );
    }

    #[test]
    fn test_retry_delay_bounds() {
        for (attempt, low, high) in [(1u8, 75u64, 100u64), (2, 225, 300), (3, 675, 900)] {
            for _ in 0..32 {
                let delay = retry_delay(attempt);
                assert!(
                    delay >= Duration::from_millis(low) && delay <= Duration::from_millis(high),
                    "attempt {attempt} produced {delay:?}"
                );
            }
        }
    }

    #[test]
    fn test_per_call_retry_override_validated() {
        let client = test_client();
        let options = RequestOptions::builder().max_automatic_retries(7).build();
        assert!(client.effective_max_retries(Some(&options)).is_err());

        let options = RequestOptions::builder().max_automatic_retries(0).build();
        assert_eq!(client.effective_max_retries(Some(&options)).unwrap(), 0);
        assert_eq!(client.effective_max_retries(None).unwrap(), 2);
    }
}
