//! Client behavior that needs no gateway: configuration rejection and
//! how transport failures surface. A closed local port stands in for an
//! unreachable gateway.

use std::net::TcpListener;
use std::time::{Duration, Instant};

use paysafe_payments::client::PaysafeClient;
use paysafe_payments::config::{Environment, RequestOptions};
use paysafe_payments::errors::PaysafeSdkError;
use paysafe_payments::models::payment::PaymentRequest;

/// Binds an ephemeral port and immediately releases it, so connecting
/// to it is refused.
fn dead_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn local_client(max_automatic_retries: u8) -> PaysafeClient {
    let mut client = PaysafeClient::builder()
        .api_key("user:pass")
        .environment(Environment::Test)
        .connect_timeout(Duration::from_millis(500))
        .max_automatic_retries(max_automatic_retries)
        .build()
        .unwrap();
    client.override_base_url(format!("http://127.0.0.1:{}", dead_port()));
    client
}

#[tokio::test]
async fn test_unreachable_gateway_surfaces_connection_error() {
    let client = local_client(0);
    let err = client
        .monitor_service()
        .verify_that_service_is_accessible(None)
        .await
        .unwrap_err();
    assert!(matches!(err, PaysafeSdkError::Connection(_)));
}

#[tokio::test]
async fn test_get_retries_before_giving_up() {
    let _ = tracing_subscriber::fmt().try_init();

    let client = local_client(1);
    let started = Instant::now();
    let err = client
        .payment_service()
        .get_payment_by_id("pay-1", None)
        .await
        .unwrap_err();

    assert!(matches!(err, PaysafeSdkError::Connection(_)));
    // One retry means at least one backoff delay (>= 75ms) was honored.
    assert!(started.elapsed() >= Duration::from_millis(75));
}

#[tokio::test]
async fn test_post_surfaces_connection_error() {
    let client = local_client(2);
    let request = PaymentRequest::builder()
        .merchant_ref_num("ref-1")
        .amount(100)
        .build();
    let err = client
        .payment_service()
        .process_payment(&request, None)
        .await
        .unwrap_err();
    assert!(matches!(err, PaysafeSdkError::Connection(_)));
}

#[tokio::test]
async fn test_excessive_per_call_retries_rejected_before_sending() {
    let client = local_client(0);
    let options = RequestOptions::builder().max_automatic_retries(7).build();
    let err = client
        .payment_service()
        .get_payment_by_id("pay-1", Some(&options))
        .await
        .unwrap_err();
    assert!(matches!(err, PaysafeSdkError::InvalidConfiguration(_)));
}

#[tokio::test]
async fn test_zero_response_timeout_rejected_per_call() {
    let client = local_client(0);
    let options = RequestOptions::builder()
        .response_timeout(Duration::ZERO)
        .build();
    let err = client
        .monitor_service()
        .verify_that_service_is_accessible(Some(&options))
        .await
        .unwrap_err();
    assert!(matches!(err, PaysafeSdkError::InvalidConfiguration(_)));
}
