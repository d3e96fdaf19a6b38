//! Payload flows through the public API: the documented checkout and
//! vaulting sequences, chained across request and response models the
//! way a merchant integration would chain them.

use serde_json::json;

use paysafe_core::errors::Error as PayloadError;
use paysafe_payments::models::ExtraFieldsExt;
use paysafe_payments::models::card::{Card, CardExpiry};
use paysafe_payments::models::common::TransactionRequestStatus;
use paysafe_payments::models::customer::{
    Customer, CustomerPaymentHandle, CustomerPaymentHandleRequest, CustomerStatus,
    SingleUseCustomerToken, SingleUseCustomerTokenRequest, SingleUseTokenPaymentType,
};
use paysafe_payments::models::lpm::Skrill;
use paysafe_payments::models::payment::{
    Payment, PaymentList, PaymentRequest, PaymentRequestStatus,
};
use paysafe_payments::models::payment_handle::{
    PaymentHandle, PaymentHandleRequest, PaymentHandleStatus, PaymentHandleUsage, PaymentType,
    TransactionType,
};
use paysafe_payments::models::payment_method::PaymentMethod;
use paysafe_payments::models::refund::{Refund, RefundRequest};
use paysafe_payments::models::settlement::{Settlement, SettlementRequest};

fn sample_card() -> Card {
    Card::builder()
        .card_num("4111111111111111")
        .card_expiry(CardExpiry::builder().month(12).year(2027).build())
        .cvv("111")
        .build()
}

/// Single-step checkout: card handle, payment with `settleWithAuth`,
/// then a partial refund against the settlement the payment created.
#[test]
fn test_card_checkout_flow_payloads() {
    let handle_request = PaymentHandleRequest::builder()
        .merchant_ref_num("order-77-handle")
        .transaction_type(TransactionType::Payment)
        .payment_type(PaymentType::Card)
        .amount(1099)
        .currency_code("USD")
        .payment_method(PaymentMethod::Card(sample_card()))
        .build();

    let wire = serde_json::to_value(&handle_request).unwrap();
    assert_eq!(wire["transactionType"], json!("PAYMENT"));
    assert_eq!(wire["card"]["cardNum"], json!("4111111111111111"));

    let handle: PaymentHandle = serde_json::from_value(json!({
        "id": "ph-1",
        "merchantRefNum": "order-77-handle",
        "paymentHandleToken": "tok-abc",
        "status": "PAYABLE",
        "usage": "SINGLE_USE",
        "card": { "lastDigits": "1111", "cardType": "VI" }
    }))
    .unwrap();
    assert_eq!(handle.status, Some(PaymentHandleStatus::Payable));
    let token = handle.payment_handle_token.unwrap();

    let payment_request = PaymentRequest::builder()
        .merchant_ref_num("ref-001")
        .amount(1099)
        .currency_code("USD")
        .payment_handle_token(token)
        .settle_with_auth(true)
        .build();
    assert_eq!(
        serde_json::to_value(&payment_request).unwrap(),
        json!({
            "merchantRefNum": "ref-001",
            "amount": 1099,
            "currencyCode": "USD",
            "paymentHandleToken": "tok-abc",
            "settleWithAuth": true
        })
    );

    let payment: Payment = serde_json::from_value(json!({
        "id": "pay-1",
        "merchantRefNum": "ref-001",
        "status": "COMPLETED",
        "amount": 1099,
        "availableToRefund": 1099,
        "settlements": [ { "id": "stl-1", "amount": 1099, "status": "PENDING" } ]
    }))
    .unwrap();
    assert_eq!(payment.status, Some(PaymentRequestStatus::Completed));

    // Settlement id is the path parameter of the refund endpoint.
    let settlements = payment.settlements.unwrap();
    assert_eq!(settlements[0].id.as_deref(), Some("stl-1"));

    let refund_request = RefundRequest::builder()
        .merchant_ref_num("ref-001-refund")
        .amount(300)
        .build();
    assert_eq!(
        serde_json::to_value(&refund_request).unwrap(),
        json!({
            "merchantRefNum": "ref-001-refund",
            "amount": 300,
            "dupCheck": true
        })
    );

    let refund: Refund = serde_json::from_value(json!({
        "id": "rfd-1",
        "merchantRefNum": "ref-001-refund",
        "amount": 300,
        "status": "PENDING"
    }))
    .unwrap();
    assert_eq!(refund.status, Some(TransactionRequestStatus::Pending));
}

/// Two-step flow: authorize with `preAuth`, capture later with an
/// explicit settlement request.
#[test]
fn test_pre_auth_then_capture_flow_payloads() {
    let payment_request = PaymentRequest::builder()
        .merchant_ref_num("ref-002")
        .amount(2500)
        .currency_code("CAD")
        .payment_handle_token("tok-def")
        .pre_auth(true)
        .build();
    assert_eq!(
        serde_json::to_value(&payment_request).unwrap(),
        json!({
            "merchantRefNum": "ref-002",
            "amount": 2500,
            "currencyCode": "CAD",
            "paymentHandleToken": "tok-def",
            "preAuth": true
        })
    );

    let payment: Payment = serde_json::from_value(json!({
        "id": "pay-2",
        "status": "COMPLETED",
        "amount": 2500,
        "availableToSettle": 2500
    }))
    .unwrap();
    assert_eq!(payment.available_to_settle, Some(2500));

    let settlement_request = SettlementRequest::builder()
        .merchant_ref_num("ref-002-capture")
        .amount(2500)
        .build();
    assert_eq!(
        serde_json::to_value(&settlement_request).unwrap(),
        json!({
            "merchantRefNum": "ref-002-capture",
            "amount": 2500,
            "dupCheck": true
        })
    );

    let settlement: Settlement = serde_json::from_value(json!({
        "id": "stl-2",
        "merchantRefNum": "ref-002-capture",
        "amount": 2500,
        "status": "PENDING",
        "availableToRefund": 2500
    }))
    .unwrap();
    assert_eq!(settlement.status, Some(TransactionRequestStatus::Pending));
}

/// Vaulting: create a customer, store a multi-use card handle against
/// it, then mint a single-use token for a checkout session.
#[test]
fn test_customer_vault_flow_payloads() {
    let customer: Customer = serde_json::from_value(json!({
        "id": "cust-1",
        "merchantCustomerId": "mc-42",
        "status": "INITIAL"
    }))
    .unwrap();
    assert_eq!(customer.status, CustomerStatus::Initial);
    assert_eq!(customer.id.as_deref(), Some("cust-1"));

    let handle_request = CustomerPaymentHandleRequest::builder()
        .merchant_ref_num("vault-001")
        .payment_type(PaymentType::Card)
        .payment_method(PaymentMethod::Card(sample_card()))
        .build();
    let wire = serde_json::to_value(&handle_request).unwrap();
    assert_eq!(wire["paymentType"], json!("CARD"));
    assert_eq!(wire["card"]["cardNum"], json!("4111111111111111"));

    let stored: CustomerPaymentHandle = serde_json::from_value(json!({
        "id": "cph-1",
        "customerId": "cust-1",
        "status": "PAYABLE",
        "usage": "MULTI_USE",
        "paymentHandleToken": "tok-multi",
        "card": { "lastDigits": "1111" }
    }))
    .unwrap();
    assert_eq!(stored.usage, Some(PaymentHandleUsage::MultiUse));

    let token_request = SingleUseCustomerTokenRequest::builder()
        .merchant_ref_num("checkout-5")
        .payment_type(vec![SingleUseTokenPaymentType::Card])
        .build();
    assert_eq!(
        serde_json::to_value(&token_request).unwrap(),
        json!({ "merchantRefNum": "checkout-5", "paymentType": ["CARD"] })
    );

    let token: SingleUseCustomerToken = serde_json::from_value(json!({
        "id": "sut-1",
        "customerId": "cust-1",
        "status": "ACTIVE",
        "singleUseCustomerToken": "SCDWVmfC1F2AcJ7",
        "timeToLiveSeconds": 899,
        "paymentHandles": [
            { "id": "cph-1", "paymentType": "CARD", "card": { "lastDigits": "1111" } }
        ]
    }))
    .unwrap();
    assert_eq!(
        token.single_use_customer_token.as_deref(),
        Some("SCDWVmfC1F2AcJ7")
    );
    let handles = token.payment_handles.unwrap();
    assert_eq!(handles[0].payment_method.kind(), Some("card"));
}

/// Second page of a 25-record lookup: a full page of 10 entities plus
/// meta, decoded and re-emitted without slicing or reordering.
#[test]
fn test_merchant_ref_lookup_envelope_is_passive() {
    let page: Vec<serde_json::Value> = (10..20)
        .map(|n| {
            json!({
                "id": format!("pay-{n}"),
                "merchantRefNum": "ref-001",
                "status": "COMPLETED"
            })
        })
        .collect();
    let wire = json!({
        "payments": page,
        "meta": { "numberOfRecords": 25, "limit": 10, "page": 2 }
    });

    let list: PaymentList = serde_json::from_value(wire.clone()).unwrap();
    let meta = list.meta.as_ref().unwrap();
    assert_eq!(meta.number_of_records, Some(25));
    assert_eq!(meta.limit, Some(10));
    assert_eq!(meta.page, Some(2));

    let payments = list.payments.as_ref().unwrap();
    assert_eq!(payments.len(), 10);
    assert_eq!(payments[0].id.as_deref(), Some("pay-10"));
    assert_eq!(payments[9].id.as_deref(), Some("pay-19"));
    assert_eq!(payments[0].status, Some(PaymentRequestStatus::Completed));

    assert_eq!(serde_json::to_value(&list).unwrap(), wire);
}

#[test]
fn test_slot_conflict_surfaces_through_host_payload() {
    let mut request = PaymentHandleRequest::builder()
        .merchant_ref_num("handle-010")
        .payment_method(PaymentMethod::Card(sample_card()))
        .build();

    let skrill = PaymentMethod::Skrill(Skrill::builder().consumer_id("pat@example.com").build());
    let err = request.payment_method.attach(skrill).unwrap_err();
    match err {
        PayloadError::ConflictingVariant { existing, rejected } => {
            assert_eq!(existing, "card");
            assert_eq!(rejected, "skrill");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let wire = serde_json::to_value(&request).unwrap();
    assert!(wire.get("card").is_some());
    assert!(wire.get("skrill").is_none());
}

/// The escape hatch probes the full wire form, so the flattened payment
/// method key is off limits just like a declared attribute.
#[test]
fn test_escape_hatch_respects_flattened_slot_keys() {
    let request = PaymentHandleRequest::builder()
        .merchant_ref_num("handle-011")
        .payment_method(PaymentMethod::Card(sample_card()))
        .build()
        .with_extra_field("fundingTransaction", json!({ "type": "SDW_WALLET_TRANSFER" }))
        .unwrap();

    let wire = serde_json::to_value(&request).unwrap();
    assert_eq!(
        wire["fundingTransaction"],
        json!({ "type": "SDW_WALLET_TRANSFER" })
    );
    assert!(wire.get("card").is_some());

    let err = request
        .with_extra_field("card", json!({ "cardNum": "4000000000000002" }))
        .unwrap_err();
    assert!(matches!(err, PayloadError::DuplicateField { field } if field == "card"));
}
