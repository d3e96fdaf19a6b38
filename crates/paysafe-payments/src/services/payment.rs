//! Payments: capture funds against a single-use payment handle.

use crate::client::PaysafeClient;
use crate::config::RequestOptions;
use crate::errors::Result;
use crate::models::common::{CancelRequest, CancelResponse};
use crate::models::payment::{Payment, PaymentList, PaymentRequest};

use super::MerchantRefNumQuery;

const PAYMENT_ENDPOINT: &str = "/v1/payments";

#[derive(Debug, Clone, Copy)]
pub struct PaymentService<'a> {
    client: &'a PaysafeClient,
}

impl<'a> PaymentService<'a> {
    pub(crate) fn new(client: &'a PaysafeClient) -> Self {
        Self { client }
    }

    /// Processes a payment using a payment handle token.
    ///
    /// `POST /v1/payments`
    pub async fn process_payment(
        &self,
        request: &PaymentRequest,
        options: Option<&RequestOptions>,
    ) -> Result<Payment> {
        self.client.post_json(PAYMENT_ENDPOINT, request, options).await
    }

    /// `GET /v1/payments/{paymentId}`
    pub async fn get_payment_by_id(
        &self,
        payment_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Payment> {
        let path = format!("{PAYMENT_ENDPOINT}/{payment_id}");
        self.client.get_json(&path, &[], options).await
    }

    /// `GET /v1/payments?merchantRefNum=...`
    pub async fn get_payments_using_merchant_reference_number(
        &self,
        query: &MerchantRefNumQuery,
        options: Option<&RequestOptions>,
    ) -> Result<PaymentList> {
        self.client
            .get_json(PAYMENT_ENDPOINT, &query.query_pairs(), options)
            .await
    }

    /// Cancels a payment still in a cancellable state.
    ///
    /// `PUT /v1/payments/{paymentId}`
    pub async fn cancel_payment(
        &self,
        payment_id: &str,
        request: &CancelRequest,
        options: Option<&RequestOptions>,
    ) -> Result<CancelResponse> {
        let path = format!("{PAYMENT_ENDPOINT}/{payment_id}");
        self.client.put_json(&path, request, options).await
    }
}
