//! Payment handles: tokenize an instrument ahead of a transaction.

use crate::client::PaysafeClient;
use crate::config::RequestOptions;
use crate::errors::Result;
use crate::models::payment_handle::{PaymentHandle, PaymentHandleList, PaymentHandleRequest};

use super::MerchantRefNumQuery;

const PAYMENT_HANDLE_ENDPOINT: &str = "/v1/paymenthandles";

#[derive(Debug, Clone, Copy)]
pub struct PaymentHandleService<'a> {
    client: &'a PaysafeClient,
}

impl<'a> PaymentHandleService<'a> {
    pub(crate) fn new(client: &'a PaysafeClient) -> Self {
        Self { client }
    }

    /// Creates a payment handle for one payment method.
    ///
    /// For redirect methods the response carries the redirect link; poll
    /// or use the return webhook until the handle becomes `PAYABLE`.
    ///
    /// `POST /v1/paymenthandles`
    pub async fn create_payment_handle(
        &self,
        request: &PaymentHandleRequest,
        options: Option<&RequestOptions>,
    ) -> Result<PaymentHandle> {
        self.client
            .post_json(PAYMENT_HANDLE_ENDPOINT, request, options)
            .await
    }

    /// `GET /v1/paymenthandles/{paymentHandleId}`
    pub async fn get_payment_handle_by_id(
        &self,
        payment_handle_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<PaymentHandle> {
        let path = format!("{PAYMENT_HANDLE_ENDPOINT}/{payment_handle_id}");
        self.client.get_json(&path, &[], options).await
    }

    /// `GET /v1/paymenthandles?merchantRefNum=...`
    pub async fn get_payment_handle_using_merchant_reference_number(
        &self,
        query: &MerchantRefNumQuery,
        options: Option<&RequestOptions>,
    ) -> Result<PaymentHandleList> {
        self.client
            .get_json(PAYMENT_HANDLE_ENDPOINT, &query.query_pairs(), options)
            .await
    }
}
