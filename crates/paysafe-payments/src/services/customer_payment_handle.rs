//! Multi-use payment handles stored against a vault customer.

use crate::client::PaysafeClient;
use crate::config::RequestOptions;
use crate::errors::Result;
use crate::models::customer::{CustomerPaymentHandle, CustomerPaymentHandleRequest};

const CUSTOMERS_ENDPOINT: &str = "/v1/customers";

#[derive(Debug, Clone, Copy)]
pub struct CustomerPaymentHandleService<'a> {
    client: &'a PaysafeClient,
}

impl<'a> CustomerPaymentHandleService<'a> {
    pub(crate) fn new(client: &'a PaysafeClient) -> Self {
        Self { client }
    }

    /// Stores an instrument in the vault as a multi-use handle.
    ///
    /// `POST /v1/customers/{customerId}/paymenthandles`
    pub async fn create_payment_handle_for_customer(
        &self,
        customer_id: &str,
        request: &CustomerPaymentHandleRequest,
        options: Option<&RequestOptions>,
    ) -> Result<CustomerPaymentHandle> {
        let path = format!("{CUSTOMERS_ENDPOINT}/{customer_id}/paymenthandles");
        self.client.post_json(&path, request, options).await
    }

    /// `GET /v1/customers/{customerId}/paymenthandles/{paymentHandleId}`
    pub async fn get_customer_payment_handle_by_payment_handle_id(
        &self,
        customer_id: &str,
        payment_handle_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<CustomerPaymentHandle> {
        let path =
            format!("{CUSTOMERS_ENDPOINT}/{customer_id}/paymenthandles/{payment_handle_id}");
        self.client.get_json(&path, &[], options).await
    }

    /// `PUT /v1/customers/{customerId}/paymenthandles/{paymentHandleId}`
    pub async fn update_customer_payment_handle(
        &self,
        customer_id: &str,
        payment_handle_id: &str,
        request: &CustomerPaymentHandleRequest,
        options: Option<&RequestOptions>,
    ) -> Result<CustomerPaymentHandle> {
        let path =
            format!("{CUSTOMERS_ENDPOINT}/{customer_id}/paymenthandles/{payment_handle_id}");
        self.client.put_json(&path, request, options).await
    }

    /// `DELETE /v1/customers/{customerId}/paymenthandles/{paymentHandleId}`
    pub async fn delete_customer_payment_handle(
        &self,
        customer_id: &str,
        payment_handle_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<()> {
        let path =
            format!("{CUSTOMERS_ENDPOINT}/{customer_id}/paymenthandles/{payment_handle_id}");
        self.client.delete(&path, options).await
    }
}
