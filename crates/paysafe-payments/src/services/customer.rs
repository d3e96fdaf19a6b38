//! Customer vault: create and manage stored customers.

use crate::client::PaysafeClient;
use crate::config::RequestOptions;
use crate::errors::Result;
use crate::models::customer::{Customer, CustomerRequest};

const CUSTOMERS_ENDPOINT: &str = "/v1/customers";

/// Builds the `fields` projection parameter, comma-joined. The server
/// returns the whole resource when the projection is absent.
fn fields_query(fields: &[&str]) -> Vec<(&'static str, String)> {
    if fields.is_empty() {
        Vec::new()
    } else {
        vec![("fields", fields.join(","))]
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CustomerService<'a> {
    client: &'a PaysafeClient,
}

impl<'a> CustomerService<'a> {
    pub(crate) fn new(client: &'a PaysafeClient) -> Self {
        Self { client }
    }

    /// `POST /v1/customers`
    pub async fn create_customer(
        &self,
        request: &CustomerRequest,
        options: Option<&RequestOptions>,
    ) -> Result<Customer> {
        self.client.post_json(CUSTOMERS_ENDPOINT, request, options).await
    }

    /// Fetches a customer, optionally projecting a subset of fields
    /// (for example `&["addresses", "paymenthandles"]`).
    ///
    /// `GET /v1/customers/{customerId}`
    pub async fn get_customer_by_id(
        &self,
        customer_id: &str,
        fields: &[&str],
        options: Option<&RequestOptions>,
    ) -> Result<Customer> {
        let path = format!("{CUSTOMERS_ENDPOINT}/{customer_id}");
        self.client
            .get_json(&path, &fields_query(fields), options)
            .await
    }

    /// Fetches a customer by the merchant's own identifier.
    ///
    /// `GET /v1/customers?merchantCustomerId=...`
    pub async fn get_customer_by_merchant_customer_id(
        &self,
        merchant_customer_id: &str,
        fields: &[&str],
        options: Option<&RequestOptions>,
    ) -> Result<Customer> {
        let mut query = vec![("merchantCustomerId", merchant_customer_id.to_string())];
        query.extend(fields_query(fields));
        self.client.get_json(CUSTOMERS_ENDPOINT, &query, options).await
    }

    /// Replaces the customer's mutable attributes.
    ///
    /// `PUT /v1/customers/{customerId}`
    pub async fn update_customer(
        &self,
        customer_id: &str,
        request: &CustomerRequest,
        options: Option<&RequestOptions>,
    ) -> Result<Customer> {
        let path = format!("{CUSTOMERS_ENDPOINT}/{customer_id}");
        self.client.put_json(&path, request, options).await
    }

    /// Deletes the customer and every stored address and handle.
    ///
    /// `DELETE /v1/customers/{customerId}`
    pub async fn delete_customer(
        &self,
        customer_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<()> {
        let path = format!("{CUSTOMERS_ENDPOINT}/{customer_id}");
        self.client.delete(&path, options).await
    }
}
