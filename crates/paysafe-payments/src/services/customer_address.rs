//! Addresses stored against a vault customer.

use crate::client::PaysafeClient;
use crate::config::RequestOptions;
use crate::errors::Result;
use crate::models::customer::Address;

const CUSTOMERS_ENDPOINT: &str = "/v1/customers";

#[derive(Debug, Clone, Copy)]
pub struct CustomerAddressService<'a> {
    client: &'a PaysafeClient,
}

impl<'a> CustomerAddressService<'a> {
    pub(crate) fn new(client: &'a PaysafeClient) -> Self {
        Self { client }
    }

    /// `POST /v1/customers/{customerId}/addresses`
    pub async fn create_address(
        &self,
        customer_id: &str,
        address: &Address,
        options: Option<&RequestOptions>,
    ) -> Result<Address> {
        let path = format!("{CUSTOMERS_ENDPOINT}/{customer_id}/addresses");
        self.client.post_json(&path, address, options).await
    }

    /// `GET /v1/customers/{customerId}/addresses/{addressId}`
    pub async fn get_address_by_id(
        &self,
        customer_id: &str,
        address_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Address> {
        let path = format!("{CUSTOMERS_ENDPOINT}/{customer_id}/addresses/{address_id}");
        self.client.get_json(&path, &[], options).await
    }

    /// `PUT /v1/customers/{customerId}/addresses/{addressId}`
    pub async fn update_address(
        &self,
        customer_id: &str,
        address_id: &str,
        address: &Address,
        options: Option<&RequestOptions>,
    ) -> Result<Address> {
        let path = format!("{CUSTOMERS_ENDPOINT}/{customer_id}/addresses/{address_id}");
        self.client.put_json(&path, address, options).await
    }

    /// `DELETE /v1/customers/{customerId}/addresses/{addressId}`
    pub async fn delete_address(
        &self,
        customer_id: &str,
        address_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<()> {
        let path = format!("{CUSTOMERS_ENDPOINT}/{customer_id}/addresses/{address_id}");
        self.client.delete(&path, options).await
    }
}
