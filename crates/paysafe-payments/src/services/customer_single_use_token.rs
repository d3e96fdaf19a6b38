//! Single-use customer tokens for client-side checkout sessions.

use crate::client::PaysafeClient;
use crate::config::RequestOptions;
use crate::errors::Result;
use crate::models::customer::{SingleUseCustomerToken, SingleUseCustomerTokenRequest};

const CUSTOMERS_ENDPOINT: &str = "/v1/customers";
const SINGLE_USE_TOKEN_ENDPOINT: &str = "/v1/singleusecustomertokens";

#[derive(Debug, Clone, Copy)]
pub struct CustomerSingleUseTokenService<'a> {
    client: &'a PaysafeClient,
}

impl<'a> CustomerSingleUseTokenService<'a> {
    pub(crate) fn new(client: &'a PaysafeClient) -> Self {
        Self { client }
    }

    /// Issues a short-lived token exposing the customer's stored
    /// instruments to the client-side SDK.
    ///
    /// `POST /v1/customers/{customerId}/singleusecustomertokens`
    pub async fn create_single_use_customer_token(
        &self,
        customer_id: &str,
        request: &SingleUseCustomerTokenRequest,
        options: Option<&RequestOptions>,
    ) -> Result<SingleUseCustomerToken> {
        let path = format!("{CUSTOMERS_ENDPOINT}/{customer_id}/singleusecustomertokens");
        self.client.post_json(&path, request, options).await
    }

    /// `GET /v1/singleusecustomertokens/{singleUseCustomerTokenId}`
    pub async fn get_single_use_customer_token(
        &self,
        single_use_customer_token_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<SingleUseCustomerToken> {
        let path = format!("{SINGLE_USE_TOKEN_ENDPOINT}/{single_use_customer_token_id}");
        self.client.get_json(&path, &[], options).await
    }
}
