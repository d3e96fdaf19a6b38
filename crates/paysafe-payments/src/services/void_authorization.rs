//! Void authorizations: release an authorization before settlement.

use crate::client::PaysafeClient;
use crate::config::RequestOptions;
use crate::errors::Result;
use crate::models::void_authorization::{
    VoidAuthorization, VoidAuthorizationList, VoidAuthorizationRequest,
};

use super::MerchantRefNumQuery;

const VOID_AUTHORIZATION_ENDPOINT: &str = "/v1/payments";
const VOID_AUTHORIZATION_GET_ENDPOINT: &str = "/v1/voidauths";

#[derive(Debug, Clone, Copy)]
pub struct VoidAuthorizationService<'a> {
    client: &'a PaysafeClient,
}

impl<'a> VoidAuthorizationService<'a> {
    pub(crate) fn new(client: &'a PaysafeClient) -> Self {
        Self { client }
    }

    /// Voids an unsettled authorization, fully or partially.
    ///
    /// `POST /v1/payments/{paymentId}/voidauths`
    pub async fn void_authorization(
        &self,
        payment_id: &str,
        request: &VoidAuthorizationRequest,
        options: Option<&RequestOptions>,
    ) -> Result<VoidAuthorization> {
        let path = format!("{VOID_AUTHORIZATION_ENDPOINT}/{payment_id}/voidauths");
        self.client.post_json(&path, request, options).await
    }

    /// `GET /v1/voidauths/{voidAuthId}`
    pub async fn get_void_authorization_by_id(
        &self,
        void_auth_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<VoidAuthorization> {
        let path = format!("{VOID_AUTHORIZATION_GET_ENDPOINT}/{void_auth_id}");
        self.client.get_json(&path, &[], options).await
    }

    /// `GET /v1/voidauths?merchantRefNum=...`
    pub async fn get_void_authorization_using_merchant_reference_number(
        &self,
        query: &MerchantRefNumQuery,
        options: Option<&RequestOptions>,
    ) -> Result<VoidAuthorizationList> {
        self.client
            .get_json(VOID_AUTHORIZATION_GET_ENDPOINT, &query.query_pairs(), options)
            .await
    }
}
