//! Verifications: validate an instrument without moving money.

use crate::client::PaysafeClient;
use crate::config::RequestOptions;
use crate::errors::Result;
use crate::models::verification::{Verification, VerificationList, VerificationRequest};

use super::MerchantRefNumQuery;

const VERIFICATION_ENDPOINT: &str = "/v1/verifications";

#[derive(Debug, Clone, Copy)]
pub struct VerificationService<'a> {
    client: &'a PaysafeClient,
}

impl<'a> VerificationService<'a> {
    pub(crate) fn new(client: &'a PaysafeClient) -> Self {
        Self { client }
    }

    /// `POST /v1/verifications`
    pub async fn create_verification(
        &self,
        request: &VerificationRequest,
        options: Option<&RequestOptions>,
    ) -> Result<Verification> {
        self.client
            .post_json(VERIFICATION_ENDPOINT, request, options)
            .await
    }

    /// `GET /v1/verifications/{verificationId}`
    pub async fn get_verification_by_id(
        &self,
        verification_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Verification> {
        let path = format!("{VERIFICATION_ENDPOINT}/{verification_id}");
        self.client.get_json(&path, &[], options).await
    }

    /// `GET /v1/verifications?merchantRefNum=...`
    pub async fn get_verification_using_merchant_reference_number(
        &self,
        query: &MerchantRefNumQuery,
        options: Option<&RequestOptions>,
    ) -> Result<VerificationList> {
        self.client
            .get_json(VERIFICATION_ENDPOINT, &query.query_pairs(), options)
            .await
    }
}
