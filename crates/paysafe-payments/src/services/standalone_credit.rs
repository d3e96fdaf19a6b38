//! Standalone credits: push funds to a customer without a prior payment.

use crate::client::PaysafeClient;
use crate::config::RequestOptions;
use crate::errors::Result;
use crate::models::common::{CancelRequest, CancelResponse};
use crate::models::standalone_credit::{
    StandaloneCredit, StandaloneCreditList, StandaloneCreditRequest, StandaloneCreditUpdateRequest,
};

use super::MerchantRefNumQuery;

const STANDALONE_CREDIT_ENDPOINT: &str = "/v1/standalonecredits";

#[derive(Debug, Clone, Copy)]
pub struct StandaloneCreditService<'a> {
    client: &'a PaysafeClient,
}

impl<'a> StandaloneCreditService<'a> {
    pub(crate) fn new(client: &'a PaysafeClient) -> Self {
        Self { client }
    }

    /// `POST /v1/standalonecredits`
    pub async fn process_standalone_credit(
        &self,
        request: &StandaloneCreditRequest,
        options: Option<&RequestOptions>,
    ) -> Result<StandaloneCredit> {
        self.client
            .post_json(STANDALONE_CREDIT_ENDPOINT, request, options)
            .await
    }

    /// `GET /v1/standalonecredits/{standaloneCreditId}`
    pub async fn get_standalone_credit_by_id(
        &self,
        standalone_credit_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<StandaloneCredit> {
        let path = format!("{STANDALONE_CREDIT_ENDPOINT}/{standalone_credit_id}");
        self.client.get_json(&path, &[], options).await
    }

    /// `GET /v1/standalonecredits?merchantRefNum=...`
    pub async fn get_standalone_credits_using_merchant_reference_number(
        &self,
        query: &MerchantRefNumQuery,
        options: Option<&RequestOptions>,
    ) -> Result<StandaloneCreditList> {
        self.client
            .get_json(STANDALONE_CREDIT_ENDPOINT, &query.query_pairs(), options)
            .await
    }

    /// Cancels a standalone credit still in a cancellable state.
    ///
    /// `PUT /v1/standalonecredits/{standaloneCreditId}`
    pub async fn cancel_standalone_credit(
        &self,
        standalone_credit_id: &str,
        request: &CancelRequest,
        options: Option<&RequestOptions>,
    ) -> Result<CancelResponse> {
        let path = format!("{STANDALONE_CREDIT_ENDPOINT}/{standalone_credit_id}");
        self.client.put_json(&path, request, options).await
    }

    /// Updates an Interac e-Transfer credit flagged for fraud review.
    ///
    /// `PATCH /v1/standalonecredits/{standaloneCreditId}`
    pub async fn patch_standalone_credit_status_for_interac_fraud(
        &self,
        standalone_credit_id: &str,
        request: &StandaloneCreditUpdateRequest,
        options: Option<&RequestOptions>,
    ) -> Result<StandaloneCredit> {
        let path = format!("{STANDALONE_CREDIT_ENDPOINT}/{standalone_credit_id}");
        self.client.patch_json(&path, request, options).await
    }
}
