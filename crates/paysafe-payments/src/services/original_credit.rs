//! Original credits: push funds back onto a card without a prior payment.

use crate::client::PaysafeClient;
use crate::config::RequestOptions;
use crate::errors::Result;
use crate::models::common::{CancelRequest, CancelResponse};
use crate::models::original_credit::{OriginalCredit, OriginalCreditList, OriginalCreditRequest};

use super::MerchantRefNumQuery;

const ORIGINAL_CREDIT_ENDPOINT: &str = "/v1/originalcredits";

#[derive(Debug, Clone, Copy)]
pub struct OriginalCreditService<'a> {
    client: &'a PaysafeClient,
}

impl<'a> OriginalCreditService<'a> {
    pub(crate) fn new(client: &'a PaysafeClient) -> Self {
        Self { client }
    }

    /// `POST /v1/originalcredits`
    pub async fn process_original_credit(
        &self,
        request: &OriginalCreditRequest,
        options: Option<&RequestOptions>,
    ) -> Result<OriginalCredit> {
        self.client
            .post_json(ORIGINAL_CREDIT_ENDPOINT, request, options)
            .await
    }

    /// `GET /v1/originalcredits/{originalCreditId}`
    pub async fn get_original_credit_by_id(
        &self,
        original_credit_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<OriginalCredit> {
        let path = format!("{ORIGINAL_CREDIT_ENDPOINT}/{original_credit_id}");
        self.client.get_json(&path, &[], options).await
    }

    /// `GET /v1/originalcredits?merchantRefNum=...`
    pub async fn get_original_credit_using_merchant_reference_number(
        &self,
        query: &MerchantRefNumQuery,
        options: Option<&RequestOptions>,
    ) -> Result<OriginalCreditList> {
        self.client
            .get_json(ORIGINAL_CREDIT_ENDPOINT, &query.query_pairs(), options)
            .await
    }

    /// Cancels a pending original credit.
    ///
    /// `PUT /v1/originalcredits/{originalCreditId}`
    pub async fn cancel_original_credit(
        &self,
        original_credit_id: &str,
        request: &CancelRequest,
        options: Option<&RequestOptions>,
    ) -> Result<CancelResponse> {
        let path = format!("{ORIGINAL_CREDIT_ENDPOINT}/{original_credit_id}");
        self.client.put_json(&path, request, options).await
    }
}
