//! Settlements: move authorized funds to capture.

use crate::client::PaysafeClient;
use crate::config::RequestOptions;
use crate::errors::Result;
use crate::models::common::{CancelRequest, CancelResponse};
use crate::models::settlement::{Settlement, SettlementList, SettlementRequest};

use super::MerchantRefNumQuery;

const SETTLEMENT_ENDPOINT: &str = "/v1/settlements";
const PAYMENT_SETTLEMENT_ENDPOINT: &str = "/v1/payments";

#[derive(Debug, Clone, Copy)]
pub struct SettlementService<'a> {
    client: &'a PaysafeClient,
}

impl<'a> SettlementService<'a> {
    pub(crate) fn new(client: &'a PaysafeClient) -> Self {
        Self { client }
    }

    /// Settles a previously authorized payment, fully or partially.
    ///
    /// `POST /v1/payments/{paymentId}/settlements`
    pub async fn process_settlement(
        &self,
        payment_id: &str,
        request: &SettlementRequest,
        options: Option<&RequestOptions>,
    ) -> Result<Settlement> {
        let path = format!("{PAYMENT_SETTLEMENT_ENDPOINT}/{payment_id}/settlements");
        self.client.post_json(&path, request, options).await
    }

    /// `GET /v1/settlements/{settlementId}`
    pub async fn get_settlement_by_id(
        &self,
        settlement_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Settlement> {
        let path = format!("{SETTLEMENT_ENDPOINT}/{settlement_id}");
        self.client.get_json(&path, &[], options).await
    }

    /// `GET /v1/settlements?merchantRefNum=...`
    pub async fn get_settlements_using_merchant_reference_number(
        &self,
        query: &MerchantRefNumQuery,
        options: Option<&RequestOptions>,
    ) -> Result<SettlementList> {
        self.client
            .get_json(SETTLEMENT_ENDPOINT, &query.query_pairs(), options)
            .await
    }

    /// Cancels a settlement that has not yet been batched.
    ///
    /// `PUT /v1/settlements/{settlementId}`
    pub async fn cancel_settlement(
        &self,
        settlement_id: &str,
        request: &CancelRequest,
        options: Option<&RequestOptions>,
    ) -> Result<CancelResponse> {
        let path = format!("{SETTLEMENT_ENDPOINT}/{settlement_id}");
        self.client.put_json(&path, request, options).await
    }
}
