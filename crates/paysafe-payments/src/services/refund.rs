//! Refunds: return settled funds to the customer.

use crate::client::PaysafeClient;
use crate::config::RequestOptions;
use crate::errors::Result;
use crate::models::common::{CancelRequest, CancelResponse};
use crate::models::refund::{Refund, RefundList, RefundRequest};

use super::MerchantRefNumQuery;

const REFUND_ENDPOINT: &str = "/v1/refunds";
const PROCESS_REFUND_ENDPOINT: &str = "/v1/settlements";

#[derive(Debug, Clone, Copy)]
pub struct RefundService<'a> {
    client: &'a PaysafeClient,
}

impl<'a> RefundService<'a> {
    pub(crate) fn new(client: &'a PaysafeClient) -> Self {
        Self { client }
    }

    /// Refunds a settled settlement, fully or partially.
    ///
    /// `POST /v1/settlements/{settlementId}/refunds`
    pub async fn process_refund(
        &self,
        settlement_id: &str,
        request: &RefundRequest,
        options: Option<&RequestOptions>,
    ) -> Result<Refund> {
        let path = format!("{PROCESS_REFUND_ENDPOINT}/{settlement_id}/refunds");
        self.client.post_json(&path, request, options).await
    }

    /// `GET /v1/refunds/{refundId}`
    pub async fn get_refund_by_id(
        &self,
        refund_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Refund> {
        let path = format!("{REFUND_ENDPOINT}/{refund_id}");
        self.client.get_json(&path, &[], options).await
    }

    /// `GET /v1/refunds?merchantRefNum=...`
    pub async fn get_refund_using_merchant_reference_number(
        &self,
        query: &MerchantRefNumQuery,
        options: Option<&RequestOptions>,
    ) -> Result<RefundList> {
        self.client
            .get_json(REFUND_ENDPOINT, &query.query_pairs(), options)
            .await
    }

    /// Cancels a pending refund.
    ///
    /// `PUT /v1/refunds/{refundId}`
    pub async fn cancel_refund(
        &self,
        refund_id: &str,
        request: &CancelRequest,
        options: Option<&RequestOptions>,
    ) -> Result<CancelResponse> {
        let path = format!("{REFUND_ENDPOINT}/{refund_id}");
        self.client.put_json(&path, request, options).await
    }
}
