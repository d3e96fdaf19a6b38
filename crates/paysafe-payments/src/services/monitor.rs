//! Gateway health probe.

use crate::client::PaysafeClient;
use crate::config::RequestOptions;
use crate::errors::Result;
use crate::models::monitor::MonitorResponse;

const MONITOR_ENDPOINT: &str = "/v1/monitor";

#[derive(Debug, Clone, Copy)]
pub struct MonitorService<'a> {
    client: &'a PaysafeClient,
}

impl<'a> MonitorService<'a> {
    pub(crate) fn new(client: &'a PaysafeClient) -> Self {
        Self { client }
    }

    /// Reports whether the gateway is reachable and ready.
    ///
    /// `GET /v1/monitor`
    pub async fn verify_that_service_is_accessible(
        &self,
        options: Option<&RequestOptions>,
    ) -> Result<MonitorResponse> {
        self.client.get_json(MONITOR_ENDPOINT, &[], options).await
    }
}
