//! Lookup of payment methods enabled for the merchant account.

use paysafe_core::types::CurrencyCode;

use crate::client::PaysafeClient;
use crate::config::RequestOptions;
use crate::errors::Result;
use crate::models::lookup::LookUpPaymentMethodsResponse;

const PAYMENT_METHODS_ENDPOINT: &str = "/v1/paymentmethods";

#[derive(Debug, Clone, Copy)]
pub struct PaymentMethodsService<'a> {
    client: &'a PaysafeClient,
}

impl<'a> PaymentMethodsService<'a> {
    pub(crate) fn new(client: &'a PaysafeClient) -> Self {
        Self { client }
    }

    /// Lists the payment methods the account accepts for a currency.
    ///
    /// `GET /v1/paymentmethods?currencyCode=...`
    pub async fn look_up_payment_methods(
        &self,
        currency_code: &CurrencyCode,
        options: Option<&RequestOptions>,
    ) -> Result<LookUpPaymentMethodsResponse> {
        let query = [("currencyCode", currency_code.as_str().to_string())];
        self.client
            .get_json(PAYMENT_METHODS_ENDPOINT, &query, options)
            .await
    }
}
