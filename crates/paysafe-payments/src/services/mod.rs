//! Service interfaces, one per API resource.
//!
//! Obtain a service from the matching accessor on [`PaysafeClient`]; each
//! one borrows the client, so they are free to construct per call:
//!
//! ```no_run
//! # use paysafe_payments::client::PaysafeClient;
//! # use paysafe_payments::config::Environment;
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PaysafeClient::new("user:pass", Environment::Test)?;
//! let monitor = client.monitor_service().verify_that_service_is_accessible(None).await?;
//! # Ok(())
//! # }
//! ```

mod customer;
mod customer_address;
mod customer_payment_handle;
mod customer_single_use_token;
mod monitor;
mod original_credit;
mod payment;
mod payment_handle;
mod payment_methods;
mod refund;
mod settlement;
mod standalone_credit;
mod verification;
mod void_authorization;

pub use customer::CustomerService;
pub use customer_address::CustomerAddressService;
pub use customer_payment_handle::CustomerPaymentHandleService;
pub use customer_single_use_token::CustomerSingleUseTokenService;
pub use monitor::MonitorService;
pub use original_credit::OriginalCreditService;
pub use payment::PaymentService;
pub use payment_handle::PaymentHandleService;
pub use payment_methods::PaymentMethodsService;
pub use refund::RefundService;
pub use settlement::SettlementService;
pub use standalone_credit::StandaloneCreditService;
pub use verification::VerificationService;
pub use void_authorization::VoidAuthorizationService;

use bon::Builder;

use crate::client::PaysafeClient;

impl PaysafeClient {
    pub fn payment_service(&self) -> PaymentService<'_> {
        PaymentService::new(self)
    }

    pub fn payment_handle_service(&self) -> PaymentHandleService<'_> {
        PaymentHandleService::new(self)
    }

    pub fn settlement_service(&self) -> SettlementService<'_> {
        SettlementService::new(self)
    }

    pub fn refund_service(&self) -> RefundService<'_> {
        RefundService::new(self)
    }

    pub fn void_authorization_service(&self) -> VoidAuthorizationService<'_> {
        VoidAuthorizationService::new(self)
    }

    pub fn verification_service(&self) -> VerificationService<'_> {
        VerificationService::new(self)
    }

    pub fn standalone_credit_service(&self) -> StandaloneCreditService<'_> {
        StandaloneCreditService::new(self)
    }

    pub fn original_credit_service(&self) -> OriginalCreditService<'_> {
        OriginalCreditService::new(self)
    }

    pub fn customer_service(&self) -> CustomerService<'_> {
        CustomerService::new(self)
    }

    pub fn customer_address_service(&self) -> CustomerAddressService<'_> {
        CustomerAddressService::new(self)
    }

    pub fn customer_payment_handle_service(&self) -> CustomerPaymentHandleService<'_> {
        CustomerPaymentHandleService::new(self)
    }

    pub fn customer_single_use_token_service(&self) -> CustomerSingleUseTokenService<'_> {
        CustomerSingleUseTokenService::new(self)
    }

    pub fn look_up_payment_methods_service(&self) -> PaymentMethodsService<'_> {
        PaymentMethodsService::new(self)
    }

    pub fn monitor_service(&self) -> MonitorService<'_> {
        MonitorService::new(self)
    }
}

/// Query for the merchant-reference-number list endpoints.
///
/// Dates are ISO 8601 strings, passed through untouched. `limit` defaults
/// to 10 on the server and caps at 50; `offset` is a record count, not a
/// page number.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct MerchantRefNumQuery {
    #[builder(into)]
    pub merchant_ref_num: String,

    #[builder(into)]
    pub end_date: Option<String>,

    pub limit: Option<u32>,

    pub offset: Option<u32>,

    #[builder(into)]
    pub start_date: Option<String>,
}

impl MerchantRefNumQuery {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("merchantRefNum", self.merchant_ref_num.clone())];
        if let Some(end_date) = &self.end_date {
            pairs.push(("endDate", end_date.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        if let Some(start_date) = &self.start_date {
            pairs.push(("startDate", start_date.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Environment;

    use super::*;

    #[test]
    fn test_every_service_path_resolves_under_gateway_prefix() {
        let client = PaysafeClient::new("user:pass", Environment::Test).unwrap();
        for endpoint in [
            "/v1/payments",
            "/v1/payments/pay-1",
            "/v1/payments/pay-1/settlements",
            "/v1/payments/pay-1/voidauths",
            "/v1/paymenthandles",
            "/v1/paymenthandles/ph-1",
            "/v1/settlements/stl-1",
            "/v1/settlements/stl-1/refunds",
            "/v1/refunds/rfd-1",
            "/v1/voidauths/va-1",
            "/v1/verifications",
            "/v1/verifications/ver-1",
            "/v1/standalonecredits",
            "/v1/standalonecredits/sc-1",
            "/v1/originalcredits",
            "/v1/originalcredits/oc-1",
            "/v1/customers",
            "/v1/customers/cust-1",
            "/v1/customers/cust-1/addresses",
            "/v1/customers/cust-1/addresses/addr-1",
            "/v1/customers/cust-1/paymenthandles",
            "/v1/customers/cust-1/paymenthandles/cph-1",
            "/v1/customers/cust-1/singleusecustomertokens",
            "/v1/singleusecustomertokens/sut-1",
            "/v1/paymentmethods",
            "/v1/monitor",
        ] {
            let url = client.request_url(endpoint, &[]).unwrap();
            assert_eq!(
                url.as_str(),
                format!("https://api.test.paysafe.com/paymenthub{endpoint}")
            );
        }
    }

    #[test]
    fn test_query_pairs_order_and_presence() {
        let query = MerchantRefNumQuery::builder()
            .merchant_ref_num("ref-1")
            .limit(10)
            .offset(20)
            .build();

        assert_eq!(
            query.query_pairs(),
            vec![
                ("merchantRefNum", "ref-1".to_string()),
                ("limit", "10".to_string()),
                ("offset", "20".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_with_date_window() {
        let query = MerchantRefNumQuery::builder()
            .merchant_ref_num("ref-2")
            .start_date("2024-01-01T00:00:00Z")
            .end_date("2024-02-01T00:00:00Z")
            .build();

        assert_eq!(
            query.query_pairs(),
            vec![
                ("merchantRefNum", "ref-2".to_string()),
                ("endDate", "2024-02-01T00:00:00Z".to_string()),
                ("startDate", "2024-01-01T00:00:00Z".to_string()),
            ]
        );
    }
}
