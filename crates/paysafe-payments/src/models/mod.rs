//! Typed request/response payloads for the Payments API.
//!
//! Every attribute is optional unless a documented non-null default exists;
//! unset attributes are omitted from the wire form entirely. Payloads that
//! accept `additionalParameters` in the vendor documentation implement
//! [`ExtraFieldsExt`] and flatten those extras as sibling top-level keys.

pub mod card;
pub mod common;
pub mod customer;
pub mod error;
pub mod lookup;
pub mod lpm;
pub mod monitor;
pub mod original_credit;
pub mod payment;
pub mod payment_handle;
pub mod payment_method;
pub mod refund;
pub mod settlement;
pub mod standalone_credit;
pub mod verification;
pub mod void_authorization;
pub mod wallets;

pub use paysafe_core::types::{AnyJson, CurrencyCode, ExtraFields, ExtraFieldsExt, Meta, Record};

pub(crate) fn default_true() -> bool {
    true
}
