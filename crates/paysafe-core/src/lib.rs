//! Paysafe core library.
//!
//! This library provides the wire-level building blocks shared by every
//! Paysafe Payments API payload: key/value escape hatches, currency codes,
//! and paging metadata.

pub mod errors;
pub mod types;
