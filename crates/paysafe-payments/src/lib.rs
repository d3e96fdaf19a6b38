//! Client SDK for the Paysafe Payments REST API.
//!
//! Payload models live in [`models`]; each request type carries a builder
//! and serializes to the documented camelCase wire form. With the `client`
//! feature (on by default), [`client::PaysafeClient`] exposes one service
//! per API resource, each method mapping 1:1 onto an HTTP endpoint.

pub mod config;
pub mod models;

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "client")]
pub mod errors;
#[cfg(feature = "client")]
pub mod services;
