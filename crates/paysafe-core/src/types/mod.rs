//! Core types used across the Paysafe SDK.

mod common;
mod currency;
mod extra;
mod paging;

pub use common::*;
pub use currency::*;
pub use extra::*;
pub use paging::*;
