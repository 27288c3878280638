//! Merchants
//!
//! Merchant registration plus the catalog views built from Clover.

mod errors;
mod handlers;

pub(crate) use handlers::*;
