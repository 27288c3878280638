//! Carts
//!
//! Cart Ledger routes. Items are addressed by their own identity under
//! `/cart-items`, not nested under their cart.

mod errors;
mod handlers;
mod responses;

pub(crate) use handlers::*;
