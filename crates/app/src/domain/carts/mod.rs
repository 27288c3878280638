//! Carts

pub mod data;
pub mod errors;
pub mod records;
mod repositories;
pub mod service;
pub mod totals;

pub use errors::CartsServiceError;
pub use service::*;
