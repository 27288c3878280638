//! Clover REST API client

mod client;
mod errors;
pub mod models;
mod token;

pub use client::*;
pub use errors::CloverClientError;
pub use token::AccessToken;
