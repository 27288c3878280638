//! Catalog service errors.

use thiserror::Error;

use crate::{clover::CloverClientError, domain::merchants::MerchantsServiceError};

#[derive(Debug, Error)]
pub enum CatalogServiceError {
    #[error("merchant not found")]
    NotFound,

    /// Clover rejected a request; status and body are passed through.
    #[error("clover returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("failed to reach clover")]
    Transport(#[source] reqwest::Error),

    #[error("unexpected response body from clover")]
    Decode(#[source] reqwest::Error),

    #[error("merchant lookup failed")]
    Merchants(#[source] MerchantsServiceError),
}

impl From<CloverClientError> for CatalogServiceError {
    fn from(error: CloverClientError) -> Self {
        match error {
            CloverClientError::Upstream { status, message } => Self::Upstream { status, message },
            CloverClientError::Transport(source) => Self::Transport(source),
            CloverClientError::Decode(source) => Self::Decode(source),
        }
    }
}

impl From<MerchantsServiceError> for CatalogServiceError {
    fn from(error: MerchantsServiceError) -> Self {
        match error {
            MerchantsServiceError::NotFound => Self::NotFound,
            other => Self::Merchants(other),
        }
    }
}
