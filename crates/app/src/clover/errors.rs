//! Clover client errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CloverClientError {
    /// Clover answered with a non-success status.
    #[error("clover returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("failed to reach clover")]
    Transport(#[source] reqwest::Error),

    #[error("unexpected response body from clover")]
    Decode(#[source] reqwest::Error),
}
