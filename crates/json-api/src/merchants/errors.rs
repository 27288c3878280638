//! Merchant and Catalog Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use bitewise_app::domain::{catalog::CatalogServiceError, merchants::MerchantsServiceError};

pub(crate) fn into_status_error(error: MerchantsServiceError) -> StatusError {
    match error {
        MerchantsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Merchant already exists")
        }
        MerchantsServiceError::NotFound => StatusError::not_found().brief("Merchant not found"),
        MerchantsServiceError::MissingRequiredData | MerchantsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid merchant payload")
        }
        MerchantsServiceError::Sql(source) => {
            error!("merchant storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

/// Clover failures surface as gateway errors that keep Clover's status and
/// message so the caller can tell a bad token from an outage.
pub(crate) fn catalog_status_error(error: CatalogServiceError) -> StatusError {
    match error {
        CatalogServiceError::NotFound => StatusError::not_found().brief("Merchant not found"),
        CatalogServiceError::Upstream { status, message } => {
            warn!(status, "clover rejected catalog request: {message}");

            StatusError::bad_gateway()
                .brief(format!("Clover responded with status {status}"))
                .detail(message)
        }
        CatalogServiceError::Transport(source) => {
            warn!("clover is unreachable: {source}");

            StatusError::service_unavailable().brief("Clover is unreachable")
        }
        CatalogServiceError::Decode(source) => {
            error!("unexpected clover response body: {source}");

            StatusError::bad_gateway().brief("Unexpected response from Clover")
        }
        CatalogServiceError::Merchants(source) => {
            error!("merchant lookup failed while building catalog: {source}");

            StatusError::internal_server_error()
        }
    }
}
