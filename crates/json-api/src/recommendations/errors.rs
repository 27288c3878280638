//! Recommendation Errors

use salvo::http::StatusError;
use tracing::error;

use bitewise_app::domain::recommendations::RecommendationsServiceError;

pub(crate) fn into_status_error(error: RecommendationsServiceError) -> StatusError {
    match error {
        RecommendationsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Recommendation already exists")
        }
        RecommendationsServiceError::NotFound | RecommendationsServiceError::InvalidReference => {
            StatusError::not_found().brief("User not found")
        }
        RecommendationsServiceError::MissingRequiredData
        | RecommendationsServiceError::InvalidScore => {
            StatusError::bad_request().brief("Invalid recommendation payload")
        }
        RecommendationsServiceError::Sql(source) => {
            error!("recommendation storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
