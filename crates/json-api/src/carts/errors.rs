//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use bitewise_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Session already has an active cart")
        }
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart or cart item not found"),
        CartsServiceError::InvalidReference => {
            StatusError::bad_request().brief("Unknown merchant or customer")
        }
        CartsServiceError::MissingRequiredData | CartsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid cart payload")
        }
        CartsServiceError::InvalidQuantity => {
            StatusError::bad_request().brief(CartsServiceError::InvalidQuantity.to_string())
        }
        CartsServiceError::AmountOverflow => {
            StatusError::unprocessable_entity().brief("Cart amounts exceed the supported range")
        }
        CartsServiceError::Sql(source) => {
            error!("cart ledger storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn test_errors_map_to_status_codes() {
        let cases = [
            (CartsServiceError::AlreadyExists, StatusCode::CONFLICT),
            (CartsServiceError::NotFound, StatusCode::NOT_FOUND),
            (CartsServiceError::InvalidReference, StatusCode::BAD_REQUEST),
            (CartsServiceError::InvalidQuantity, StatusCode::BAD_REQUEST),
            (
                CartsServiceError::AmountOverflow,
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
        ];

        for (error, expected) in cases {
            let label = error.to_string();

            assert_eq!(into_status_error(error).code, expected, "for {label}");
        }
    }
}
