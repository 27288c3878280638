//! Clear Cart Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{carts::errors::into_status_error, extensions::*};

/// Clear Cart Handler
///
/// Removes every item and modifier; the cart itself stays.
#[endpoint(
    tags("carts"),
    summary = "Clear Cart",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Cart cleared"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.app_state()?;

    let cleared = state
        .app
        .carts
        .clear_cart(cart.into_inner().into())
        .await
        .map_err(into_status_error)?;

    if !cleared {
        return Err(StatusError::not_found().brief("Cart not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use bitewise_app::domain::carts::{MockCartsService, records::CartUuid};

    use crate::test_helpers::carts_service;

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("carts/{cart}/items").delete(handler))
    }

    #[tokio::test]
    async fn test_clear_cart_returns_204() -> TestResult {
        let uuid = CartUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_clear_cart()
            .once()
            .withf(move |c| *c == uuid)
            .return_once(|_| Ok(true));

        let res = TestClient::delete(format!("http://example.com/carts/{uuid}/items"))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_clear_missing_cart_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_clear_cart().once().return_once(|_| Ok(false));

        let res = TestClient::delete(format!("http://example.com/carts/{}/items", Uuid::now_v7()))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
