//! Session Cart Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    carts::{errors::into_status_error, responses::CartResponse},
    extensions::*,
};

/// Session Cart Handler
///
/// Returns the newest active cart opened for an ordering session.
#[endpoint(
    tags("carts"),
    summary = "Get Active Cart for Session",
    responses(
        (status_code = StatusCode::OK, description = "Cart summary"),
        (status_code = StatusCode::NOT_FOUND, description = "No active cart for session"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    session: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.app_state()?;
    let carts = &state.app.carts;

    let cart = carts
        .get_active_cart_for_session(&session.into_inner())
        .await
        .map_err(into_status_error)?;

    let summary = carts
        .get_cart_summary(cart.uuid)
        .await
        .map_err(into_status_error)?;

    Ok(Json(summary.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use bitewise_app::domain::carts::{
        CartsServiceError, MockCartsService,
        records::{CartSummary, CartUuid},
    };

    use crate::test_helpers::{carts_service, make_cart};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("sessions/{session}/cart").get(handler))
    }

    #[tokio::test]
    async fn test_session_cart_returns_summary() -> TestResult {
        let uuid = CartUuid::new();
        let cart = make_cart(uuid);
        let summary = CartSummary {
            cart: cart.clone(),
            lines: Vec::new(),
        };

        let mut carts = MockCartsService::new();

        carts
            .expect_get_active_cart_for_session()
            .once()
            .withf(|session| session == "session-1")
            .return_once(move |_| Ok(cart));

        carts
            .expect_get_cart_summary()
            .once()
            .withf(move |c| *c == uuid)
            .return_once(move |_| Ok(summary));

        let mut res = TestClient::get("http://example.com/sessions/session-1/cart")
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.session_id.as_deref(), Some("session-1"));

        Ok(())
    }

    #[tokio::test]
    async fn test_session_without_active_cart_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_active_cart_for_session()
            .once()
            .return_once(|_| Err(CartsServiceError::NotFound));

        carts.expect_get_cart_summary().never();

        let res = TestClient::get("http://example.com/sessions/unknown/cart")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
