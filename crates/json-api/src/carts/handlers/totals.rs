//! Recalculate Cart Totals Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::{errors::into_status_error, responses::CartResponse},
    extensions::*,
};

/// Recalculate Cart Totals Handler
///
/// Recomputes the stored subtotal and total from the cart's items and
/// returns the refreshed summary.
#[endpoint(
    tags("carts"),
    summary = "Recalculate Cart Totals",
    responses(
        (status_code = StatusCode::OK, description = "Cart summary with fresh totals"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Cart amounts out of range"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.app_state()?;
    let carts = &state.app.carts;

    let cart = carts
        .recalculate_totals(cart.into_inner().into())
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
    use mockall::Sequence;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use bitewise_app::domain::carts::{
        CartsServiceError, MockCartsService,
        records::{CartSummary, CartUuid},
    };

    use crate::test_helpers::{carts_service, make_cart};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("carts/{cart}/totals").post(handler))
    }

    #[tokio::test]
    async fn test_recalculate_returns_refreshed_summary() -> TestResult {
        let uuid = CartUuid::new();

        let mut cart = make_cart(uuid);
        cart.subtotal = 700;
        cart.total = 700;

        let summary = CartSummary {
            cart: cart.clone(),
            lines: Vec::new(),
        };

        let mut carts = MockCartsService::new();
        let mut sequence = Sequence::new();

        carts
            .expect_recalculate_totals()
            .once()
            .in_sequence(&mut sequence)
            .withf(move |c| *c == uuid)
            .return_once(move |_| Ok(cart));

        carts
            .expect_get_cart_summary()
            .once()
            .in_sequence(&mut sequence)
            .withf(move |c| *c == uuid)
            .return_once(move |_| Ok(summary));

        let mut res = TestClient::post(format!("http://example.com/carts/{uuid}/totals"))
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!((body.subtotal, body.total), (700, 700));

        Ok(())
    }

    #[tokio::test]
    async fn test_recalculate_missing_cart_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_recalculate_totals()
            .once()
            .return_once(|_| Err(CartsServiceError::NotFound));

        carts.expect_get_cart_summary().never();

        let res = TestClient::post(format!("http://example.com/carts/{}/totals", Uuid::now_v7()))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
