//! Customer Carts Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::{errors::into_status_error, responses::CartResponse},
    extensions::*,
};

/// Customer Carts Handler
///
/// Returns every cart owned by a customer, newest first.
#[endpoint(
    tags("carts"),
    summary = "List Customer Carts",
    responses(
        (status_code = StatusCode::OK, description = "Cart summaries"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    customer: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<Vec<CartResponse>>, StatusError> {
    let state = depot.app_state()?;

    let summaries = state
        .app
        .carts
        .list_customer_cart_summaries(customer.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(summaries.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use bitewise_app::domain::{
        carts::{
            MockCartsService,
            records::{CartSummary, CartUuid},
        },
        users::records::UserUuid,
    };

    use crate::test_helpers::{carts_service, make_cart};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(
            carts,
            Router::with_path("customers/{customer}/carts").get(handler),
        )
    }

    #[tokio::test]
    async fn test_customer_carts_are_listed() -> TestResult {
        let customer = UserUuid::new();
        let newer = CartUuid::new();
        let older = CartUuid::new();

        let summaries: Vec<CartSummary> = [newer, older]
            .into_iter()
            .map(|uuid| {
                let mut cart = make_cart(uuid);
                cart.customer_uuid = Some(customer);

                CartSummary {
                    cart,
                    lines: Vec::new(),
                }
            })
            .collect();

        let mut carts = MockCartsService::new();

        carts
            .expect_list_customer_cart_summaries()
            .once()
            .withf(move |c| *c == customer)
            .return_once(move |_| Ok(summaries));

        let mut res = TestClient::get(format!("http://example.com/customers/{customer}/carts"))
            .send(&make_service(carts))
            .await;

        let body: Vec<CartResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body.iter().map(|c| c.uuid).collect::<Vec<_>>(),
            vec![newer.into_uuid(), older.into_uuid()]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_customer_without_carts_returns_empty_list() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_list_customer_cart_summaries()
            .once()
            .return_once(|_| Ok(Vec::new()));

        let mut res = TestClient::get(format!(
            "http://example.com/customers/{}/carts",
            Uuid::now_v7()
        ))
        .send(&make_service(carts))
        .await;

        let body: Vec<CartResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.is_empty(), "expected no carts, got {body:?}");

        Ok(())
    }
}
