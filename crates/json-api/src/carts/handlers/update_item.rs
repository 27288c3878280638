//! Update Cart Item Quantity Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bitewise_app::domain::carts::records::QuantityUpdate;

use crate::{
    carts::{errors::into_status_error, responses::CartItemResponse},
    extensions::*,
};

/// Update Cart Item Quantity Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartItemRequest {
    /// New quantity; zero or less removes the item
    pub quantity: i64,
}

/// Update Cart Item Quantity Handler
///
/// Replaces the quantity. A quantity of zero or less deletes the item and
/// answers `204 No Content`.
#[endpoint(
    tags("carts"),
    summary = "Update Cart Item Quantity",
    responses(
        (status_code = StatusCode::OK, description = "Cart item updated"),
        (status_code = StatusCode::NO_CONTENT, description = "Cart item removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Cart amounts out of range"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    item: PathParam<Uuid>,
    json: JsonBody<UpdateCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<StatusCode, StatusError> {
    let state = depot.app_state()?;

    let update = state
        .app
        .carts
        .update_item_quantity(item.into_inner().into(), json.into_inner().quantity)
        .await
        .map_err(into_status_error)?;

    match update {
        QuantityUpdate::Updated(item) => {
            res.render(Json(CartItemResponse::from(item)));

            Ok(StatusCode::OK)
        }
        QuantityUpdate::Removed => Ok(StatusCode::NO_CONTENT),
    }
}
