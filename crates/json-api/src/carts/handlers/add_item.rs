//! Add Cart Item Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bitewise_app::domain::carts::data::NewCartItem;

use crate::{
    carts::{errors::into_status_error, responses::CartItemResponse},
    extensions::*,
};

fn default_quantity() -> u32 {
    1
}

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddCartItemRequest {
    /// Client-chosen item UUID; generated when omitted
    pub uuid: Option<Uuid>,

    /// The Clover item or variant id
    pub clover_item_id: String,

    pub name: String,

    /// Unit price in cents
    pub price: u64,

    /// Units to add; accumulates onto an existing line for the same item
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    pub notes: Option<String>,
}

impl From<AddCartItemRequest> for NewCartItem {
    fn from(request: AddCartItemRequest) -> Self {
        NewCartItem {
            uuid: request.uuid.map(Into::into).unwrap_or_default(),
            clover_item_id: request.clover_item_id,
            name: request.name,
            price: request.price,
            quantity: request.quantity,
            notes: request.notes,
        }
    }
}

/// Add Cart Item Handler
///
/// Adding an item the cart already holds increases that line's quantity.
#[endpoint(
    tags("carts"),
    summary = "Add Item to Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Cart item added"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Cart amounts out of range"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartItemResponse>, StatusError> {
    let state = depot.app_state()?;

    let item = state
        .app
        .carts
        .add_item(cart.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.respond_created(format!("/cart-items/{}", item.uuid))?;

    Ok(Json(item.into()))
}
