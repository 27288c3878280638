//! Add Cart Item Modifier Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bitewise_app::domain::carts::data::NewCartItemModifier;

use crate::{
    carts::{errors::into_status_error, responses::CartItemModifierResponse},
    extensions::*,
};

/// Add Cart Item Modifier Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddModifierRequest {
    /// Client-chosen modifier UUID; generated when omitted
    pub uuid: Option<Uuid>,

    pub clover_modifier_id: String,

    pub clover_modifier_group_id: String,

    pub name: String,

    /// Price in cents, charged once per unit of the item
    #[serde(default)]
    pub price: u64,
}

impl From<AddModifierRequest> for NewCartItemModifier {
    fn from(request: AddModifierRequest) -> Self {
        NewCartItemModifier {
            uuid: request.uuid.map(Into::into).unwrap_or_default(),
            clover_modifier_id: request.clover_modifier_id,
            clover_modifier_group_id: request.clover_modifier_group_id,
            name: request.name,
            price: request.price,
        }
    }
}

/// Add Cart Item Modifier Handler
#[endpoint(
    tags("carts"),
    summary = "Add Modifier to Cart Item",
    responses(
        (status_code = StatusCode::CREATED, description = "Modifier added"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Cart amounts out of range"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    item: PathParam<Uuid>,
    json: JsonBody<AddModifierRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartItemModifierResponse>, StatusError> {
    let state = depot.app_state()?;

    let modifier = state
        .app
        .carts
        .add_modifier(item.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(modifier.into()))
}
