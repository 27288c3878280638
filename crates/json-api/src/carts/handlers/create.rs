//! Create Cart Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bitewise_app::domain::carts::data::NewCart;

use crate::{
    carts::{errors::into_status_error, responses::CartResponse},
    extensions::*,
};

/// Create Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCartRequest {
    /// Client-chosen cart UUID; generated when omitted
    pub uuid: Option<Uuid>,

    /// The merchant the cart is for
    pub merchant_uuid: Uuid,

    /// The ordering session; at most one active cart per session
    pub session_id: Option<String>,

    /// The customer who owns the cart
    pub customer_uuid: Option<Uuid>,
}

impl From<CreateCartRequest> for NewCart {
    fn from(request: CreateCartRequest) -> Self {
        NewCart {
            uuid: request.uuid.map(Into::into).unwrap_or_default(),
            merchant_uuid: request.merchant_uuid.into(),
            session_id: request.session_id,
            customer_uuid: request.customer_uuid.map(Into::into),
        }
    }
}

/// Create Cart Handler
#[endpoint(
    tags("carts"),
    summary = "Create Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Cart created"),
        (status_code = StatusCode::CONFLICT, description = "Session already has an active cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCartRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.app_state()?;

    let cart = state
        .app
        .carts
        .create_cart(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.respond_created(format!("/carts/{}", cart.uuid))?;

    Ok(Json(cart.into()))
}
