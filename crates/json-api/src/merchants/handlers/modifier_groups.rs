//! Catalog Modifier Groups Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bitewise_app::domain::catalog::records::{Modifier, ModifierGroup};

use crate::{
    extensions::*,
    merchants::{categories::price_to_f64, errors::catalog_status_error},
};

/// Modifier Group Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ModifierGroupResponse {
    /// Clover modifier group id
    pub id: String,

    pub name: String,

    /// Minimum modifiers a customer must pick
    pub min_required: Option<u32>,

    /// Maximum modifiers a customer may pick
    pub max_allowed: Option<u32>,

    pub modifiers: Vec<ModifierResponse>,
}

impl From<ModifierGroup> for ModifierGroupResponse {
    fn from(group: ModifierGroup) -> Self {
        Self {
            id: group.id,
            name: group.name,
            min_required: group.min_required,
            max_allowed: group.max_allowed,
            modifiers: group.modifiers.into_iter().map(Into::into).collect(),
        }
    }
}

/// Modifier Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ModifierResponse {
    /// Clover modifier id
    pub id: String,

    pub name: String,

    /// Price in currency units
    pub price: f64,
}

impl From<Modifier> for ModifierResponse {
    fn from(modifier: Modifier) -> Self {
        Self {
            id: modifier.id,
            name: modifier.name,
            price: price_to_f64(modifier.price),
        }
    }
}

/// Catalog Modifier Groups Handler
#[endpoint(
    tags("catalog"),
    summary = "List Modifier Groups",
    responses(
        (status_code = StatusCode::OK, description = "Modifier groups"),
        (status_code = StatusCode::NOT_FOUND, description = "Merchant not found"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Clover rejected the request"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Clover is unreachable"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    merchant: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<Vec<ModifierGroupResponse>>, StatusError> {
    let state = depot.app_state()?;

    let groups = state
        .app
        .catalog
        .list_modifier_groups(merchant.into_inner().into())
        .await
        .map_err(catalog_status_error)?;

    Ok(Json(groups.into_iter().map(Into::into).collect()))
}
