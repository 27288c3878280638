//! Catalog Categories Handler

use rust_decimal::{Decimal, prelude::ToPrimitive as _};
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bitewise_app::domain::catalog::records::{Category, Variation};

use crate::{extensions::*, merchants::errors::catalog_status_error};

/// Catalog Category Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryResponse {
    /// Clover category id
    pub id: String,

    pub name: String,

    /// Purchasable variations filed under this category
    pub variations: Vec<VariationResponse>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            variations: category.variations.into_iter().map(Into::into).collect(),
        }
    }
}

/// Catalog Variation Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VariationResponse {
    /// Clover variant id, or the item id for items without variants
    pub id: String,

    /// `"{item} ({variant})"` for variants, the item name otherwise
    pub name: String,

    /// Price in currency units
    pub price: f64,
}

impl From<Variation> for VariationResponse {
    fn from(variation: Variation) -> Self {
        Self {
            id: variation.id,
            name: variation.name,
            price: price_to_f64(variation.price),
        }
    }
}

pub(crate) fn price_to_f64(price: Decimal) -> f64 {
    price.to_f64().unwrap_or_default()
}

/// Catalog Categories Handler
///
/// Fetches categories and items from Clover and folds every item variant
/// into the categories the item belongs to.
#[endpoint(
    tags("catalog"),
    summary = "List Catalog Categories",
    responses(
        (status_code = StatusCode::OK, description = "Category tree"),
        (status_code = StatusCode::NOT_FOUND, description = "Merchant not found"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Clover rejected the request"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Clover is unreachable"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    merchant: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<Vec<CategoryResponse>>, StatusError> {
    let state = depot.app_state()?;

    let categories = state
        .app
        .catalog
        .build_category_tree(merchant.into_inner().into())
        .await
        .map_err(catalog_status_error)?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}
