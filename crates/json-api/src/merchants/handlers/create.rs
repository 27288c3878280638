//! Create Merchant Handler

use std::fmt;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bitewise_app::{clover::AccessToken, domain::merchants::data::NewMerchant};

use crate::{
    extensions::*,
    merchants::{errors::into_status_error, index::MerchantResponse},
};

/// Create Merchant Request
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateMerchantRequest {
    /// Client-chosen merchant UUID; generated when omitted
    pub uuid: Option<Uuid>,

    /// The merchant's id in Clover
    pub clover_merchant_id: String,

    pub name: String,

    /// Clover API token used for catalog requests
    pub access_token: String,
}

impl fmt::Debug for CreateMerchantRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateMerchantRequest")
            .field("uuid", &self.uuid)
            .field("clover_merchant_id", &self.clover_merchant_id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl From<CreateMerchantRequest> for NewMerchant {
    fn from(request: CreateMerchantRequest) -> Self {
        NewMerchant {
            uuid: request.uuid.map(Into::into).unwrap_or_default(),
            clover_merchant_id: request.clover_merchant_id,
            name: request.name,
            access_token: AccessToken::new(request.access_token),
        }
    }
}

/// Create Merchant Handler
#[endpoint(
    tags("merchants"),
    summary = "Register Merchant",
    responses(
        (status_code = StatusCode::CREATED, description = "Merchant registered"),
        (status_code = StatusCode::CONFLICT, description = "Merchant already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateMerchantRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<MerchantResponse>, StatusError> {
    let state = depot.app_state()?;

    let merchant = state
        .app
        .merchants
        .create_merchant(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.respond_created(format!("/merchants/{}", merchant.uuid))?;

    Ok(Json(merchant.into()))
}
