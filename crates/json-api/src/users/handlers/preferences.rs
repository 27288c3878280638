//! Update User Preferences Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    extensions::*,
    users::{errors::into_status_error, get::UserResponse},
};

/// Update Preferences Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdatePreferencesRequest {
    /// Replaces the stored preferences; `null` clears them
    pub preferences: Option<String>,
}

/// Update User Preferences Handler
#[endpoint(
    tags("users"),
    summary = "Update User Preferences",
    responses(
        (status_code = StatusCode::OK, description = "User updated"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    json: JsonBody<UpdatePreferencesRequest>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.app_state()?;

    let user = state
        .app
        .users
        .update_preferences(user.into_inner().into(), json.into_inner().preferences)
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.into()))
}
