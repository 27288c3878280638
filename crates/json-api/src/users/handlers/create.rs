//! Create User Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bitewise_app::domain::users::data::NewUser;

use crate::{
    extensions::*,
    users::{errors::into_status_error, get::UserResponse},
};

/// Create User Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateUserRequest {
    /// Client-chosen user UUID; generated when omitted
    pub uuid: Option<Uuid>,

    pub mobile_number: String,

    pub name: Option<String>,

    #[serde(default)]
    pub is_guest: bool,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        NewUser {
            uuid: request.uuid.map(Into::into).unwrap_or_default(),
            mobile_number: request.mobile_number,
            name: request.name,
            is_guest: request.is_guest,
        }
    }
}

/// Create User Handler
#[endpoint(
    tags("users"),
    summary = "Create User",
    responses(
        (status_code = StatusCode::CREATED, description = "User created"),
        (status_code = StatusCode::CONFLICT, description = "Mobile number already registered"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateUserRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<UserResponse>, StatusError> {
    let state = depot.app_state()?;

    let user = state
        .app
        .users
        .create_user(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.respond_created(format!("/users/{}", user.uuid))?;

    Ok(Json(user.into()))
}
