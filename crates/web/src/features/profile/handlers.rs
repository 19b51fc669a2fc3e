use axum::{
    Extension, Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::profile::{ProfileResponse, UpdateProfileRequest},
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::AuthUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/profile",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Profile of the current user", body = ProfileResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Profile not created yet")
    ),
    tag = "profile"
)]
pub async fn get_profile(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Response, WebError> {
    let profile = services::get_profile(db.pool(), user_id).await?;

    Ok(Json(ProfileResponse::from(profile)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/profile",
    request_body = UpdateProfileRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Profile updated", body = ProfileResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "profile"
)]
pub async fn update_profile(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let profile = services::update_profile(db.pool(), user_id, &req).await?;

    Ok(Json(ProfileResponse::from(profile)).into_response())
}
