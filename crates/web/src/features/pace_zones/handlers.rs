use axum::{
    Extension, Json,
    extract::{Query, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::common::{PaginatedResponse, PaginationParams},
    dto::pace_zone::{ComputeZonesRequest, ComputeZonesResponse, PaceZoneSetResponse},
    services::pace_zones::PaceError,
};

use crate::error::WebError;
use crate::middleware::auth::AuthUser;

use super::services;

#[utoipa::path(
    post,
    path = "/api/pace-zones",
    request_body = ComputeZonesRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Zones computed; `saved` tells whether they were stored", body = ComputeZonesResponse),
        (status = 400, description = "Invalid 5K time"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "pace-zones"
)]
pub async fn compute_zones(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    payload: Result<Json<ComputeZonesRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!("Rejected pace zone request: {}", rejection.body_text());
        PaceError::InvalidTime
    })?;

    let response = services::compute_zones(db.pool(), user_id, req.minutes, req.seconds).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/pace-zones/current",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Latest stored zone set", body = PaceZoneSetResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No zones stored yet")
    ),
    tag = "pace-zones"
)]
pub async fn get_current_zones(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<Response, WebError> {
    let response = services::get_current_zones(db.pool(), user_id).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/pace-zones/history",
    params(PaginationParams),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Stored zone sets, newest first", body = PaginatedResponse<PaceZoneSetResponse>),
        (status = 400, description = "Invalid pagination parameters"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "pace-zones"
)]
pub async fn list_zone_history(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Query(params): Query<PaginationParams>,
) -> Result<Response, WebError> {
    params.validate().map_err(WebError::BadRequest)?;

    let response = services::list_history(db.pool(), user_id, &params).await?;

    Ok(Json(response).into_response())
}
