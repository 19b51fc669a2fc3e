use axum::{
    Extension, Json,
    extract::State,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use importer::{
    ActivityImporter, ActivitySummary, ImportContext, ImporterError, StravaAthlete, StravaImporter,
};
use serde::Deserialize;
use std::sync::Arc;
use storage::Database;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::AuthUser;
use crate::state::StravaService;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ConnectStravaRequest {
    /// Authorization code from Strava's OAuth redirect
    #[validate(length(min = 1, message = "Authorization code is required"))]
    pub code: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ActivitiesRequest {
    pub date: NaiveDate,
    /// Strava activity type, e.g. `Run`
    pub activity_type: Option<String>,
}

fn configured_importer(strava: StravaService) -> Result<Arc<StravaImporter>, WebError> {
    strava.0.ok_or_else(|| {
        ImporterError::ConfigError("Strava credentials not configured".to_string()).into()
    })
}

#[utoipa::path(
    post,
    path = "/api/strava/connect",
    request_body = ConnectStravaRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Strava account connected", body = StravaAthlete),
        (status = 400, description = "Missing code or Strava not configured"),
        (status = 401, description = "Unauthorized"),
        (status = 502, description = "Strava rejected the code")
    ),
    tag = "strava"
)]
pub async fn connect(
    State(db): State<Database>,
    State(strava): State<StravaService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(req): Json<ConnectStravaRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    let importer = configured_importer(strava)?;

    let context = ImportContext {
        pool: db.pool().clone(),
    };
    let athlete = importer.connect(user_id, &req.code, &context).await?;

    Ok(Json(athlete).into_response())
}

#[utoipa::path(
    post,
    path = "/api/strava/activities",
    request_body = ActivitiesRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Activities started on the given day", body = Vec<ActivitySummary>),
        (status = 400, description = "Strava not configured or not connected"),
        (status = 401, description = "Unauthorized"),
        (status = 502, description = "Strava request failed")
    ),
    tag = "strava"
)]
pub async fn list_activities(
    State(db): State<Database>,
    State(strava): State<StravaService>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(req): Json<ActivitiesRequest>,
) -> Result<Response, WebError> {
    let importer = configured_importer(strava)?;

    let context = ImportContext {
        pool: db.pool().clone(),
    };
    let activities = importer
        .activities_for_day(user_id, req.date, req.activity_type.as_deref(), &context)
        .await?;

    Ok(Json(activities).into_response())
}
