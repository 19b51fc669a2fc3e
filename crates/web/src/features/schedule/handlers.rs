use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::schedule::{
        CompleteWorkoutRequest, RescheduleRequest, ScheduleWorkoutRequest, TimelineEntry,
        WeekQuery, WeekResponse,
    },
    models::ScheduledWorkout,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::AuthUser;

use super::services;

#[utoipa::path(
    post,
    path = "/api/schedule",
    request_body = ScheduleWorkoutRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Workout scheduled", body = ScheduledWorkout),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Workout not found")
    ),
    tag = "schedule"
)]
pub async fn schedule_workout(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(req): Json<ScheduleWorkoutRequest>,
) -> Result<Response, WebError> {
    let scheduled =
        services::schedule_workout(db.pool(), user_id, req.workout_id, req.scheduled_date).await?;

    Ok((StatusCode::CREATED, Json(scheduled)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/schedule/week",
    params(WeekQuery),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Scheduled workouts and stats for one week", body = WeekResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "schedule"
)]
pub async fn get_week(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Query(query): Query<WeekQuery>,
) -> Result<Response, WebError> {
    let day = query
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let response = services::get_week(db.pool(), user_id, day).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    put,
    path = "/api/schedule/{id}/date",
    params(
        ("id" = Uuid, Path, description = "Scheduled workout ID")
    ),
    request_body = RescheduleRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Workout moved", body = ScheduledWorkout),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Scheduled workout not found")
    ),
    tag = "schedule"
)]
pub async fn reschedule(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<RescheduleRequest>,
) -> Result<Response, WebError> {
    let moved = services::reschedule(db.pool(), user_id, id, req.scheduled_date).await?;

    Ok(Json(moved).into_response())
}

#[utoipa::path(
    put,
    path = "/api/schedule/{id}/complete",
    params(
        ("id" = Uuid, Path, description = "Scheduled workout ID")
    ),
    request_body = CompleteWorkoutRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Workout marked as done", body = ScheduledWorkout),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Scheduled workout not found")
    ),
    tag = "schedule"
)]
pub async fn complete(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<CompleteWorkoutRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let completed = services::complete(db.pool(), user_id, id, &req).await?;

    Ok(Json(completed).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/schedule/{id}/complete",
    params(
        ("id" = Uuid, Path, description = "Scheduled workout ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Workout marked as not done, actuals cleared", body = ScheduledWorkout),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Scheduled workout not found")
    ),
    tag = "schedule"
)]
pub async fn uncomplete(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let reopened = services::uncomplete(db.pool(), user_id, id).await?;

    Ok(Json(reopened).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/schedule/{id}",
    params(
        ("id" = Uuid, Path, description = "Scheduled workout ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Workout removed from the calendar"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Scheduled workout not found")
    ),
    tag = "schedule"
)]
pub async fn unschedule(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::unschedule(db.pool(), user_id, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/schedule/year/{year}",
    params(
        ("year" = i32, Path, description = "Calendar year")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Completed workouts of the year", body = Vec<TimelineEntry>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "schedule"
)]
pub async fn get_year_timeline(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(year): Path<i32>,
) -> Result<Response, WebError> {
    let timeline = services::get_year_timeline(db.pool(), user_id, year).await?;

    Ok(Json(timeline).into_response())
}
