use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::workout::{CreateWorkoutRequest, UpdateWorkoutRequest, WorkoutListQuery, WorkoutResponse},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::AuthUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/workouts",
    params(WorkoutListQuery),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Library workouts", body = Vec<WorkoutResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "workouts"
)]
pub async fn list_workouts(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Query(query): Query<WorkoutListQuery>,
) -> Result<Response, WebError> {
    let workouts = services::list_workouts(db.pool(), user_id, query.category).await?;

    let response: Vec<WorkoutResponse> = workouts.into_iter().map(WorkoutResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/workouts/{id}",
    params(
        ("id" = Uuid, Path, description = "Workout ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Workout found", body = WorkoutResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn get_workout(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let workout = services::get_workout(db.pool(), user_id, id).await?;

    Ok(Json(WorkoutResponse::from(workout)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/workouts",
    request_body = CreateWorkoutRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Workout created successfully", body = WorkoutResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "workouts"
)]
pub async fn create_workout(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(req): Json<CreateWorkoutRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let workout = services::create_workout(db.pool(), user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(WorkoutResponse::from(workout))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/workouts/{id}",
    params(
        ("id" = Uuid, Path, description = "Workout ID")
    ),
    request_body = UpdateWorkoutRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Workout updated successfully", body = WorkoutResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn update_workout(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(update_req): Json<UpdateWorkoutRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_workout(db.pool(), user_id, id, &update_req).await?;

    Ok(Json(WorkoutResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/workouts/{id}",
    params(
        ("id" = Uuid, Path, description = "Workout ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Workout and its scheduled occurrences deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn delete_workout(
    State(db): State<Database>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_workout(db.pool(), user_id, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
