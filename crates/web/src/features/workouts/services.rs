use sqlx::PgPool;
use storage::{
    dto::workout::{CreateWorkoutRequest, UpdateWorkoutRequest},
    error::Result,
    models::{WorkoutCategory, WorkoutTemplate},
    repository::workout::WorkoutRepository,
};
use uuid::Uuid;

/// List library workouts, optionally of one category
pub async fn list_workouts(
    pool: &PgPool,
    user_id: Uuid,
    category: Option<WorkoutCategory>,
) -> Result<Vec<WorkoutTemplate>> {
    let repo = WorkoutRepository::new(pool);
    repo.list(user_id, category).await
}

pub async fn get_workout(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<WorkoutTemplate> {
    let repo = WorkoutRepository::new(pool);
    repo.find(user_id, id).await
}

pub async fn create_workout(
    pool: &PgPool,
    user_id: Uuid,
    request: &CreateWorkoutRequest,
) -> Result<WorkoutTemplate> {
    let repo = WorkoutRepository::new(pool);
    let workout = repo.create(user_id, request).await?;
    tracing::info!(user_id = %user_id, workout_id = %workout.id, "Created library workout");
    Ok(workout)
}

pub async fn update_workout(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
    request: &UpdateWorkoutRequest,
) -> Result<WorkoutTemplate> {
    let repo = WorkoutRepository::new(pool);

    let existing = repo.find(user_id, id).await?;
    repo.update(&existing, request).await
}

/// Delete a library workout together with its scheduled occurrences
pub async fn delete_workout(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<()> {
    let repo = WorkoutRepository::new(pool);
    repo.delete(user_id, id).await
}
