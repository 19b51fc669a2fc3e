use chrono::NaiveDate;
use sqlx::PgPool;
use storage::{
    dto::schedule::{CompleteWorkoutRequest, TimelineEntry, WeekResponse},
    error::Result,
    models::ScheduledWorkout,
    repository::schedule::ScheduleRepository,
    services::training_log,
};
use uuid::Uuid;

pub async fn schedule_workout(
    pool: &PgPool,
    user_id: Uuid,
    workout_id: Uuid,
    date: NaiveDate,
) -> Result<ScheduledWorkout> {
    let repo = ScheduleRepository::new(pool);
    repo.create(user_id, workout_id, date).await
}

/// The Monday-to-Sunday week containing `day`, with its stats
pub async fn get_week(pool: &PgPool, user_id: Uuid, day: NaiveDate) -> Result<WeekResponse> {
    training_log::get_week(pool, user_id, day).await
}

pub async fn reschedule(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
    date: NaiveDate,
) -> Result<ScheduledWorkout> {
    let repo = ScheduleRepository::new(pool);
    repo.reschedule(user_id, id, date).await
}

pub async fn complete(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
    request: &CompleteWorkoutRequest,
) -> Result<ScheduledWorkout> {
    let repo = ScheduleRepository::new(pool);
    repo.complete(user_id, id, &request.normalized()).await
}

pub async fn uncomplete(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<ScheduledWorkout> {
    let repo = ScheduleRepository::new(pool);
    repo.uncomplete(user_id, id).await
}

pub async fn unschedule(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<()> {
    let repo = ScheduleRepository::new(pool);
    repo.delete(user_id, id).await
}

pub async fn get_year_timeline(
    pool: &PgPool,
    user_id: Uuid,
    year: i32,
) -> Result<Vec<TimelineEntry>> {
    training_log::get_year_timeline(pool, user_id, year).await
}
