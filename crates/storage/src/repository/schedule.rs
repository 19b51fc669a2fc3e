use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::schedule::CompleteWorkoutRequest;
use crate::error::{Result, StorageError};
use crate::models::{ScheduledWorkout, ScheduledWorkoutDetail, WorkoutCategory};

const SCHEDULED_COLUMNS: &str = r#"
    id, user_id, workout_id, scheduled_date, completed,
    trained_time, distance, pace, notes, joy_rating, created_at, updated_at
"#;

pub struct ScheduleRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScheduleRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Place a library workout on a date; the workout must belong to the user
    pub async fn create(&self, user_id: Uuid, workout_id: Uuid, date: NaiveDate) -> Result<ScheduledWorkout> {
        let query = format!(
            r#"
            INSERT INTO scheduled_workouts (user_id, workout_id, scheduled_date)
            SELECT $1, w.id, $3
            FROM workout_library w
            WHERE w.id = $2 AND w.user_id = $1
            RETURNING {SCHEDULED_COLUMNS}
            "#
        );

        sqlx::query_as::<_, ScheduledWorkout>(&query)
            .bind(user_id)
            .bind(workout_id)
            .bind(date)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| StorageError::from(e).foreign_key_as("Workout does not exist"))?
            .ok_or(StorageError::NotFound)
    }

    /// Scheduled workouts with template details between two dates, inclusive
    pub async fn list_between(
        &self,
        user_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ScheduledWorkoutDetail>> {
        let workouts = sqlx::query_as::<_, ScheduledWorkoutDetail>(
            r#"
            SELECT
                s.id, s.workout_id, s.scheduled_date, s.completed,
                s.trained_time, s.distance, s.pace, s.notes, s.joy_rating,
                w.name AS workout_name, w.category, w.duration, w.effort, w.description
            FROM scheduled_workouts s
            JOIN workout_library w ON w.id = s.workout_id
            WHERE s.user_id = $1
              AND s.scheduled_date BETWEEN $2 AND $3
            ORDER BY s.scheduled_date, s.created_at
            "#,
        )
        .bind(user_id)
        .bind(from)
        .bind(to)
        .fetch_all(self.pool)
        .await?;

        Ok(workouts)
    }

    /// Date and category of every completed workout in the range
    pub async fn list_completed_between(
        &self,
        user_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<(NaiveDate, WorkoutCategory)>> {
        let rows = sqlx::query_as::<_, (NaiveDate, WorkoutCategory)>(
            r#"
            SELECT s.scheduled_date, w.category
            FROM scheduled_workouts s
            JOIN workout_library w ON w.id = s.workout_id
            WHERE s.user_id = $1
              AND s.completed
              AND s.scheduled_date BETWEEN $2 AND $3
            ORDER BY s.scheduled_date
            "#,
        )
        .bind(user_id)
        .bind(from)
        .bind(to)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn reschedule(&self, user_id: Uuid, id: Uuid, date: NaiveDate) -> Result<ScheduledWorkout> {
        let query = format!(
            r#"
            UPDATE scheduled_workouts
            SET scheduled_date = $3, updated_at = CURRENT_TIMESTAMP
            WHERE id = $1 AND user_id = $2
            RETURNING {SCHEDULED_COLUMNS}
            "#
        );

        sqlx::query_as::<_, ScheduledWorkout>(&query)
            .bind(id)
            .bind(user_id)
            .bind(date)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn complete(
        &self,
        user_id: Uuid,
        id: Uuid,
        req: &CompleteWorkoutRequest,
    ) -> Result<ScheduledWorkout> {
        let query = format!(
            r#"
            UPDATE scheduled_workouts
            SET completed = true,
                trained_time = $3,
                distance = $4,
                pace = $5,
                notes = $6,
                joy_rating = $7,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1 AND user_id = $2
            RETURNING {SCHEDULED_COLUMNS}
            "#
        );

        sqlx::query_as::<_, ScheduledWorkout>(&query)
            .bind(id)
            .bind(user_id)
            .bind(req.trained_time)
            .bind(req.distance)
            .bind(&req.pace)
            .bind(&req.notes)
            .bind(req.joy_rating)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    /// Mark as not done, clearing every actual-performance field
    pub async fn uncomplete(&self, user_id: Uuid, id: Uuid) -> Result<ScheduledWorkout> {
        let query = format!(
            r#"
            UPDATE scheduled_workouts
            SET completed = false,
                trained_time = NULL,
                distance = NULL,
                pace = NULL,
                notes = NULL,
                joy_rating = NULL,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1 AND user_id = $2
            RETURNING {SCHEDULED_COLUMNS}
            "#
        );

        sqlx::query_as::<_, ScheduledWorkout>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM scheduled_workouts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
