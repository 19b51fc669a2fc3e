use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::workout::{CreateWorkoutRequest, UpdateWorkoutRequest};
use crate::error::{Result, StorageError};
use crate::models::{WorkoutCategory, WorkoutTemplate};

const WORKOUT_COLUMNS: &str =
    "id, user_id, name, category, duration, pace, effort, description, created_at";

/// Repository for a user's workout library
pub struct WorkoutRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WorkoutRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the user's workouts ordered by name, optionally for one category
    pub async fn list(&self, user_id: Uuid, category: Option<WorkoutCategory>) -> Result<Vec<WorkoutTemplate>> {
        let query = format!(
            r#"
            SELECT {WORKOUT_COLUMNS}
            FROM workout_library
            WHERE user_id = $1
              AND ($2::workout_category IS NULL OR category = $2)
            ORDER BY name
            "#
        );

        let workouts = sqlx::query_as::<_, WorkoutTemplate>(&query)
            .bind(user_id)
            .bind(category)
            .fetch_all(self.pool)
            .await?;

        Ok(workouts)
    }

    pub async fn find(&self, user_id: Uuid, id: Uuid) -> Result<WorkoutTemplate> {
        let query = format!(
            r#"
            SELECT {WORKOUT_COLUMNS}
            FROM workout_library
            WHERE id = $1 AND user_id = $2
            "#
        );

        sqlx::query_as::<_, WorkoutTemplate>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn create(&self, user_id: Uuid, req: &CreateWorkoutRequest) -> Result<WorkoutTemplate> {
        let query = format!(
            r#"
            INSERT INTO workout_library (user_id, name, category, duration, pace, effort, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {WORKOUT_COLUMNS}
            "#
        );

        let workout = sqlx::query_as::<_, WorkoutTemplate>(&query)
            .bind(user_id)
            .bind(&req.name)
            .bind(req.category)
            .bind(req.duration)
            .bind(&req.pace)
            .bind(req.effort)
            .bind(&req.description)
            .fetch_one(self.pool)
            .await?;

        Ok(workout)
    }

    /// Apply a partial update on top of the existing row
    pub async fn update(
        &self,
        existing: &WorkoutTemplate,
        req: &UpdateWorkoutRequest,
    ) -> Result<WorkoutTemplate> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let category = req.category.unwrap_or(existing.category);
        let duration = req.duration.or(existing.duration);
        let pace = req.pace.as_ref().or(existing.pace.as_ref());
        let effort = req.effort.or(existing.effort);
        let description = req.description.as_ref().or(existing.description.as_ref());

        let query = format!(
            r#"
            UPDATE workout_library
            SET name = $3,
                category = $4,
                duration = $5,
                pace = $6,
                effort = $7,
                description = $8
            WHERE id = $1 AND user_id = $2
            RETURNING {WORKOUT_COLUMNS}
            "#
        );

        sqlx::query_as::<_, WorkoutTemplate>(&query)
            .bind(existing.id)
            .bind(existing.user_id)
            .bind(name)
            .bind(category)
            .bind(duration)
            .bind(pace)
            .bind(effort)
            .bind(description)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    /// Delete a workout; its scheduled occurrences go with it
    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM workout_library WHERE id = $1 AND user_id = $2")
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
