use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Profile;

pub struct ProfileRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProfileRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find(&self, user_id: Uuid) -> Result<Profile> {
        sqlx::query_as::<_, Profile>(
            "SELECT id, full_name, created_at, updated_at FROM profiles WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Set the display name, creating the profile row on first use
    pub async fn upsert_full_name(&self, user_id: Uuid, full_name: Option<&str>) -> Result<Profile> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (id, full_name)
            VALUES ($1, $2)
            ON CONFLICT (id)
            DO UPDATE SET
                full_name = EXCLUDED.full_name,
                updated_at = CURRENT_TIMESTAMP
            RETURNING id, full_name, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(full_name)
        .fetch_one(self.pool)
        .await?;

        Ok(profile)
    }
}
