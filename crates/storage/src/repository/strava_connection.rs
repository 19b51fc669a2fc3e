use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::StravaConnection;

pub struct StravaConnectionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StravaConnectionRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find(&self, user_id: Uuid) -> Result<Option<StravaConnection>> {
        let connection = sqlx::query_as::<_, StravaConnection>(
            r#"
            SELECT user_id, access_token, refresh_token, expires_at, athlete_id, updated_at
            FROM strava_connections
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(connection)
    }

    /// One connection per user; reconnecting replaces the stored tokens
    pub async fn upsert(
        &self,
        user_id: Uuid,
        access_token: &str,
        refresh_token: &str,
        expires_at: i64,
        athlete_id: i64,
    ) -> Result<StravaConnection> {
        let connection = sqlx::query_as::<_, StravaConnection>(
            r#"
            INSERT INTO strava_connections (user_id, access_token, refresh_token, expires_at, athlete_id)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id)
            DO UPDATE SET
                access_token = EXCLUDED.access_token,
                refresh_token = EXCLUDED.refresh_token,
                expires_at = EXCLUDED.expires_at,
                athlete_id = EXCLUDED.athlete_id,
                updated_at = CURRENT_TIMESTAMP
            RETURNING user_id, access_token, refresh_token, expires_at, athlete_id, updated_at
            "#,
        )
        .bind(user_id)
        .bind(access_token)
        .bind(refresh_token)
        .bind(expires_at)
        .bind(athlete_id)
        .fetch_one(self.pool)
        .await?;

        Ok(connection)
    }

    pub async fn update_tokens(
        &self,
        user_id: Uuid,
        access_token: &str,
        refresh_token: &str,
        expires_at: i64,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE strava_connections
            SET access_token = $2,
                refresh_token = $3,
                expires_at = $4,
                updated_at = CURRENT_TIMESTAMP
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .bind(access_token)
        .bind(refresh_token)
        .bind(expires_at)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
