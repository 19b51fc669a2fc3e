use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::PaceZoneSet;
use crate::services::pace_zones::ComputedZones;

const PACE_ZONE_COLUMNS: &str = r#"
    id, user_id, vdot_score, time_5k,
    pace_1k, pace_5k, pace_10k, pace_half_marathon, pace_marathon,
    pace_easy, pace_interval, pace_threshold, pace_tempo, pace_long_run,
    created_at, updated_at
"#;

pub struct PaceZoneRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PaceZoneRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Append a new zone set; `created_at` is assigned by the database
    pub async fn insert(&self, user_id: Uuid, computed: &ComputedZones) -> Result<PaceZoneSet> {
        let zones = &computed.zones;
        let query = format!(
            r#"
            INSERT INTO pace_zones (
                user_id, vdot_score, time_5k,
                pace_1k, pace_5k, pace_10k, pace_half_marathon, pace_marathon,
                pace_easy, pace_interval, pace_threshold, pace_tempo, pace_long_run
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {PACE_ZONE_COLUMNS}
            "#
        );

        let set = sqlx::query_as::<_, PaceZoneSet>(&query)
            .bind(user_id)
            .bind(computed.vdot_score)
            .bind(computed.time_5k_seconds)
            .bind(&zones.pace_1k)
            .bind(&zones.pace_5k)
            .bind(&zones.pace_10k)
            .bind(&zones.pace_half_marathon)
            .bind(&zones.pace_marathon)
            .bind(&zones.pace_easy)
            .bind(&zones.pace_interval)
            .bind(&zones.pace_threshold)
            .bind(&zones.pace_tempo)
            .bind(&zones.pace_long_run)
            .fetch_one(self.pool)
            .await?;

        Ok(set)
    }

    /// Most recently created zone set for the user
    pub async fn latest_for_user(&self, user_id: Uuid) -> Result<Option<PaceZoneSet>> {
        let query = format!(
            r#"
            SELECT {PACE_ZONE_COLUMNS}
            FROM pace_zones
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            "#
        );

        let set = sqlx::query_as::<_, PaceZoneSet>(&query)
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?;

        Ok(set)
    }

    pub async fn list_for_user(&self, user_id: Uuid, limit: i64, offset: i64) -> Result<Vec<PaceZoneSet>> {
        let query = format!(
            r#"
            SELECT {PACE_ZONE_COLUMNS}
            FROM pace_zones
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#
        );

        let sets = sqlx::query_as::<_, PaceZoneSet>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool)
            .await?;

        Ok(sets)
    }

    pub async fn count_for_user(&self, user_id: Uuid) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pace_zones WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
