use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::Result;
use crate::sources::strava::ActivitySummary;

pub struct ImportContext {
    pub pool: PgPool,
}

/// A source of completed activities for a user and a calendar day
#[async_trait::async_trait]
pub trait ActivityImporter: Send + Sync {
    async fn activities_for_day(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        activity_type: Option<&str>,
        context: &ImportContext,
    ) -> Result<Vec<ActivitySummary>>;

    fn name(&self) -> &'static str;
}
