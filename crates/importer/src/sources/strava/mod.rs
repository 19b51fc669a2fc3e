pub mod client;
pub mod models;

pub use client::{StravaClient, StravaConfig};
pub use models::{ActivitySummary, StravaAthlete, TokenResponse};

use chrono::NaiveDate;
use storage::models::StravaConnection;
use storage::repository::strava_connection::StravaConnectionRepository;
use tracing::info;
use uuid::Uuid;

use crate::error::{ImporterError, Result};
use crate::traits::{ActivityImporter, ImportContext};

pub struct StravaImporter {
    client: StravaClient,
}

impl StravaImporter {
    pub fn new(client: StravaClient) -> Self {
        Self { client }
    }

    /// Completes the OAuth flow and stores the tokens for `user_id`
    pub async fn connect(
        &self,
        user_id: Uuid,
        code: &str,
        context: &ImportContext,
    ) -> Result<StravaAthlete> {
        let token = self.client.exchange_code(code).await?;
        let athlete = token.athlete.ok_or_else(|| {
            ImporterError::StravaError("Token response is missing the athlete".to_string())
        })?;

        let repo = StravaConnectionRepository::new(&context.pool);
        repo.upsert(
            user_id,
            &token.access_token,
            &token.refresh_token,
            token.expires_at,
            athlete.id,
        )
        .await?;

        info!(user_id = %user_id, athlete_id = athlete.id, "Connected Strava athlete");

        Ok(athlete)
    }

    /// Current access token, refreshing and persisting it first if it has expired
    async fn access_token(&self, user_id: Uuid, context: &ImportContext) -> Result<String> {
        let repo = StravaConnectionRepository::new(&context.pool);
        let connection: StravaConnection =
            repo.find(user_id).await?.ok_or(ImporterError::NotConnected)?;

        if !connection.is_expired(chrono::Utc::now().timestamp()) {
            return Ok(connection.access_token);
        }

        info!(user_id = %user_id, "Refreshing expired Strava token");
        let token = self.client.refresh(&connection.refresh_token).await?;
        repo.update_tokens(
            user_id,
            &token.access_token,
            &token.refresh_token,
            token.expires_at,
        )
        .await?;

        Ok(token.access_token)
    }
}

#[async_trait::async_trait]
impl ActivityImporter for StravaImporter {
    async fn activities_for_day(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        activity_type: Option<&str>,
        context: &ImportContext,
    ) -> Result<Vec<ActivitySummary>> {
        let access_token = self.access_token(user_id, context).await?;
        self.client
            .list_activities(&access_token, date, activity_type)
            .await
    }

    fn name(&self) -> &'static str {
        "strava"
    }
}
