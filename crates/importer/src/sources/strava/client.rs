use chrono::NaiveDate;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

use super::models::{ActivitySummary, StravaActivity, TokenRequest, TokenResponse};
use crate::error::{ImporterError, Result};

const DEFAULT_BASE_URL: &str = "https://www.strava.com";

#[derive(Debug, Clone)]
pub struct StravaConfig {
    pub client_id: String,
    pub client_secret: String,
    pub base_url: String,
}

impl StravaConfig {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Reads `STRAVA_CLIENT_ID` and `STRAVA_CLIENT_SECRET`
    pub fn from_env() -> Result<Self> {
        let client_id = std::env::var("STRAVA_CLIENT_ID").ok().filter(|v| !v.is_empty());
        let client_secret = std::env::var("STRAVA_CLIENT_SECRET").ok().filter(|v| !v.is_empty());

        match (client_id, client_secret) {
            (Some(id), Some(secret)) => Ok(Self::new(id, secret)),
            _ => Err(ImporterError::ConfigError(
                "Strava credentials not configured".to_string(),
            )),
        }
    }
}

/// Client for Strava's OAuth token endpoint and activity API
pub struct StravaClient {
    config: StravaConfig,
    client: Client,
}

impl StravaClient {
    pub fn new(config: StravaConfig) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self { config, client })
    }

    /// Exchange an authorization code for tokens and the athlete profile
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse> {
        self.request_token(TokenRequest {
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
            grant_type: "authorization_code",
            code: Some(code),
            refresh_token: None,
        })
        .await
    }

    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenResponse> {
        self.request_token(TokenRequest {
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
            grant_type: "refresh_token",
            code: None,
            refresh_token: Some(refresh_token),
        })
        .await
    }

    async fn request_token(&self, body: TokenRequest<'_>) -> Result<TokenResponse> {
        let url = format!("{}/oauth/token", self.config.base_url);
        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!("Strava token request ({}) failed: {} - {}", body.grant_type, status, text);
            return Err(ImporterError::StravaError(format!(
                "Token request failed with status {}: {}",
                status, text
            )));
        }

        Ok(response.json::<TokenResponse>().await?)
    }

    /// Activities started on `date` (UTC day), optionally of one type only
    pub async fn list_activities(
        &self,
        access_token: &str,
        date: NaiveDate,
        activity_type: Option<&str>,
    ) -> Result<Vec<ActivitySummary>> {
        let (after, before) = day_bounds_utc(date);
        let url = format!("{}/api/v3/athlete/activities", self.config.base_url);

        debug!("Fetching Strava activities between {} and {}", after, before);

        let response = self
            .client
            .get(&url)
            .bearer_auth(access_token)
            .query(&[("after", after), ("before", before)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!("Failed to fetch Strava activities: {} - {}", status, text);
            return Err(ImporterError::StravaError(format!(
                "Activity request failed with status {}: {}",
                status, text
            )));
        }

        let activities = response.json::<Vec<StravaActivity>>().await?;
        debug!("Found {} activities", activities.len());

        Ok(filter_activities(activities, activity_type))
    }
}

/// First and last second of `date` in UTC, as Unix timestamps
pub fn day_bounds_utc(date: NaiveDate) -> (i64, i64) {
    let start = date.and_time(chrono::NaiveTime::MIN).and_utc().timestamp();
    (start, start + 86_399)
}

pub fn filter_activities(
    activities: Vec<StravaActivity>,
    activity_type: Option<&str>,
) -> Vec<ActivitySummary> {
    activities
        .into_iter()
        .filter(|a| activity_type.is_none_or(|t| a.activity_type == t))
        .map(ActivitySummary::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn sample_activities() -> Vec<StravaActivity> {
        serde_json::from_str(
            r#"[
                {"id": 1, "name": "Morgonlöpning", "distance": 10512.3, "moving_time": 3120,
                 "start_date_local": "2025-03-12T07:02:11Z", "type": "Run", "average_speed": 3.37},
                {"id": 2, "name": "Pendling", "distance": 8200.0, "moving_time": 1500,
                 "start_date_local": "2025-03-12T16:40:00Z", "type": "Ride"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_day_bounds_cover_whole_utc_day() {
        let (after, before) = day_bounds_utc(NaiveDate::from_ymd_opt(2025, 3, 12).unwrap());
        assert_eq!(after, 1_741_737_600);
        assert_eq!(before - after, 86_399);
    }

    #[test]
    fn test_filter_by_activity_type() {
        let runs = filter_activities(sample_activities(), Some("Run"));
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].name, "Morgonlöpning");

        let all = filter_activities(sample_activities(), None);
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_distance_converted_to_km() {
        let runs = filter_activities(sample_activities(), Some("Run"));
        assert_eq!(runs[0].distance_km, Decimal::new(1051, 2));
        assert_eq!(runs[0].moving_time, 3120);
        assert_eq!(runs[0].start_date, "2025-03-12T07:02:11Z");
    }

    #[test]
    fn test_token_response_without_athlete() {
        let token: TokenResponse = serde_json::from_str(
            r#"{"access_token": "a", "refresh_token": "r", "expires_at": 1741740000, "token_type": "Bearer"}"#,
        )
        .unwrap();
        assert!(token.athlete.is_none());
        assert_eq!(token.expires_at, 1_741_740_000);
    }

    #[tokio::test]
    #[ignore] // Needs STRAVA_CLIENT_ID/STRAVA_CLIENT_SECRET and network access
    async fn test_refresh_with_invalid_token_fails() {
        let client = StravaClient::new(StravaConfig::from_env().unwrap()).unwrap();
        assert!(client.refresh("invalid").await.is_err());
    }
}
