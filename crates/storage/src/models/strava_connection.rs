use chrono::NaiveDateTime;
use sqlx::FromRow;
use uuid::Uuid;

/// OAuth tokens linking a user to a Strava athlete
///
/// `expires_at` is the Unix timestamp returned by Strava's token endpoint.
#[derive(Debug, Clone, FromRow)]
pub struct StravaConnection {
    pub user_id: Uuid,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: i64,
    pub athlete_id: i64,
    pub updated_at: NaiveDateTime,
}

impl StravaConnection {
    pub fn is_expired(&self, now_unix: i64) -> bool {
        self.expires_at < now_unix
    }
}
