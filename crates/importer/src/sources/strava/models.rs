use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize)]
pub(crate) struct TokenRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub grant_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<&'a str>,
}

/// Response of Strava's `/oauth/token` endpoint
///
/// `athlete` is only present on the initial code exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: i64,
    #[serde(default)]
    pub athlete: Option<StravaAthlete>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StravaAthlete {
    pub id: i64,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StravaActivity {
    pub id: i64,
    pub name: String,
    /// Metres
    pub distance: f64,
    /// Seconds
    pub moving_time: i64,
    pub start_date_local: String,
    #[serde(rename = "type")]
    pub activity_type: String,
}

/// Activity as offered for filling in a completed workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActivitySummary {
    pub id: i64,
    pub name: String,
    /// Kilometres, two decimals
    pub distance_km: Decimal,
    /// Seconds
    pub moving_time: i64,
    pub start_date: String,
    pub activity_type: String,
}

impl From<StravaActivity> for ActivitySummary {
    fn from(activity: StravaActivity) -> Self {
        let distance_km = Decimal::from_f64(activity.distance / 1000.0)
            .unwrap_or_default()
            .round_dp(2);

        Self {
            id: activity.id,
            name: activity.name,
            distance_km,
            moving_time: activity.moving_time,
            start_date: activity.start_date_local,
            activity_type: activity.activity_type,
        }
    }
}
