use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

/// Training and race zones derived from a 5K reference pace.
///
/// Every zone is a fixed percentage of the pace actually run over the 5K:
/// zones below 100 are run faster than the reference, zones above it slower.
/// `Zone::ALL` lists them fastest first, and that order must hold for any
/// set of percentages assigned here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    OneK,
    Interval,
    FiveK,
    Threshold,
    TenK,
    Tempo,
    HalfMarathon,
    Marathon,
    Easy,
    LongRun,
}

impl Zone {
    pub const ALL: [Zone; 10] = [
        Zone::OneK,
        Zone::Interval,
        Zone::FiveK,
        Zone::Threshold,
        Zone::TenK,
        Zone::Tempo,
        Zone::HalfMarathon,
        Zone::Marathon,
        Zone::Easy,
        Zone::LongRun,
    ];

    /// Pace multiplier in percent of the 5K reference pace
    pub const fn percent(self) -> u32 {
        match self {
            Zone::OneK => 94,
            Zone::Interval => 96,
            Zone::FiveK => 100,
            Zone::Threshold => 103,
            Zone::TenK => 104,
            Zone::Tempo => 106,
            Zone::HalfMarathon => 109,
            Zone::Marathon => 115,
            Zone::Easy => 122,
            Zone::LongRun => 132,
        }
    }

    pub fn multiplier(self) -> f64 {
        f64::from(self.percent()) / 100.0
    }

    pub fn label(self) -> &'static str {
        match self {
            Zone::OneK => "1K",
            Zone::Interval => "Interval",
            Zone::FiveK => "5K",
            Zone::Threshold => "Threshold",
            Zone::TenK => "10K",
            Zone::Tempo => "Tempo",
            Zone::HalfMarathon => "Half marathon",
            Zone::Marathon => "Marathon",
            Zone::Easy => "Easy",
            Zone::LongRun => "Long run",
        }
    }
}

/// Time needed to cover one kilometre, in seconds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Pace(f64);

impl Pace {
    pub fn from_seconds_per_km(seconds: f64) -> Self {
        Self(seconds.max(0.0))
    }

    /// Pace of `zone` for a 5K run in `total_seconds`.
    ///
    /// Computed as the exact ratio `total * percent / 500` so that whole-second
    /// results never land a hair below the integer.
    pub fn for_zone(total_seconds: i32, zone: Zone) -> Self {
        let numerator = i64::from(total_seconds) * i64::from(zone.percent());
        Self::from_seconds_per_km(numerator as f64 / 500.0)
    }

    pub fn seconds_per_km(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_pace(self.0))
    }
}

/// Formats seconds per kilometre as `M:SS`, truncating fractional seconds.
pub fn format_pace(seconds_per_km: f64) -> String {
    let seconds_per_km = seconds_per_km.max(0.0);
    let minutes = (seconds_per_km / 60.0).floor() as u64;
    let seconds = (seconds_per_km % 60.0).floor() as u64;
    format!("{}:{:02}", minutes, seconds)
}

/// The ten formatted zone paces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaceZones {
    pub pace_1k: String,
    pub pace_5k: String,
    pub pace_10k: String,
    pub pace_half_marathon: String,
    pub pace_marathon: String,
    pub pace_easy: String,
    pub pace_interval: String,
    pub pace_threshold: String,
    pub pace_tempo: String,
    pub pace_long_run: String,
}

impl PaceZones {
    pub fn get(&self, zone: Zone) -> &str {
        match zone {
            Zone::OneK => &self.pace_1k,
            Zone::Interval => &self.pace_interval,
            Zone::FiveK => &self.pace_5k,
            Zone::Threshold => &self.pace_threshold,
            Zone::TenK => &self.pace_10k,
            Zone::Tempo => &self.pace_tempo,
            Zone::HalfMarathon => &self.pace_half_marathon,
            Zone::Marathon => &self.pace_marathon,
            Zone::Easy => &self.pace_easy,
            Zone::LongRun => &self.pace_long_run,
        }
    }
}

/// Stored pace zone set
///
/// Rows are append-only: a new calculation inserts a new row, and the most
/// recently created row for a user is that user's current zone set.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PaceZoneSet {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vdot_score: i32,
    pub time_5k: i32,
    pub pace_1k: String,
    pub pace_5k: String,
    pub pace_10k: String,
    pub pace_half_marathon: String,
    pub pace_marathon: String,
    pub pace_easy: String,
    pub pace_interval: String,
    pub pace_threshold: String,
    pub pace_tempo: String,
    pub pace_long_run: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl PaceZoneSet {
    pub fn zones(&self) -> PaceZones {
        PaceZones {
            pace_1k: self.pace_1k.clone(),
            pace_5k: self.pace_5k.clone(),
            pace_10k: self.pace_10k.clone(),
            pace_half_marathon: self.pace_half_marathon.clone(),
            pace_marathon: self.pace_marathon.clone(),
            pace_easy: self.pace_easy.clone(),
            pace_interval: self.pace_interval.clone(),
            pace_threshold: self.pace_threshold.clone(),
            pace_tempo: self.pace_tempo.clone(),
            pace_long_run: self.pace_long_run.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_order_is_fastest_first() {
        let percents: Vec<u32> = Zone::ALL.iter().map(|z| z.percent()).collect();
        assert!(percents.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Zone::FiveK.percent(), 100);
    }

    #[test]
    fn test_format_pace_truncates_seconds() {
        assert_eq!(format_pace(240.0), "4:00");
        assert_eq!(format_pace(225.6), "3:45");
        assert_eq!(format_pace(316.8), "5:16");
        assert_eq!(format_pace(59.99), "0:59");
        assert_eq!(format_pace(0.0), "0:00");
        assert_eq!(format_pace(3600.0), "60:00");
    }

    #[test]
    fn test_format_pace_shape() {
        let mut s = 0.0;
        while s < 1500.0 {
            let formatted = format_pace(s);
            let (minutes, seconds) = formatted.split_once(':').unwrap();
            assert!(!minutes.is_empty() && minutes.chars().all(|c| c.is_ascii_digit()));
            assert_eq!(seconds.len(), 2, "{formatted}");
            let seconds: u32 = seconds.parse().unwrap();
            assert!(seconds <= 59, "{formatted}");
            s += 0.37;
        }
    }

    #[test]
    fn test_pace_for_zone_is_exact_on_whole_seconds() {
        // 1200 * 115 / 500 = 276 exactly
        assert_eq!(Pace::for_zone(1200, Zone::Marathon).to_string(), "4:36");
        assert_eq!(Pace::for_zone(1530, Zone::TenK).to_string(), "5:18");
    }
}
