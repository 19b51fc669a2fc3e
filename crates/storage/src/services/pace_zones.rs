use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Pace, PaceZoneSet, PaceZones, Zone};
use crate::repository::pace_zone::PaceZoneRepository;

/// Distance of the reference race, in metres
const REFERENCE_DISTANCE_M: f64 = 5000.0;

// Jack Daniels' oxygen cost of running: VO2 = C + B·v + A·v²
const DANIELS_A: f64 = 0.000_104;
const DANIELS_B: f64 = 0.182_258;
const DANIELS_C: f64 = -4.60;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaceError {
    #[error("invalid time")]
    InvalidTime,
}

/// A validated 5K race time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaceTime {
    total_seconds: i32,
}

impl RaceTime {
    /// Accepts `minutes >= 1` and `seconds` in `0..=59`.
    ///
    /// A zero-minute time is rejected even with seconds supplied.
    pub fn new(minutes: i64, seconds: i64) -> std::result::Result<Self, PaceError> {
        if minutes < 1 || !(0..=59).contains(&seconds) {
            return Err(PaceError::InvalidTime);
        }

        let total = minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(seconds))
            .ok_or(PaceError::InvalidTime)?;
        let total_seconds = i32::try_from(total).map_err(|_| PaceError::InvalidTime)?;

        Ok(Self { total_seconds })
    }

    pub fn total_seconds(&self) -> i32 {
        self.total_seconds
    }

    /// Pace actually run over the 5K, seconds per kilometre
    pub fn base_pace(&self) -> Pace {
        Pace::for_zone(self.total_seconds, Zone::FiveK)
    }

    pub fn pace(&self, zone: Zone) -> Pace {
        Pace::for_zone(self.total_seconds, zone)
    }
}

/// Result of a zone calculation, before it is persisted
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedZones {
    pub vdot_score: i32,
    pub time_5k_seconds: i32,
    pub zones: PaceZones,
}

/// Raw VDOT for a 5K run in `total_seconds`.
///
/// Descriptive only: the pace table never depends on it.
pub fn vdot(total_seconds: i32) -> f64 {
    let total = f64::from(total_seconds);
    let velocity = REFERENCE_DISTANCE_M / (total / 60.0);
    let vo2 = (DANIELS_A * velocity).mul_add(velocity, DANIELS_B.mul_add(velocity, DANIELS_C));
    let percent_max = 0.8
        + 0.189_439_3 * (-0.012_778 * total).exp()
        + 0.298_955_8 * (-0.193_260_5 * total).exp();

    vo2 / percent_max
}

pub fn zones_for(race_time: &RaceTime) -> PaceZones {
    let fmt = |zone| race_time.pace(zone).to_string();

    PaceZones {
        pace_1k: fmt(Zone::OneK),
        pace_5k: fmt(Zone::FiveK),
        pace_10k: fmt(Zone::TenK),
        pace_half_marathon: fmt(Zone::HalfMarathon),
        pace_marathon: fmt(Zone::Marathon),
        pace_easy: fmt(Zone::Easy),
        pace_interval: fmt(Zone::Interval),
        pace_threshold: fmt(Zone::Threshold),
        pace_tempo: fmt(Zone::Tempo),
        pace_long_run: fmt(Zone::LongRun),
    }
}

/// Rounded VDOT score, never below 1.
///
/// The oxygen-cost term turns negative for very slow times (about 199:00 and
/// beyond), so the score bottoms out at 1.
pub fn vdot_score(total_seconds: i32) -> i32 {
    (vdot(total_seconds).round() as i32).max(1)
}

/// Derives the VDOT score and the ten training paces from a 5K time.
pub fn compute_zones(minutes: i64, seconds: i64) -> std::result::Result<ComputedZones, PaceError> {
    let race_time = RaceTime::new(minutes, seconds)?;

    Ok(ComputedZones {
        vdot_score: vdot_score(race_time.total_seconds()),
        time_5k_seconds: race_time.total_seconds(),
        zones: zones_for(&race_time),
    })
}

/// A calculation together with the outcome of saving it.
///
/// The calculation stands on its own: a failed save does not discard it.
#[derive(Debug)]
pub struct ZoneOutcome {
    pub computed: ComputedZones,
    pub saved: Result<PaceZoneSet>,
}

/// Computes zones and appends them to the user's history.
///
/// Invalid input is rejected before anything is written.
pub async fn compute_and_store_zones(
    pool: &PgPool,
    user_id: Uuid,
    minutes: i64,
    seconds: i64,
) -> std::result::Result<ZoneOutcome, PaceError> {
    let computed = compute_zones(minutes, seconds)?;

    let repo = PaceZoneRepository::new(pool);
    let saved = repo.insert(user_id, &computed).await;

    match &saved {
        Ok(set) => tracing::info!(
            user_id = %user_id,
            zone_set_id = %set.id,
            vdot = computed.vdot_score,
            "Stored pace zones"
        ),
        Err(e) => tracing::warn!(user_id = %user_id, error = %e, "Failed to store pace zones"),
    }

    Ok(ZoneOutcome { computed, saved })
}

pub async fn get_current_zones(pool: &PgPool, user_id: Uuid) -> Result<PaceZoneSet> {
    let repo = PaceZoneRepository::new(pool);
    repo.latest_for_user(user_id)
        .await?
        .ok_or(StorageError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seconds_of(formatted: &str) -> u32 {
        let (m, s) = formatted.split_once(':').unwrap();
        m.parse::<u32>().unwrap() * 60 + s.parse::<u32>().unwrap()
    }

    #[test]
    fn test_twenty_minute_5k() {
        let result = compute_zones(20, 0).unwrap();

        assert_eq!(result.time_5k_seconds, 1200);
        assert_eq!(result.zones.pace_5k, "4:00");
        assert_eq!(result.zones.pace_1k, "3:45");
        assert_eq!(result.zones.pace_interval, "3:50");
        assert_eq!(result.zones.pace_threshold, "4:07");
        assert_eq!(result.zones.pace_10k, "4:09");
        assert_eq!(result.zones.pace_tempo, "4:14");
        assert_eq!(result.zones.pace_half_marathon, "4:21");
        assert_eq!(result.zones.pace_marathon, "4:36");
        assert_eq!(result.zones.pace_easy, "4:52");
        assert_eq!(result.zones.pace_long_run, "5:16");
    }

    #[test]
    fn test_twenty_five_thirty_5k() {
        let result = compute_zones(25, 30).unwrap();

        assert_eq!(result.time_5k_seconds, 1530);
        assert_eq!(result.zones.pace_5k, "5:06");
        assert_eq!(result.zones.pace_10k, "5:18");
    }

    #[test]
    fn test_vdot_score() {
        assert_eq!(compute_zones(20, 0).unwrap().vdot_score, 59);
        assert!(vdot(1200) > vdot(1500));
        assert!(vdot(1500) > vdot(1800));
    }

    #[test]
    fn test_vdot_score_stays_positive_for_slow_times() {
        assert_eq!(compute_zones(100, 0).unwrap().vdot_score, 6);
        assert!(vdot(199 * 60) < 0.5);
        for minutes in [199, 250, 600, 10_000] {
            assert_eq!(compute_zones(minutes, 0).unwrap().vdot_score, 1, "{minutes}:00");
        }
        for total in 60..=20_000 {
            assert!(vdot_score(total) >= 1, "{total}");
        }
    }

    #[test]
    fn test_rejects_invalid_times() {
        assert_eq!(compute_zones(0, 0), Err(PaceError::InvalidTime));
        assert_eq!(compute_zones(0, 30), Err(PaceError::InvalidTime));
        assert_eq!(compute_zones(20, 60), Err(PaceError::InvalidTime));
        assert_eq!(compute_zones(20, -1), Err(PaceError::InvalidTime));
        assert_eq!(compute_zones(-5, 10), Err(PaceError::InvalidTime));
        assert_eq!(compute_zones(i64::MAX, 0), Err(PaceError::InvalidTime));
        assert_eq!(PaceError::InvalidTime.to_string(), "invalid time");
    }

    #[test]
    fn test_accepts_boundary_times() {
        assert!(compute_zones(1, 0).is_ok());
        assert!(compute_zones(1, 59).is_ok());
        assert!(compute_zones(20, 59).is_ok());
    }

    #[test]
    fn test_same_input_same_output() {
        assert_eq!(compute_zones(22, 17), compute_zones(22, 17));
    }

    #[test]
    fn test_paces_strictly_ordered_for_all_valid_times() {
        for minutes in 1..=90 {
            for seconds in 0..60 {
                let race_time = RaceTime::new(minutes, seconds).unwrap();
                let paces: Vec<f64> = Zone::ALL
                    .iter()
                    .map(|&zone| race_time.pace(zone).seconds_per_km())
                    .collect();

                assert!(
                    paces.windows(2).all(|w| w[0] < w[1]),
                    "{minutes}:{seconds:02} -> {paces:?}"
                );
            }
        }
    }

    #[test]
    fn test_formatted_paces_strictly_ordered_for_realistic_times() {
        // From 8:20 the base pace is at least 100 s/km, so a one percent gap
        // is at least one whole second.
        for total in 500..=3600 {
            let result = compute_zones(i64::from(total / 60), i64::from(total % 60)).unwrap();
            let seconds: Vec<u32> = Zone::ALL
                .iter()
                .map(|&zone| seconds_of(result.zones.get(zone)))
                .collect();

            assert!(seconds.windows(2).all(|w| w[0] < w[1]), "{total}: {seconds:?}");
        }
    }

    #[test]
    fn test_5k_zone_reproduces_input_pace() {
        for total in 60..=3600 {
            let result = compute_zones(i64::from(total / 60), i64::from(total % 60)).unwrap();
            assert_eq!(
                result.zones.pace_5k,
                crate::models::format_pace(f64::from(total) / 5.0)
            );
        }
    }
}
