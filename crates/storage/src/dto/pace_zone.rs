use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{PaceZoneSet, PaceZones};

/// 5K race time submitted for a zone calculation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComputeZonesRequest {
    pub minutes: i64,
    pub seconds: i64,
}

/// Zone paces as `M:SS` per kilometre
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ZonePaces {
    pub one_k: String,
    pub five_k: String,
    pub ten_k: String,
    pub half_marathon: String,
    pub marathon: String,
    pub easy: String,
    pub interval: String,
    pub threshold: String,
    pub tempo: String,
    pub long_run: String,
}

impl From<PaceZones> for ZonePaces {
    fn from(zones: PaceZones) -> Self {
        Self {
            one_k: zones.pace_1k,
            five_k: zones.pace_5k,
            ten_k: zones.pace_10k,
            half_marathon: zones.pace_half_marathon,
            marathon: zones.pace_marathon,
            easy: zones.pace_easy,
            interval: zones.pace_interval,
            threshold: zones.pace_threshold,
            tempo: zones.pace_tempo,
            long_run: zones.pace_long_run,
        }
    }
}

/// Result of a zone calculation
///
/// `saved` reports whether the zone set was stored; the paces are valid
/// either way.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComputeZonesResponse {
    pub vdot_score: i32,
    pub time_5k_seconds: i32,
    pub paces: ZonePaces,
    pub saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_error: Option<String>,
}

/// A stored zone set from the user's history
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaceZoneSetResponse {
    pub id: Uuid,
    pub vdot_score: i32,
    pub time_5k_seconds: i32,
    pub paces: ZonePaces,
    pub created_at: NaiveDateTime,
}

impl From<PaceZoneSet> for PaceZoneSetResponse {
    fn from(set: PaceZoneSet) -> Self {
        Self {
            paces: set.zones().into(),
            id: set.id,
            vdot_score: set.vdot_score,
            time_5k_seconds: set.time_5k,
            created_at: set.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::pace_zones::compute_zones;

    #[test]
    fn test_response_uses_camel_case_keys() {
        let computed = compute_zones(20, 0).unwrap();
        let response = ComputeZonesResponse {
            vdot_score: computed.vdot_score,
            time_5k_seconds: computed.time_5k_seconds,
            paces: computed.zones.into(),
            saved: true,
            save_error: None,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["time5kSeconds"], 1200);
        assert_eq!(json["paces"]["oneK"], "3:45");
        assert_eq!(json["paces"]["fiveK"], "4:00");
        assert_eq!(json["paces"]["halfMarathon"], "4:21");
        assert_eq!(json["paces"]["longRun"], "5:16");
        assert!(json.get("saveError").is_none());
    }
}
