use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::{CategoryColor, EffortBand, ScheduledWorkoutDetail, WorkoutCategory};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScheduleWorkoutRequest {
    pub workout_id: Uuid,
    pub scheduled_date: NaiveDate,
}

/// Moves a scheduled workout to another date
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RescheduleRequest {
    pub scheduled_date: NaiveDate,
}

/// Actual performance recorded when a workout is marked as done
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CompleteWorkoutRequest {
    /// Trained time in minutes
    #[validate(range(min = 0, message = "Trained time must not be negative"))]
    pub trained_time: Option<i32>,

    /// Distance in kilometres
    #[validate(custom(function = "validate_distance"))]
    pub distance: Option<Decimal>,

    #[validate(length(max = 20))]
    pub pace: Option<String>,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,

    #[serde(default = "default_joy_rating")]
    #[validate(range(min = 1, max = 5, message = "Joy rating must be between 1 and 5"))]
    pub joy_rating: i16,
}

fn default_joy_rating() -> i16 {
    3
}

fn validate_distance(distance: &Decimal) -> Result<(), validator::ValidationError> {
    if distance.is_sign_negative() {
        Err(validator::ValidationError::new("negative_distance"))
    } else {
        Ok(())
    }
}

impl CompleteWorkoutRequest {
    /// Empty strings from form inputs are stored as missing values
    pub fn normalized(&self) -> Self {
        let non_empty = |s: &Option<String>| s.as_ref().filter(|v| !v.trim().is_empty()).cloned();
        Self {
            trained_time: self.trained_time,
            distance: self.distance,
            pace: non_empty(&self.pace),
            notes: non_empty(&self.notes),
            joy_rating: self.joy_rating,
        }
    }
}

#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct WeekQuery {
    /// Any day of the requested week; defaults to today
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScheduledWorkoutResponse {
    pub id: Uuid,
    pub scheduled_date: NaiveDate,
    pub completed: bool,
    pub trained_time: Option<i32>,
    pub distance: Option<Decimal>,
    pub pace: Option<String>,
    pub notes: Option<String>,
    pub joy_rating: Option<i16>,
    pub workout: ScheduledWorkoutSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScheduledWorkoutSummary {
    pub id: Uuid,
    pub name: String,
    pub category: WorkoutCategory,
    pub category_color: String,
    pub duration: Option<i32>,
    pub effort: Option<i16>,
    pub effort_color: Option<String>,
    pub description: Option<String>,
}

impl From<ScheduledWorkoutDetail> for ScheduledWorkoutResponse {
    fn from(detail: ScheduledWorkoutDetail) -> Self {
        Self {
            id: detail.id,
            scheduled_date: detail.scheduled_date,
            completed: detail.completed,
            trained_time: detail.trained_time,
            distance: detail.distance,
            pace: detail.pace,
            notes: detail.notes,
            joy_rating: detail.joy_rating,
            workout: ScheduledWorkoutSummary {
                id: detail.workout_id,
                name: detail.workout_name,
                category: detail.category,
                category_color: CategoryColor::from(detail.category).hex().to_string(),
                duration: detail.duration,
                effort: detail.effort,
                effort_color: detail
                    .effort
                    .map(|e| EffortBand::from_effort(e).css_color().to_string()),
                description: detail.description,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeekStats {
    pub completed: i64,
    /// Sum of trained time in minutes
    pub total_time: i64,
    /// Sum of distance in kilometres
    pub total_distance: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeekResponse {
    pub week_number: u32,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub stats: WeekStats,
    pub workouts: Vec<ScheduledWorkoutResponse>,
}

/// A completed workout on the yearly timeline
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TimelineEntry {
    pub scheduled_date: NaiveDate,
    pub category: WorkoutCategory,
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joy_rating_defaults_to_three() {
        let req: CompleteWorkoutRequest = serde_json::from_str(r#"{"trained_time": 45}"#).unwrap();
        assert_eq!(req.joy_rating, 3);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_joy_rating_range() {
        let req: CompleteWorkoutRequest = serde_json::from_str(r#"{"joy_rating": 6}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_negative_distance_rejected() {
        let req: CompleteWorkoutRequest = serde_json::from_str(r#"{"distance": "-1.5"}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_blank_text_fields_are_dropped() {
        let req: CompleteWorkoutRequest =
            serde_json::from_str(r#"{"pace": "  ", "notes": "Tungt i backarna"}"#).unwrap();
        let normalized = req.normalized();
        assert_eq!(normalized.pace, None);
        assert_eq!(normalized.notes.as_deref(), Some("Tungt i backarna"));
    }
}
