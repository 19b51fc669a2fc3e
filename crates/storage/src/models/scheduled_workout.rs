use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::WorkoutCategory;

/// A workout template placed on a calendar date
///
/// The actual-performance fields are only set once the workout is completed,
/// and are cleared again when it is marked as not done.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ScheduledWorkout {
    pub id: Uuid,
    pub user_id: Uuid,
    pub workout_id: Uuid,
    pub scheduled_date: NaiveDate,
    pub completed: bool,
    /// Trained time in minutes
    pub trained_time: Option<i32>,
    /// Distance in kilometres
    pub distance: Option<Decimal>,
    pub pace: Option<String>,
    pub notes: Option<String>,
    pub joy_rating: Option<i16>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// Scheduled workout joined with its library template
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ScheduledWorkoutDetail {
    pub id: Uuid,
    pub workout_id: Uuid,
    pub scheduled_date: NaiveDate,
    pub completed: bool,
    pub trained_time: Option<i32>,
    pub distance: Option<Decimal>,
    pub pace: Option<String>,
    pub notes: Option<String>,
    pub joy_rating: Option<i16>,
    pub workout_name: String,
    pub category: WorkoutCategory,
    pub duration: Option<i32>,
    pub effort: Option<i16>,
    pub description: Option<String>,
}
