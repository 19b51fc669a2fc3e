use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::WorkoutCategory;

/// A reusable workout in a user's library
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkoutTemplate {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub category: WorkoutCategory,
    /// Planned duration in minutes
    pub duration: Option<i32>,
    pub pace: Option<String>,
    pub effort: Option<i16>,
    pub description: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
