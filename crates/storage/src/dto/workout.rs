use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::{CategoryColor, EffortBand, WorkoutCategory, WorkoutTemplate};

/// Library workout with its display colours
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutResponse {
    pub id: Uuid,
    pub name: String,
    pub category: WorkoutCategory,
    pub category_color: String,
    pub duration: Option<i32>,
    pub pace: Option<String>,
    pub effort: Option<i16>,
    pub effort_color: Option<String>,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<WorkoutTemplate> for WorkoutResponse {
    fn from(workout: WorkoutTemplate) -> Self {
        Self {
            id: workout.id,
            name: workout.name,
            category: workout.category,
            category_color: CategoryColor::from(workout.category).hex().to_string(),
            duration: workout.duration,
            pace: workout.pace,
            effort: workout.effort,
            effort_color: workout
                .effort
                .map(|e| EffortBand::from_effort(e).css_color().to_string()),
            description: workout.description,
            created_at: workout.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct WorkoutListQuery {
    pub category: Option<WorkoutCategory>,
}

/// Request payload for creating a library workout
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateWorkoutRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    pub category: WorkoutCategory,

    #[validate(range(min = 0, message = "Duration must not be negative"))]
    pub duration: Option<i32>,

    #[validate(length(max = 20))]
    pub pace: Option<String>,

    #[validate(range(min = 1, max = 10, message = "Effort must be between 1 and 10"))]
    pub effort: Option<i16>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

/// Request payload for updating a library workout
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateWorkoutRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub category: Option<WorkoutCategory>,

    #[validate(range(min = 0))]
    pub duration: Option<i32>,

    #[validate(length(max = 20))]
    pub pace: Option<String>,

    #[validate(range(min = 1, max = 10, message = "Effort must be between 1 and 10"))]
    pub effort: Option<i16>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(effort: Option<i16>) -> CreateWorkoutRequest {
        CreateWorkoutRequest {
            name: "5x1000m".to_string(),
            category: WorkoutCategory::Interval,
            duration: Some(45),
            pace: Some("3:50".to_string()),
            effort,
            description: None,
        }
    }

    #[test]
    fn test_effort_must_be_between_one_and_ten() {
        assert!(create_request(Some(1)).validate().is_ok());
        assert!(create_request(Some(10)).validate().is_ok());
        assert!(create_request(None).validate().is_ok());
        assert!(create_request(Some(0)).validate().is_err());
        assert!(create_request(Some(11)).validate().is_err());
    }

    #[test]
    fn test_name_is_required() {
        let mut req = create_request(Some(5));
        req.name = String::new();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_response_carries_colours() {
        let workout = WorkoutTemplate {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Långt lugnt".to_string(),
            category: WorkoutCategory::LongRun,
            duration: Some(90),
            pace: None,
            effort: Some(3),
            description: None,
            created_at: chrono::Utc::now().naive_utc(),
        };

        let response = WorkoutResponse::from(workout);
        assert_eq!(response.category_color, "#7AA6DB");
        assert_eq!(response.effort_color.as_deref(), Some("hsl(var(--chart-2))"));
    }
}
