use utoipa::OpenApi;

use crate::features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::health::handlers::health,
        features::pace_zones::handlers::compute_zones,
        features::pace_zones::handlers::get_current_zones,
        features::pace_zones::handlers::list_zone_history,
        features::workouts::handlers::list_workouts,
        features::workouts::handlers::get_workout,
        features::workouts::handlers::create_workout,
        features::workouts::handlers::update_workout,
        features::workouts::handlers::delete_workout,
        features::schedule::handlers::schedule_workout,
        features::schedule::handlers::get_week,
        features::schedule::handlers::reschedule,
        features::schedule::handlers::complete,
        features::schedule::handlers::uncomplete,
        features::schedule::handlers::unschedule,
        features::schedule::handlers::get_year_timeline,
        features::profile::handlers::get_profile,
        features::profile::handlers::update_profile,
        features::strava::handlers::connect,
        features::strava::handlers::list_activities,
    ),
    components(
        schemas(
            features::health::handlers::HealthResponse,
            storage::dto::pace_zone::ComputeZonesRequest,
            storage::dto::pace_zone::ComputeZonesResponse,
            storage::dto::pace_zone::PaceZoneSetResponse,
            storage::dto::pace_zone::ZonePaces,
            storage::dto::common::PaginationMeta,
            storage::dto::workout::WorkoutResponse,
            storage::dto::workout::CreateWorkoutRequest,
            storage::dto::workout::UpdateWorkoutRequest,
            storage::dto::schedule::ScheduleWorkoutRequest,
            storage::dto::schedule::RescheduleRequest,
            storage::dto::schedule::CompleteWorkoutRequest,
            storage::dto::schedule::ScheduledWorkoutResponse,
            storage::dto::schedule::ScheduledWorkoutSummary,
            storage::dto::schedule::WeekStats,
            storage::dto::schedule::WeekResponse,
            storage::dto::schedule::TimelineEntry,
            storage::dto::profile::ProfileResponse,
            storage::dto::profile::UpdateProfileRequest,
            storage::models::ScheduledWorkout,
            storage::models::WorkoutCategory,
            storage::models::EffortBand,
            features::strava::handlers::ConnectStravaRequest,
            features::strava::handlers::ActivitiesRequest,
            importer::ActivitySummary,
            importer::StravaAthlete,
        )
    ),
    tags(
        (name = "health", description = "Service status"),
        (name = "pace-zones", description = "5K-based training pace zones"),
        (name = "workouts", description = "Workout library"),
        (name = "schedule", description = "Training calendar"),
        (name = "profile", description = "User profile"),
        (name = "strava", description = "Strava activity import"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}
