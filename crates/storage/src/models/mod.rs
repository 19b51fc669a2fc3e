mod effort;
mod pace_zone;
mod profile;
mod scheduled_workout;
mod strava_connection;
mod workout_category;
mod workout_template;

pub use effort::EffortBand;
pub use pace_zone::{Pace, PaceZoneSet, PaceZones, Zone, format_pace};
pub use profile::Profile;
pub use scheduled_workout::{ScheduledWorkout, ScheduledWorkoutDetail};
pub use strava_connection::StravaConnection;
pub use workout_category::{CategoryColor, WorkoutCategory};
pub use workout_template::WorkoutTemplate;
