pub mod pace_zone;
pub mod profile;
pub mod schedule;
pub mod strava_connection;
pub mod workout;
