pub mod health;
pub mod pace_zones;
pub mod profile;
pub mod schedule;
pub mod strava;
pub mod workouts;
