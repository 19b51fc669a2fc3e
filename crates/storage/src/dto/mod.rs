pub mod common;
pub mod pace_zone;
pub mod profile;
pub mod schedule;
pub mod workout;
