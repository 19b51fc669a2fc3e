pub mod pace_zones;
pub mod training_log;
