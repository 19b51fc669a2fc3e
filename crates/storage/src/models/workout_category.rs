use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Workout category, stored as the `workout_category` Postgres enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[sqlx(type_name = "workout_category")]
pub enum WorkoutCategory {
    #[serde(rename = "intervallpass")]
    #[sqlx(rename = "intervallpass")]
    Interval,
    #[serde(rename = "distanspass")]
    #[sqlx(rename = "distanspass")]
    Distance,
    #[serde(rename = "långpass")]
    #[sqlx(rename = "långpass")]
    LongRun,
    #[serde(rename = "styrka")]
    #[sqlx(rename = "styrka")]
    Strength,
    #[serde(rename = "tävling")]
    #[sqlx(rename = "tävling")]
    Race,
}

impl WorkoutCategory {
    pub const ALL: [WorkoutCategory; 5] = [
        WorkoutCategory::Interval,
        WorkoutCategory::Distance,
        WorkoutCategory::LongRun,
        WorkoutCategory::Strength,
        WorkoutCategory::Race,
    ];

    /// Stored label of the category
    pub fn as_str(self) -> &'static str {
        match self {
            WorkoutCategory::Interval => "intervallpass",
            WorkoutCategory::Distance => "distanspass",
            WorkoutCategory::LongRun => "långpass",
            WorkoutCategory::Strength => "styrka",
            WorkoutCategory::Race => "tävling",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            WorkoutCategory::Interval => "Intervallpass",
            WorkoutCategory::Distance => "Distanspass",
            WorkoutCategory::LongRun => "Långpass",
            WorkoutCategory::Strength => "Styrka",
            WorkoutCategory::Race => "Tävling",
        }
    }

    pub fn hex_color(self) -> &'static str {
        match self {
            WorkoutCategory::Interval => "#BF5E42",
            WorkoutCategory::Distance => "#468771",
            WorkoutCategory::LongRun => "#7AA6DB",
            WorkoutCategory::Strength => "#4E7C8C",
            WorkoutCategory::Race => "#000000",
        }
    }
}

impl fmt::Display for WorkoutCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == lowered)
            .ok_or_else(|| format!("Unknown workout category: {}", s))
    }
}

/// Display colour for a free-form category label.
///
/// Labels that do not case-insensitively match a known category fall into
/// `Unknown`, which renders with `CategoryColor::DEFAULT_HEX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryColor {
    Known(WorkoutCategory),
    Unknown,
}

impl CategoryColor {
    pub const DEFAULT_HEX: &'static str = "#BF5E42";

    pub fn for_label(label: &str) -> Self {
        match label.parse::<WorkoutCategory>() {
            Ok(category) => CategoryColor::Known(category),
            Err(_) => CategoryColor::Unknown,
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            CategoryColor::Known(category) => category.hex_color(),
            CategoryColor::Unknown => Self::DEFAULT_HEX,
        }
    }
}

impl From<WorkoutCategory> for CategoryColor {
    fn from(category: WorkoutCategory) -> Self {
        CategoryColor::Known(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_map_to_their_color() {
        assert_eq!(CategoryColor::for_label("intervallpass").hex(), "#BF5E42");
        assert_eq!(CategoryColor::for_label("distanspass").hex(), "#468771");
        assert_eq!(CategoryColor::for_label("långpass").hex(), "#7AA6DB");
        assert_eq!(CategoryColor::for_label("styrka").hex(), "#4E7C8C");
        assert_eq!(CategoryColor::for_label("tävling").hex(), "#000000");
    }

    #[test]
    fn test_label_lookup_is_case_insensitive() {
        assert_eq!(
            CategoryColor::for_label("Distanspass"),
            CategoryColor::Known(WorkoutCategory::Distance)
        );
        assert_eq!(
            CategoryColor::for_label("LÅNGPASS"),
            CategoryColor::Known(WorkoutCategory::LongRun)
        );
        assert_eq!(CategoryColor::for_label("TÄVLING").hex(), "#000000");
    }

    #[test]
    fn test_unknown_label_uses_default_color() {
        assert_eq!(CategoryColor::for_label("yoga"), CategoryColor::Unknown);
        assert_eq!(CategoryColor::for_label(" styrka "), CategoryColor::Unknown);
        assert_eq!(CategoryColor::for_label("styrka ").hex(), CategoryColor::DEFAULT_HEX);
        assert_eq!(CategoryColor::for_label("").hex(), CategoryColor::DEFAULT_HEX);
    }

    #[test]
    fn test_serde_uses_stored_labels() {
        let json = serde_json::to_string(&WorkoutCategory::LongRun).unwrap();
        assert_eq!(json, "\"långpass\"");

        let parsed: WorkoutCategory = serde_json::from_str("\"tävling\"").unwrap();
        assert_eq!(parsed, WorkoutCategory::Race);
    }
}
