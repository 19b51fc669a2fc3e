use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Intensity band for a 1-10 effort score, coloured on a green to red gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EffortBand {
    Green,
    YellowGreen,
    Orange,
    Red,
}

impl EffortBand {
    pub fn from_effort(effort: i16) -> Self {
        match effort {
            i16::MIN..=3 => EffortBand::Green,
            4..=5 => EffortBand::YellowGreen,
            6..=7 => EffortBand::Orange,
            _ => EffortBand::Red,
        }
    }

    pub fn css_color(self) -> &'static str {
        match self {
            EffortBand::Green => "hsl(var(--chart-2))",
            EffortBand::YellowGreen => "hsl(var(--chart-3))",
            EffortBand::Orange => "hsl(var(--chart-4))",
            EffortBand::Red => "hsl(var(--chart-5))",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(EffortBand::from_effort(1), EffortBand::Green);
        assert_eq!(EffortBand::from_effort(3), EffortBand::Green);
        assert_eq!(EffortBand::from_effort(4), EffortBand::YellowGreen);
        assert_eq!(EffortBand::from_effort(5), EffortBand::YellowGreen);
        assert_eq!(EffortBand::from_effort(6), EffortBand::Orange);
        assert_eq!(EffortBand::from_effort(7), EffortBand::Orange);
        assert_eq!(EffortBand::from_effort(8), EffortBand::Red);
        assert_eq!(EffortBand::from_effort(10), EffortBand::Red);
    }

    #[test]
    fn test_css_colors() {
        assert_eq!(EffortBand::Green.css_color(), "hsl(var(--chart-2))");
        assert_eq!(EffortBand::Red.css_color(), "hsl(var(--chart-5))");
    }
}
