use std::fmt;

use serde::{Deserialize, Serialize};

use crate::planner::constants::{ACTIVE_MULTIPLIER, MODERATE_MULTIPLIER, SEDENTARY_MULTIPLIER};

/// Self-reported activity level, which scales the protein target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    Moderate,
    Active,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 3] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
    ];

    /// Grams of protein per kg of body weight.
    #[inline]
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => SEDENTARY_MULTIPLIER,
            ActivityLevel::Moderate => MODERATE_MULTIPLIER,
            ActivityLevel::Active => ACTIVE_MULTIPLIER,
        }
    }

    /// Strict parse; `None` for anything that is not a known tag.
    pub fn parse_tag(tag: &str) -> Option<ActivityLevel> {
        match tag.trim().to_lowercase().as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "moderate" => Some(ActivityLevel::Moderate),
            "active" => Some(ActivityLevel::Active),
            _ => None,
        }
    }

    /// Lenient parse: unknown tags fall back to sedentary.
    pub fn from_tag(tag: &str) -> ActivityLevel {
        Self::parse_tag(tag).unwrap_or_else(|| {
            tracing::warn!(tag, "unknown activity level, using sedentary multiplier");
            ActivityLevel::Sedentary
        })
    }

    pub fn label(self) -> String {
        let name = match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::Active => "Active",
        };
        format!("{} (x{})", name, self.multiplier())
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityLevel::Sedentary => write!(f, "sedentary"),
            ActivityLevel::Moderate => write!(f, "moderate"),
            ActivityLevel::Active => write!(f, "active"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipliers() {
        assert_eq!(ActivityLevel::Sedentary.multiplier(), 1.2);
        assert_eq!(ActivityLevel::Moderate.multiplier(), 1.55);
        assert_eq!(ActivityLevel::Active.multiplier(), 1.75);
    }

    #[test]
    fn test_unknown_tag_falls_back_to_sedentary() {
        assert_eq!(ActivityLevel::from_tag("athlete"), ActivityLevel::Sedentary);
        assert_eq!(ActivityLevel::from_tag(""), ActivityLevel::Sedentary);
        assert_eq!(ActivityLevel::parse_tag("athlete"), None);
    }

    #[test]
    fn test_tags_are_case_insensitive() {
        assert_eq!(ActivityLevel::from_tag("ACTIVE"), ActivityLevel::Active);
        assert_eq!(ActivityLevel::from_tag(" Moderate "), ActivityLevel::Moderate);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for level in ActivityLevel::ALL {
            assert_eq!(ActivityLevel::parse_tag(&level.to_string()), Some(level));
        }
    }
}
