//! The resolved mood record handed to callers

use crate::core::types::MoodLevel;
use serde::Serialize;

/// A resolved mood: level, description and emoji
///
/// Values are produced fresh on every resolution, so callers may decorate
/// their copy without touching the lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MoodAssessment {
    pub level: MoodLevel,
    pub description: String,
    pub emoji: &'static str,
}

impl MoodAssessment {
    /// The undecorated assessment for a level
    pub fn base(level: MoodLevel) -> Self {
        Self {
            level,
            description: level.label().to_string(),
            emoji: level.emoji(),
        }
    }

    /// Apply the "very" intensifier: one level up, "Very " prefix, same emoji
    pub fn intensified(&self) -> Self {
        Self {
            level: self.level.raised(),
            description: format!("Very {}", self.description),
            emoji: self.emoji,
        }
    }

    /// Apply a diminisher ("a bit", "slightly", ...): one level down,
    /// "Slightly " prefix, same emoji
    pub fn softened(&self) -> Self {
        Self {
            level: self.level.lowered(),
            description: format!("Slightly {}", self.description),
            emoji: self.emoji,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensified_keeps_emoji() {
        let low = MoodAssessment::base(MoodLevel::LOW);
        let very = low.intensified();
        assert_eq!(very.level, MoodLevel::NEUTRAL);
        assert_eq!(very.description, "Very Low");
        assert_eq!(very.emoji, "😟");
    }

    #[test]
    fn test_softened_clamps_at_one() {
        let bottom = MoodAssessment::base(MoodLevel::VERY_LOW).softened();
        assert_eq!(bottom.level, MoodLevel::VERY_LOW);
        assert_eq!(bottom.description, "Slightly Very Low");
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_value(MoodAssessment::base(MoodLevel::VERY_GOOD)).unwrap();
        assert_eq!(json["level"], 5);
        assert_eq!(json["description"], "Very Good");
        assert_eq!(json["emoji"], "😊");
    }
}
