//! Core type definitions used throughout the codebase

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for one interactive session (used in log spans)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Self-reported mood on the 1 (very low) to 5 (very good) scale
///
/// The inner value is always within `MIN..=MAX`; every constructor clamps or
/// rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MoodLevel(u8);

impl MoodLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub const VERY_LOW: Self = Self(1);
    pub const LOW: Self = Self(2);
    pub const NEUTRAL: Self = Self(3);
    pub const GOOD: Self = Self(4);
    pub const VERY_GOOD: Self = Self(5);

    /// Build a level, rejecting anything outside 1..=5
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// One step up, saturating at 5
    pub fn raised(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX))
    }

    /// One step down, saturating at 1
    pub fn lowered(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN))
    }

    /// Base description for this level
    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Very Low",
            2 => "Low",
            3 => "Neutral",
            4 => "Good",
            _ => "Very Good",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self.0 {
            1 => "😔",
            2 => "😟",
            3 => "😐",
            4 => "🙂",
            _ => "😊",
        }
    }

    /// All five levels in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl fmt::Display for MoodLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(MoodLevel::new(0).is_none());
        assert!(MoodLevel::new(6).is_none());
        assert_eq!(MoodLevel::new(3), Some(MoodLevel::NEUTRAL));
    }

    #[test]
    fn test_steps_saturate() {
        assert_eq!(MoodLevel::VERY_GOOD.raised(), MoodLevel::VERY_GOOD);
        assert_eq!(MoodLevel::VERY_LOW.lowered(), MoodLevel::VERY_LOW);
        assert_eq!(MoodLevel::LOW.raised(), MoodLevel::NEUTRAL);
        assert_eq!(MoodLevel::GOOD.lowered(), MoodLevel::NEUTRAL);
    }

    #[test]
    fn test_labels_and_emoji_are_distinct() {
        let labels: Vec<_> = MoodLevel::all().map(MoodLevel::label).collect();
        let emoji: Vec<_> = MoodLevel::all().map(MoodLevel::emoji).collect();
        assert_eq!(labels, ["Very Low", "Low", "Neutral", "Good", "Very Good"]);
        assert_eq!(emoji, ["😔", "😟", "😐", "🙂", "😊"]);
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&MoodLevel::GOOD).unwrap();
        assert_eq!(json, "4");
    }
}
