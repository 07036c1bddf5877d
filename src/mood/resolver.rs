//! Mood resolution - normalizes a free-text mood expression into an assessment
//!
//! Rules are tried in a fixed order: exact phrase, bare number, "very"
//! intensifier, diminisher prefixes. Anything else is rejected; there is no
//! fuzzy or partial matching.

use crate::core::types::MoodLevel;
use crate::mood::assessment::MoodAssessment;
use crate::mood::lexicon::{lexicon, MoodLexicon};

/// Prefix that raises the base mood one level
const INTENSIFIER: &str = "very ";

/// Prefixes that lower the base mood one level, checked in this order
const DIMINISHERS: [&str; 4] = ["a bit ", "slightly ", "kind of ", "sort of "];

/// Resolves raw mood expressions against a lexicon
#[derive(Debug, Clone, Copy)]
pub struct MoodResolver<'a> {
    lexicon: &'a MoodLexicon,
}

impl<'a> MoodResolver<'a> {
    pub fn new(lexicon: &'a MoodLexicon) -> Self {
        Self { lexicon }
    }

    /// Resolve a raw expression; `None` means the input was not recognized
    pub fn resolve(&self, raw: &str) -> Option<MoodAssessment> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }

        if let Some(found) = self.lexicon.lookup(&normalized) {
            return Some(found);
        }

        if normalized.bytes().all(|b| b.is_ascii_digit()) {
            return self.resolve_number(&normalized);
        }

        if let Some(rest) = normalized.strip_prefix(INTENSIFIER) {
            return self.lexicon.lookup(rest).map(|base| base.intensified());
        }

        DIMINISHERS
            .iter()
            .find_map(|prefix| normalized.strip_prefix(prefix))
            .and_then(|rest| self.lexicon.lookup(rest))
            .map(|base| base.softened())
    }

    /// Numbers that are not literal lexicon keys ("05", "003")
    fn resolve_number(&self, digits: &str) -> Option<MoodAssessment> {
        // Overflowing input fails the parse and is rejected like any other
        // out-of-range number.
        let value: u8 = digits.parse().ok()?;
        let level = MoodLevel::new(value)?;
        Some(
            self.lexicon
                .lookup(&level.to_string())
                .unwrap_or_else(|| MoodAssessment::base(level)),
        )
    }
}

impl MoodResolver<'static> {
    /// Resolver over the process-wide standard lexicon
    pub fn standard() -> Self {
        Self::new(lexicon())
    }
}

/// Resolve against the standard lexicon
pub fn resolve_mood(raw: &str) -> Option<MoodAssessment> {
    MoodResolver::standard().resolve(raw)
}
