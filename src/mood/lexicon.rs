//! Static phrase → mood table

use crate::core::types::MoodLevel;
use crate::mood::assessment::MoodAssessment;
use ahash::AHashMap;
use std::sync::OnceLock;

/// Recognized phrases per level, including the digit and the spelled number
const STANDARD_PHRASES: [(MoodLevel, &[&str]); 5] = [
    (
        MoodLevel::VERY_LOW,
        &["1", "one", "very low", "terrible", "awful", "horrible", "depressed", "hopeless"],
    ),
    (
        MoodLevel::LOW,
        &["2", "two", "low", "down", "sad", "unhappy", "blue", "gloomy"],
    ),
    (
        MoodLevel::NEUTRAL,
        &["3", "three", "neutral", "okay", "fine", "meh", "alright", "so-so"],
    ),
    (
        MoodLevel::GOOD,
        &["4", "four", "good", "happy", "content", "pleased", "satisfied", "cheerful"],
    ),
    (
        MoodLevel::VERY_GOOD,
        &[
            "5", "five", "very good", "excellent", "great", "fantastic", "wonderful", "amazing",
            "ecstatic",
        ],
    ),
];

/// Read-only mapping from a normalized phrase to its base assessment
#[derive(Debug, Clone, Default)]
pub struct MoodLexicon {
    entries: AHashMap<String, MoodAssessment>,
}

impl MoodLexicon {
    /// The built-in vocabulary
    pub fn standard() -> Self {
        Self::from_phrases(
            STANDARD_PHRASES
                .iter()
                .flat_map(|(level, phrases)| phrases.iter().map(move |p| (*p, *level))),
        )
    }

    /// Build a lexicon from `(phrase, level)` pairs
    ///
    /// Phrases are normalized (trimmed, lower-cased) on the way in. A later
    /// duplicate phrase replaces the earlier one.
    pub fn from_phrases<'p>(phrases: impl IntoIterator<Item = (&'p str, MoodLevel)>) -> Self {
        let entries = phrases
            .into_iter()
            .map(|(phrase, level)| {
                (phrase.trim().to_lowercase(), MoodAssessment::base(level))
            })
            .collect();
        Self { entries }
    }

    /// Exact lookup of an already-normalized phrase; returns a fresh copy
    pub fn lookup(&self, phrase: &str) -> Option<MoodAssessment> {
        self.entries.get(phrase).cloned()
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.entries.contains_key(phrase)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every phrase mapped to `level`, sorted
    pub fn phrases_for(&self, level: MoodLevel) -> Vec<&str> {
        let mut phrases: Vec<&str> = self
            .entries
            .iter()
            .filter(|(_, assessment)| assessment.level == level)
            .map(|(phrase, _)| phrase.as_str())
            .collect();
        phrases.sort_unstable();
        phrases
    }
}

static LEXICON: OnceLock<MoodLexicon> = OnceLock::new();

/// The process-wide standard lexicon, built on first use
pub fn lexicon() -> &'static MoodLexicon {
    LEXICON.get_or_init(MoodLexicon::standard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_size() {
        let lex = MoodLexicon::standard();
        assert_eq!(lex.len(), 41);
        for level in MoodLevel::all() {
            assert!(lex.phrases_for(level).len() >= 8, "level {} too small", level);
        }
    }

    #[test]
    fn test_lookup_returns_independent_copy() {
        let lex = MoodLexicon::standard();
        let mut first = lex.lookup("happy").unwrap();
        first.description.insert_str(0, "Decorated ");
        let second = lex.lookup("happy").unwrap();
        assert_eq!(second.description, "Good");
    }

    #[test]
    fn test_from_phrases_normalizes() {
        let lex = MoodLexicon::from_phrases([("  Grumpy ", MoodLevel::LOW)]);
        assert!(lex.contains("grumpy"));
        assert!(!lex.contains("Grumpy"));
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(lexicon(), lexicon()));
    }
}
