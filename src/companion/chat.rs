//! Keyword categorization of chat messages

/// Broad kind of a chat message, used to pick a reply pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageCategory {
    Greeting,
    Feeling,
    Journal,
    Support,
    Reflection,
    General,
}

impl MessageCategory {
    pub const ALL: [Self; 6] = [
        Self::Greeting,
        Self::Feeling,
        Self::Journal,
        Self::Support,
        Self::Reflection,
        Self::General,
    ];
}

/// Greetings must be a whole word ("hi" must not fire on "think")
const GREETINGS: &[&str] = &["hi", "hello", "hey", "greetings"];

/// Remaining keyword lists match word prefixes ("feel" covers "feeling")
const KEYWORD_CATEGORIES: [(MessageCategory, &[&str]); 4] = [
    (
        MessageCategory::Feeling,
        &[
            "feel", "emotion", "mood", "sad", "happy", "unhappy", "angry", "anxious",
            "stressed", "overwhelmed", "excited", "nervous",
        ],
    ),
    (
        MessageCategory::Journal,
        &["journal", "entry", "entries", "wrote", "writ", "reflect"],
    ),
    (
        MessageCategory::Support,
        &["help", "support", "need", "struggl", "hard", "difficult", "tough"],
    ),
    (
        MessageCategory::Reflection,
        &["think", "thought", "realiz", "understand", "learn", "know"],
    ),
];

fn words(lower: &str) -> impl Iterator<Item = &str> {
    lower
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|w| !w.is_empty())
}

/// Categorize a message; the first matching category in priority order wins
pub fn categorize(message: &str) -> MessageCategory {
    let lower = message.to_lowercase();

    if words(&lower).any(|w| GREETINGS.iter().any(|g| *g == w)) {
        return MessageCategory::Greeting;
    }

    KEYWORD_CATEGORIES
        .iter()
        .find(|(_, keywords)| {
            words(&lower).any(|w| keywords.iter().any(|k| w.starts_with(k)))
        })
        .map(|(category, _)| *category)
        .unwrap_or(MessageCategory::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(categorize("Hi there!"), MessageCategory::Greeting);
        assert_eq!(categorize("I'm feeling a bit anxious today"), MessageCategory::Feeling);
        assert_eq!(categorize("I'm unhappy"), MessageCategory::Feeling);
        assert_eq!(categorize("I wrote in my journal about my day"), MessageCategory::Journal);
        assert_eq!(categorize("I need some support"), MessageCategory::Support);
        assert_eq!(
            categorize("I realized something important about myself"),
            MessageCategory::Reflection
        );
        assert_eq!(categorize("The weather is nice"), MessageCategory::General);
    }

    #[test]
    fn test_greeting_needs_whole_word() {
        assert_eq!(categorize("I think so"), MessageCategory::Reflection);
        assert_eq!(categorize("this and that"), MessageCategory::General);
    }

    #[test]
    fn test_priority_order() {
        // Greeting beats feeling; feeling beats support
        assert_eq!(categorize("hello, I feel sad"), MessageCategory::Greeting);
        assert_eq!(categorize("I feel like I need help"), MessageCategory::Feeling);
    }

    #[test]
    fn test_empty_is_general() {
        assert_eq!(categorize(""), MessageCategory::General);
        assert_eq!(categorize("   "), MessageCategory::General);
    }
}
