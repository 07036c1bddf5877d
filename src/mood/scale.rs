//! Mood scale presentation: reference table, colors, activity suggestions

use crate::core::types::MoodLevel;

/// Display color associated with a mood level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodColor {
    Red,
    Yellow,
    White,
    Cyan,
    Green,
}

/// Color for a raw level value; anything outside 1..=5 is white
pub fn mood_color(level: i64) -> MoodColor {
    match level {
        1 => MoodColor::Red,
        2 => MoodColor::Yellow,
        3 => MoodColor::White,
        4 => MoodColor::Cyan,
        5 => MoodColor::Green,
        _ => MoodColor::White,
    }
}

/// Reference table shown before every mood prompt
pub fn display_scale() -> String {
    let mut out = String::new();
    out.push_str("╔══════════════════════════════════════════════════════════╗\n");
    out.push_str("║                     MOOD SCALE (1-5)                     ║\n");
    out.push_str("╠═══════╦══════════════════════════════════════════════════╣\n");
    out.push_str("║ Level ║ Description                                      ║\n");
    out.push_str("╠═══════╬══════════════════════════════════════════════════╣\n");
    for level in MoodLevel::all() {
        let hint = format!("({})", scale_examples(level));
        out.push_str(&format!(
            "║   {}   ║ {:<9} {}  {:<35}║\n",
            level,
            level.label(),
            level.emoji(),
            hint
        ));
    }
    out.push_str("╚═══════╩══════════════════════════════════════════════════╝\n");
    out.push('\n');
    out.push_str("You can use the number (1-5) or any of the keywords shown above.\n");
    out.push_str("Examples: \"3\", \"happy\", \"a bit sad\", \"very good\"\n");
    out
}

fn scale_examples(level: MoodLevel) -> &'static str {
    match level.get() {
        1 => "Terrible, Awful, Hopeless",
        2 => "Sad, Down, Unhappy",
        3 => "Okay, Fine, Meh",
        4 => "Happy, Content, Cheerful",
        _ => "Great, Fantastic, Wonderful",
    }
}

/// Small, concrete things to try at a given level
pub fn suggested_activities(level: i64) -> &'static [&'static str] {
    match level {
        1 => &[
            "Take 3 deep breaths",
            "Drink a glass of water",
            "Name one thing you can see, hear, and feel",
            "Reach out to someone you trust",
        ],
        2 => &[
            "Go for a short walk",
            "Write down what's bothering you",
            "Listen to calming music",
            "Do one small, kind thing for yourself",
        ],
        3 => &[
            "Check in with what you need right now",
            "Try a brief mindfulness exercise",
            "Do something creative for 10 minutes",
            "Connect with a friend",
        ],
        4 => &[
            "Savor this positive moment",
            "Share your good mood with someone",
            "Do something you enjoy",
            "Practice gratitude",
        ],
        5 => &[
            "Celebrate this great feeling!",
            "Share your positivity",
            "Do something energizing",
            "Capture this moment in your journal",
        ],
        _ => &["Take a moment to check in with yourself"],
    }
}

/// Direction of change between two check-ins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodShift {
    Lower,
    Steady,
    Improved,
}

impl MoodShift {
    pub fn between(initial: MoodLevel, current: MoodLevel) -> Self {
        match current.cmp(&initial) {
            std::cmp::Ordering::Less => Self::Lower,
            std::cmp::Ordering::Equal => Self::Steady,
            std::cmp::Ordering::Greater => Self::Improved,
        }
    }

    /// Feedback shown after the daily check-in
    pub fn message(self) -> &'static str {
        match self {
            Self::Lower => {
                "I notice you're feeling a bit lower than when we started.\nThat's okay - let's explore what's coming up for you."
            }
            Self::Steady => "Your mood has remained steady since we started.",
            Self::Improved => {
                "Great to see an improvement in how you're feeling!\nLet's build on this positive shift."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_contents() {
        let scale = display_scale();
        assert!(scale.len() > 200);
        assert!(scale.contains("MOOD SCALE"));
        assert!(scale.contains("Level"));
        assert!(scale.contains("Description"));
        assert!(scale.contains("Examples:"));
        assert!(scale.contains("You can use"));
        for level in MoodLevel::all() {
            assert!(scale.contains(level.emoji()));
            assert!(scale.contains(level.label()));
        }
    }

    #[test]
    fn test_colors() {
        let colors: Vec<_> = (1..=5).map(mood_color).collect();
        assert_eq!(
            colors,
            [
                MoodColor::Red,
                MoodColor::Yellow,
                MoodColor::White,
                MoodColor::Cyan,
                MoodColor::Green
            ]
        );
        assert_eq!(mood_color(0), MoodColor::White);
        assert_eq!(mood_color(6), MoodColor::White);
        assert_eq!(mood_color(-1), MoodColor::White);
    }

    #[test]
    fn test_activities() {
        for level in 1..=5 {
            let activities = suggested_activities(level);
            assert_eq!(activities.len(), 4);
            assert!(activities.iter().all(|a| a.len() > 5));
        }
        assert_eq!(suggested_activities(0).len(), 1);
        assert_eq!(suggested_activities(6).len(), 1);
        assert!(suggested_activities(1).iter().any(|a| a.to_lowercase().contains("breath")));
        assert!(suggested_activities(5).iter().any(|a| a.to_lowercase().contains("celebrate")));
    }

    #[test]
    fn test_shift() {
        assert_eq!(MoodShift::between(MoodLevel::GOOD, MoodLevel::LOW), MoodShift::Lower);
        assert_eq!(MoodShift::between(MoodLevel::LOW, MoodLevel::LOW), MoodShift::Steady);
        assert_eq!(MoodShift::between(MoodLevel::LOW, MoodLevel::GOOD), MoodShift::Improved);
    }
}
