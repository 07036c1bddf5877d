//! Journal entry blocks and their flat-text rendering

use chrono::NaiveDateTime;

/// Width of the `=` and `-` rules framing each block
pub const RULE_WIDTH: usize = 64;

pub const DATE_FORMAT: &str = "%m/%d/%Y";
pub const TIME_FORMAT: &str = "%I:%M %p";
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %I:%M %p";

/// Labels written before each daily reflection answer, in question order
pub const DAILY_LABELS: [&str; 5] = [
    "Positive moment: ",
    "Challenge handled: ",
    "Connections: ",
    "Do differently: ",
    "Current feelings: ",
];

/// Labels written before each weekly check-in answer, in question order
pub const WEEKLY_LABELS: [&str; 5] = [
    "Biggest accomplishment: ",
    "Most challenging: ",
    "Support needed: ",
    "Goal for next week: ",
    "Personal growth: ",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    DailyReflection,
    WeeklyCheckIn,
    ChatConversation,
}

impl EntryKind {
    pub const ALL: [Self; 3] = [Self::DailyReflection, Self::WeeklyCheckIn, Self::ChatConversation];

    pub fn title(self) -> &'static str {
        match self {
            Self::DailyReflection => "Daily Reflection",
            Self::WeeklyCheckIn => "Weekly Check-in",
            Self::ChatConversation => "Chat Conversation",
        }
    }

    /// Header line that identifies a block of this kind in the file
    pub fn marker(self) -> String {
        format!("Entry Type: {}", self.title())
    }
}

/// One block appended to a user's journal
#[derive(Debug, Clone, PartialEq)]
pub enum JournalEntry {
    Daily {
        when: NaiveDateTime,
        mood: Option<String>,
        answers: Vec<String>,
    },
    Weekly {
        when: NaiveDateTime,
        answers: Vec<String>,
    },
    Chat {
        when: NaiveDateTime,
        lines: Vec<String>,
    },
}

impl JournalEntry {
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Daily { .. } => EntryKind::DailyReflection,
            Self::Weekly { .. } => EntryKind::WeeklyCheckIn,
            Self::Chat { .. } => EntryKind::ChatConversation,
        }
    }

    /// Render the block exactly as it is appended to the journal file
    pub fn render(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = format!("\n{rule}\n{}\n", self.kind().marker());

        match self {
            Self::Daily { when, mood, answers } => {
                out.push_str(&format!(
                    "Date: {} | Time: {}\n",
                    when.format(DATE_FORMAT),
                    when.format(TIME_FORMAT)
                ));
                if let Some(mood) = mood {
                    out.push_str(&format!("Mood: {mood}\n"));
                }
                out.push_str(&format!("{rule}\n"));
                push_labelled(&mut out, &DAILY_LABELS, answers);
            }
            Self::Weekly { when, answers } => {
                out.push_str(&format!("Date: {} | Time: Weekly\n", when.format(DATE_FORMAT)));
                out.push_str(&format!("{rule}\n"));
                push_labelled(&mut out, &WEEKLY_LABELS, answers);
            }
            Self::Chat { when, lines } => {
                out.push_str(&format!("Date: {}\n", when.format(TIMESTAMP_FORMAT)));
                out.push_str(&format!("{rule}\n"));
                for line in lines {
                    out.push_str(line);
                    out.push('\n');
                }
                out.push_str(&format!("{rule}\n"));
            }
        }

        out
    }
}

fn push_labelled(out: &mut String, labels: &[&str], answers: &[String]) {
    for (label, answer) in labels.iter().zip(answers) {
        out.push_str(label);
        out.push_str(answer);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap()
    }

    #[test]
    fn test_daily_block() {
        let entry = JournalEntry::Daily {
            when: sample_time(),
            mood: Some("Slightly Good".into()),
            answers: vec!["a".into(), "b".into(), "c".into(), "d".into(), "e".into()],
        };
        let text = entry.render();
        assert!(text.starts_with('\n'));
        assert!(text.contains("Entry Type: Daily Reflection\n"));
        assert!(text.contains("Date: 03/09/2024 | Time: 02:05 PM\n"));
        assert!(text.contains("Mood: Slightly Good\n"));
        assert!(text.contains("Positive moment: a\n"));
        assert!(text.contains("Current feelings: e\n"));
    }

    #[test]
    fn test_weekly_block_without_mood() {
        let entry = JournalEntry::Weekly {
            when: sample_time(),
            answers: vec!["shipped it".into()],
        };
        let text = entry.render();
        assert!(text.contains("Date: 03/09/2024 | Time: Weekly\n"));
        assert!(!text.contains("Mood:"));
        assert!(text.contains("Biggest accomplishment: shipped it\n"));
        assert!(!text.contains("Most challenging"));
    }

    #[test]
    fn test_chat_block_is_closed() {
        let entry = JournalEntry::Chat {
            when: sample_time(),
            lines: vec!["You: hi".into(), "Companion: hello".into()],
        };
        let text = entry.render();
        assert!(text.contains("Date: 03/09/2024 02:05 PM\n"));
        assert!(text.ends_with(&format!("Companion: hello\n{}\n", "=".repeat(RULE_WIDTH))));
    }
}
