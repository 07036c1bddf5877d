//! Flat-text journal store, one file per user

use crate::core::error::{CompanionError, Result};
use crate::journal::entry::{EntryKind, JournalEntry, RULE_WIDTH, TIMESTAMP_FORMAT};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const JOURNAL_SUFFIX: &str = "_journal.txt";

/// Entry counts by kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct JournalStats {
    pub daily: usize,
    pub weekly: usize,
    pub chat: usize,
}

impl JournalStats {
    /// Count block headers in journal text
    pub fn from_text(content: &str) -> Self {
        let count = |kind: EntryKind| content.matches(kind.marker().as_str()).count();
        Self {
            daily: count(EntryKind::DailyReflection),
            weekly: count(EntryKind::WeeklyCheckIn),
            chat: count(EntryKind::ChatConversation),
        }
    }

    pub fn total(&self) -> usize {
        self.daily + self.weekly + self.chat
    }
}

/// Reads and appends `<dir>/<name>_journal.txt` files
#[derive(Debug, Clone)]
pub struct JournalStore {
    dir: PathBuf,
}

impl JournalStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Journal path for a user; names that could escape the directory are rejected
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        let trimmed = name.trim();
        let unsafe_name = trimmed.is_empty()
            || trimmed == "."
            || trimmed.contains("..")
            || trimmed.contains(['/', '\\', '\0']);
        if unsafe_name {
            return Err(CompanionError::InvalidUserName(name.to_string()));
        }
        Ok(self.dir.join(format!("{trimmed}{JOURNAL_SUFFIX}")))
    }

    /// Append one entry block, creating the directory and file as needed
    pub fn append(&self, name: &str, entry: &JournalEntry) -> Result<PathBuf> {
        let path = self.path_for(name)?;
        self.append_text(&path, &entry.render())?;
        debug!(kind = ?entry.kind(), path = %path.display(), "Appended journal entry");
        Ok(path)
    }

    /// Append a dashed weekly recap block
    pub fn append_recap(&self, name: &str, recap: &str, when: NaiveDateTime) -> Result<PathBuf> {
        let path = self.path_for(name)?;
        let rule = "-".repeat(RULE_WIDTH);
        let block = format!(
            "\n\n{rule}\nWeekly Recap - {}\n{rule}\n{recap}\n{rule}\n",
            when.format(TIMESTAMP_FORMAT)
        );
        self.append_text(&path, &block)?;
        debug!(path = %path.display(), "Appended weekly recap");
        Ok(path)
    }

    fn append_text(&self, path: &Path, text: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Whole journal text, or `None` if the user has not saved anything yet
    pub fn read(&self, name: &str) -> Result<Option<String>> {
        let path = self.path_for(name)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn stats(&self, name: &str) -> Result<Option<JournalStats>> {
        Ok(self.read(name)?.map(|content| JournalStats::from_text(&content)))
    }

    /// One-sentence description of the journal for chat context
    ///
    /// Never fails: read errors are logged and replaced by a vague sentence.
    pub fn summary(&self, name: &str) -> String {
        match self.stats(name) {
            Ok(None) => "You haven't made any journal entries yet.".to_string(),
            Ok(Some(stats)) => format!(
                "You have {} daily entries and {} weekly check-ins.",
                stats.daily, stats.weekly
            ),
            Err(e) => {
                warn!(error = %e, "Could not read journal for summary");
                "I can see you have some journal entries.".to_string()
            }
        }
    }
}
