//! Per-user plain-text journal

pub mod entry;
pub mod store;

pub use entry::{EntryKind, JournalEntry, DAILY_LABELS, WEEKLY_LABELS};
pub use store::{JournalStats, JournalStore};
