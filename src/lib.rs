//! Journal Companion - reflective journaling with mood tracking
//!
//! The two resolvers at the core are pure: `mood::resolve_mood` turns a mood
//! phrase into an assessment and `command::evaluate_command` routes a menu
//! choice through a first-match-wins rule table. Everything else (journal
//! files, canned companion replies, the interactive session) is built on top.

pub mod command;
pub mod companion;
pub mod core;
pub mod journal;
pub mod mood;
pub mod session;
pub mod ui;
