//! Mood assessment
//!
//! Raw text -> MoodResolver (against MoodLexicon) -> Option<MoodAssessment>

pub mod assessment;
pub mod lexicon;
pub mod resolver;
pub mod scale;

pub use assessment::MoodAssessment;
pub use lexicon::{lexicon, MoodLexicon};
pub use resolver::{resolve_mood, MoodResolver};
pub use scale::{display_scale, mood_color, suggested_activities, MoodColor, MoodShift};
