pub mod config;
pub mod error;
pub mod types;

pub use config::CompanionConfig;
pub use error::{CompanionError, Result};
pub use types::{MoodLevel, SessionId};
