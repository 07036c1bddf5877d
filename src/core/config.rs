//! Companion configuration with documented defaults
//!
//! Every tunable limit of the interactive session lives here. Values can be
//! overridden from a TOML file; missing keys keep their defaults.

use crate::core::error::{CompanionError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for the journaling session
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompanionConfig {
    // === STORAGE ===
    /// Directory holding the per-user `<name>_journal.txt` files
    pub journal_dir: PathBuf,

    // === MENU ===
    /// Consecutive unrecognized menu choices before the session stops
    ///
    /// Any successful action resets the streak.
    pub max_invalid_attempts: u32,

    // === CHAT MODE ===
    /// Maximum number of messages in one chat session
    pub chat_max_messages: u32,

    /// Offer to save the conversation every N messages
    pub chat_save_interval: u32,

    /// Number of trailing transcript lines written per save
    pub transcript_tail: usize,

    /// Pause before each companion reply, in milliseconds
    pub thinking_delay_ms: u64,

    // === RESPONSES ===
    /// Follow-up questions offered after a support prompt
    pub followup_count: usize,

    /// Probability of an empathetic (rather than supportive) mood reply
    ///
    /// At 0.7, roughly seven in ten replies acknowledge the feeling and the
    /// rest suggest something to do about it.
    pub empathetic_ratio: f64,

    // === TERMINAL ===
    /// Colored terminal output
    pub color: bool,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            journal_dir: PathBuf::from("."),

            max_invalid_attempts: 3,

            chat_max_messages: 25,
            chat_save_interval: 10,
            transcript_tail: 10,
            thinking_delay_ms: 500,

            followup_count: 3,
            empathetic_ratio: 0.7,

            color: true,
        }
    }
}

impl CompanionConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file and validate it
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.max_invalid_attempts == 0 {
            return Err(CompanionError::InvalidConfig(
                "max_invalid_attempts must be at least 1".into(),
            ));
        }

        if self.chat_max_messages == 0 || self.chat_save_interval == 0 {
            return Err(CompanionError::InvalidConfig(
                "chat limits must be positive".into(),
            ));
        }

        if self.chat_save_interval > self.chat_max_messages {
            return Err(CompanionError::InvalidConfig(format!(
                "chat_save_interval ({}) should be <= chat_max_messages ({})",
                self.chat_save_interval, self.chat_max_messages
            )));
        }

        if !(0.0..=1.0).contains(&self.empathetic_ratio) {
            return Err(CompanionError::InvalidConfig(format!(
                "empathetic_ratio ({}) must be within 0.0..=1.0",
                self.empathetic_ratio
            )));
        }

        if self.transcript_tail == 0 {
            return Err(CompanionError::InvalidConfig(
                "transcript_tail must be at least 1".into(),
            ));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<CompanionConfig> = OnceLock::new();

/// Get the global companion config (initializes with defaults if not set)
pub fn config() -> &'static CompanionConfig {
    CONFIG.get_or_init(CompanionConfig::default)
}

/// Set the global companion config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: CompanionConfig) -> std::result::Result<(), CompanionConfig> {
    CONFIG.set(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(CompanionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CompanionConfig::from_toml_str(
            r#"
            journal_dir = "/tmp/journals"
            max_invalid_attempts = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.journal_dir, PathBuf::from("/tmp/journals"));
        assert_eq!(config.max_invalid_attempts, 5);
        assert_eq!(config.chat_max_messages, 25);
        assert!(config.color);
    }

    #[test]
    fn test_rejects_bad_ratio() {
        let err = CompanionConfig::from_toml_str("empathetic_ratio = 1.5").unwrap_err();
        assert!(matches!(err, CompanionError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_save_interval_above_cap() {
        let config = CompanionConfig {
            chat_max_messages: 5,
            chat_save_interval: 10,
            ..CompanionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_attempts() {
        let config = CompanionConfig {
            max_invalid_attempts: 0,
            ..CompanionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = CompanionConfig::from_toml_str("max_invalid_attempts = \"three\"").unwrap_err();
        assert!(matches!(err, CompanionError::ConfigParse(_)));
    }
}
