use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompanionError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid rule table: {0}")]
    InvalidRuleTable(String),

    #[error("Invalid user name: {0:?}")]
    InvalidUserName(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CompanionError>;
