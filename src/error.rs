//! Error Types
//!
//! Every failure in the front-end is recoverable; callers log and fall back.

#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    #[error("Geolocation lookup failed: {0}")]
    Geolocation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Malformed preference {key}: {raw:?}")]
    Preference { key: String, raw: String },

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Post data error: {0}")]
    Data(#[from] serde_json::Error),
}

impl From<reqwest::Error> for BlogError {
    fn from(e: reqwest::Error) -> Self {
        BlogError::Geolocation(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BlogError>;
