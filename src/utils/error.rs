use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Content request failed: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("Content payload was not valid JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Unexpected status {status} for {url}")]
    StatusError { url: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid booking field {field}: {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Booking state error: {message}")]
    StateError { message: String },
}

pub type Result<T> = std::result::Result<T, SiteError>;
