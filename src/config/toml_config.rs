use crate::domain::ports::AppConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub content: ContentConfig,
    #[serde(default)]
    pub booking: BookingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Empty disables the relay and selects the simulated path.
    #[serde(default)]
    pub relay_endpoint: String,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&raw)?;
        Ok(config)
    }
}

impl AppConfig for TomlConfig {
    fn content_base_url(&self) -> &str {
        &self.content.base_url
    }

    fn relay_endpoint(&self) -> &str {
        &self.booking.relay_endpoint
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("content.base_url", &self.content.base_url)?;
        validation::validate_optional_url("booking.relay_endpoint", &self.booking.relay_endpoint)?;
        Ok(())
    }
}
