pub mod toml_config;

use crate::domain::ports::AppConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "sawa-site")]
#[command(about = "Tattoo studio page: content loading and booking flow demo")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:8080")]
    pub content_base_url: String,

    /// Relay endpoint for booking submissions; empty means the local
    /// simulated acknowledgment path.
    #[arg(long, default_value = "")]
    pub relay_endpoint: String,

    /// Load settings from a TOML file instead of flags.
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    #[serde(default)]
    pub verbose: bool,
}

impl AppConfig for CliConfig {
    fn content_base_url(&self) -> &str {
        &self.content_base_url
    }

    fn relay_endpoint(&self) -> &str {
        &self.relay_endpoint
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("content_base_url", &self.content_base_url)?;
        validation::validate_optional_url("relay_endpoint", &self.relay_endpoint)?;
        Ok(())
    }
}
