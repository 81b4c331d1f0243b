pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_API_KEY_HEADER: &str = "api_key";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_OUTPUT_PATH: &str = "./site";
pub const DEFAULT_OUTPUT_FILE: &str = "index.html";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "portfolio-page")]
#[command(about = "Render a portfolio page from records held by a data provider")]
pub struct CliConfig {
    /// Base URL of the data provider (entities live under <url>/entities/<Kind>)
    #[arg(long, env = "PORTFOLIO_API_URL", default_value = "")]
    pub api_url: String,

    #[arg(long, env = "PORTFOLIO_API_KEY")]
    pub api_key: Option<String>,

    #[arg(long, default_value = DEFAULT_API_KEY_HEADER)]
    pub api_key_header: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    /// Create sample records when the provider has no profile yet
    #[arg(long)]
    pub bootstrap: bool,

    /// Load settings from a TOML file instead of the flags above
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_url
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn api_key_header(&self) -> &str {
        &self.api_key_header
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn bootstrap_on_empty(&self) -> bool {
        self.bootstrap
    }
}

/// Checks shared by every configuration source.
pub fn validate_provider_config<C: ConfigProvider>(config: &C) -> Result<()> {
    validation::validate_url("api_url", config.api_base_url())?;
    validation::validate_non_empty_string("api_key_header", config.api_key_header())?;
    validation::validate_positive_number(
        "timeout_seconds",
        config.request_timeout().as_secs(),
        1,
    )?;
    validation::validate_path("output_path", config.output_path())?;
    validation::validate_file_name("output_file", config.output_file())?;
    Ok(())
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider_config(self)
    }
}
