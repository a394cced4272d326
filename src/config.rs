//! Configuration management for notifykit
//!
//! This module defines the main `Config` struct and its sub-structs. It uses
//! the `figment` crate to layer built-in defaults, a `notifykit.toml` file,
//! environment variables and command-line flags.

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::cli::Cli;

/// File consulted when no `--config` path is given.
pub const DEFAULT_CONFIG_FILE: &str = "notifykit.toml";

/// The main configuration struct for the application.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// The logging level for the application.
    pub log_level: String,
    /// Configuration for observer output.
    #[serde(default)]
    pub output: OutputConfig,
    /// Configuration for the demonstration run.
    #[serde(default)]
    pub demo: DemoConfig,
}

/// The format observers report in.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    PlainText,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::PlainText => write!(f, "PlainText"),
            OutputFormat::Json => write!(f, "Json"),
        }
    }
}

/// Configuration for observer output.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    /// The format to use for stdout output.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Contents used by the demonstration run.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// Content of the email notification.
    pub email_content: String,
    /// Content of the SMS notification.
    pub sms_content: String,
    /// Print the line describing the retained generic type.
    pub show_type_note: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            email_content: "Welcome to MarketBridge!".to_string(),
            sms_content: "Your order has shipped!".to_string(),
            show_type_note: true,
        }
    }
}

impl Config {
    /// Loads the application configuration.
    ///
    /// Sources are merged in order of increasing precedence: defaults, the
    /// TOML file, `NOTIFYKIT_` environment variables, then CLI flags.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        // The default file is optional, an explicit one is not.
        if cli.config.is_some() && !config_path.exists() {
            anyhow::bail!("Config file not found: {}", config_path.display());
        }

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_path))
            // e.g. NOTIFYKIT_DEMO__SMS_CONTENT="Out for delivery"
            .merge(Env::prefixed("NOTIFYKIT_").split("__"))
            .merge(cli.clone())
            .extract()?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            output: OutputConfig::default(),
            demo: DemoConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.output.format, OutputFormat::PlainText);
        assert_eq!(config.demo.email_content, "Welcome to MarketBridge!");
        assert_eq!(config.demo.sms_content, "Your order has shipped!");
        assert!(config.demo.show_type_note);
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::PlainText.to_string(), "PlainText");
        assert_eq!(OutputFormat::Json.to_string(), "Json");
    }
}
