//! Command-Line Interface (CLI) argument parsing.
//!
//! This module defines the command-line arguments for the demonstration
//! binary using the `clap` crate. Every flag is optional; the values are
//! merged over the configuration from `notifykit.toml` and the environment.

use clap::Parser;
use figment::{
    value::{Dict, Map, Value},
    Error, Metadata, Profile, Provider,
};
use std::path::PathBuf;

/// Builds notifications with factories and delivers them to observers.
#[derive(Parser, Debug, Default, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level filter (e.g. "debug", "info").
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Content of the email notification.
    #[arg(long, value_name = "TEXT")]
    pub email_content: Option<String>,

    /// Content of the SMS notification.
    #[arg(long, value_name = "TEXT")]
    pub sms_content: Option<String>,

    /// Report notifications as JSON lines.
    #[arg(long)]
    pub json: bool,

    /// Skip the line describing the retained generic type.
    #[arg(long)]
    pub no_type_note: bool,
}

impl Provider for Cli {
    fn metadata(&self) -> Metadata {
        Metadata::named("Command-Line Arguments")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut dict = Dict::new();

        if let Some(level) = &self.log_level {
            dict.insert("log_level".into(), Value::from(level.clone()));
        }

        let mut demo = Dict::new();
        if let Some(content) = &self.email_content {
            demo.insert("email_content".into(), Value::from(content.clone()));
        }
        if let Some(content) = &self.sms_content {
            demo.insert("sms_content".into(), Value::from(content.clone()));
        }
        // Boolean flags only override when present.
        if self.no_type_note {
            demo.insert("show_type_note".into(), Value::from(false));
        }
        if !demo.is_empty() {
            dict.insert("demo".into(), Value::from(demo));
        }

        if self.json {
            let mut output = Dict::new();
            output.insert("format".into(), Value::from("Json"));
            dict.insert("output".into(), Value::from(output));
        }

        let mut map = Map::new();
        map.insert(Profile::Default, dict);
        Ok(map)
    }
}
