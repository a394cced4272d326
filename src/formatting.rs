//! Renders the lines observers report.

use crate::config::OutputFormat;
use serde_json::json;
use std::fmt::Display;

/// A trait for rendering the line an observer reports for a notification.
pub trait TextFormatter: Send + Sync {
    fn format_line(&self, label: &str, content: &dyn Display) -> String;
}

/// Renders `"<label> received: <content>"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextFormatter;

impl TextFormatter for PlainTextFormatter {
    fn format_line(&self, label: &str, content: &dyn Display) -> String {
        format!("{} received: {}", label, content)
    }
}

/// Renders one JSON object per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl TextFormatter for JsonFormatter {
    fn format_line(&self, label: &str, content: &dyn Display) -> String {
        json!({ "observer": label, "content": content.to_string() }).to_string()
    }
}

/// Returns the formatter matching the configured output format.
pub fn formatter_for(format: &OutputFormat) -> Box<dyn TextFormatter> {
    match format {
        OutputFormat::PlainText => Box::new(PlainTextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
