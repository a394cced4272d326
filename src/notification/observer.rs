//! Observers that report received notifications.
//!
//! Observers are invoked directly by the caller; there is no subject that
//! holds a list of them.

use crate::core::Notification;
use crate::formatting::{PlainTextFormatter, TextFormatter};
use std::fmt::Display;
use std::io::{self, Write};
use tracing::warn;

/// A trait for sinks that react to a delivered notification.
pub trait Observer<T: Display>: Send + Sync {
    /// The fixed label prefixed to every report line.
    fn label(&self) -> &'static str;

    fn formatter(&self) -> &dyn TextFormatter;

    /// Writes the report line for `notification` to `writer`.
    fn write_update(&self, notification: &Notification<T>, writer: &mut dyn Write) -> io::Result<()> {
        let line = self
            .formatter()
            .format_line(self.label(), notification.content());
        writeln!(writer, "{}", line)
    }

    /// Reports `notification` on standard output.
    ///
    /// Write failures are logged and otherwise ignored.
    fn update(&self, notification: &Notification<T>) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = self.write_update(notification, &mut handle) {
            warn!(observer = self.label(), error = %e, "Failed to write notification");
        }
    }
}

/// Reports email notifications.
pub struct EmailObserver {
    formatter: Box<dyn TextFormatter>,
}

impl EmailObserver {
    pub const LABEL: &'static str = "EmailObserver";

    /// Creates a new `EmailObserver` with the plain-text formatter.
    pub fn new() -> Self {
        Self::with_formatter(Box::new(PlainTextFormatter))
    }

    pub fn with_formatter(formatter: Box<dyn TextFormatter>) -> Self {
        Self { formatter }
    }
}

impl Default for EmailObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Display> Observer<T> for EmailObserver {
    fn label(&self) -> &'static str {
        Self::LABEL
    }

    fn formatter(&self) -> &dyn TextFormatter {
        self.formatter.as_ref()
    }
}

/// Reports SMS notifications.
pub struct SmsObserver {
    formatter: Box<dyn TextFormatter>,
}

impl SmsObserver {
    pub const LABEL: &'static str = "SMSObserver";

    /// Creates a new `SmsObserver` with the plain-text formatter.
    pub fn new() -> Self {
        Self::with_formatter(Box::new(PlainTextFormatter))
    }

    pub fn with_formatter(formatter: Box<dyn TextFormatter>) -> Self {
        Self { formatter }
    }
}

impl Default for SmsObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Display> Observer<T> for SmsObserver {
    fn label(&self) -> &'static str {
        Self::LABEL
    }

    fn formatter(&self) -> &dyn TextFormatter {
        self.formatter.as_ref()
    }
}
