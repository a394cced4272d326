//! The demonstration run.
//!
//! Builds one email and one SMS notification from the configured contents
//! and hands each to its observer.

use crate::config::Config;
use crate::core::{Channel, Notification};
use crate::error::NotificationError;
use crate::formatting::formatter_for;
use crate::notification::{factory_for, EmailObserver, NotificationBuilder, Observer, SmsObserver};
use std::io::{self, Write};
use tracing::{info, instrument, warn};

/// The notifications and observers of one demonstration run.
pub struct Demo {
    email: Notification<String>,
    sms: Notification<String>,
    email_observer: EmailObserver,
    sms_observer: SmsObserver,
    show_type_note: bool,
}

impl Demo {
    /// Builds both notifications and their observers from `config`.
    #[instrument(skip_all)]
    pub fn from_config(config: &Config) -> Result<Self, NotificationError> {
        let email = NotificationBuilder::new()
            .set_content(config.demo.email_content.clone())
            .build(factory_for(Channel::Email).as_ref())?;

        let sms = NotificationBuilder::new()
            .set_content(config.demo.sms_content.clone())
            .build(factory_for(Channel::Sms).as_ref())?;

        info!(format = %config.output.format, "Notifications built");

        Ok(Self {
            email,
            sms,
            email_observer: EmailObserver::with_formatter(formatter_for(&config.output.format)),
            sms_observer: SmsObserver::with_formatter(formatter_for(&config.output.format)),
            show_type_note: config.demo.show_type_note,
        })
    }

    pub fn email(&self) -> &Notification<String> {
        &self.email
    }

    pub fn sms(&self) -> &Notification<String> {
        &self.sms
    }

    /// Delivers both notifications to their observers, writing to `out`.
    pub fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        self.email_observer.write_update(&self.email, out)?;
        self.sms_observer.write_update(&self.sms, out)?;

        if self.show_type_note {
            writeln!(out, "{}", type_note(&self.email))?;
        }
        Ok(())
    }
}

/// Describes the static type of `notification`, which Rust keeps intact.
pub fn type_note<T>(notification: &Notification<T>) -> String {
    format!("Generic type retained: {}", std::any::type_name_of_val(notification))
}

/// Runs the demonstration described by `config`, reporting to `out`.
///
/// A failed write is logged and does not fail the run.
pub fn run(config: &Config, out: &mut dyn Write) -> anyhow::Result<()> {
    let demo = Demo::from_config(config)?;
    if let Err(e) = demo.write_to(out) {
        warn!(error = %e, "Failed to write notification");
    }
    Ok(())
}
