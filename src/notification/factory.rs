//! Factories that turn raw content into channel-tagged notifications.

use crate::core::{Channel, Notification};
use tracing::debug;

/// A trait for creators of notifications for a single channel.
pub trait NotificationFactory<T>: Send + Sync {
    /// Wraps `content` in a notification tagged with this factory's channel.
    fn create_notification(&self, content: T) -> Notification<T>;

    /// The channel produced by this factory.
    fn channel(&self) -> Channel;
}

/// Produces email notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailNotificationFactory;

impl<T> NotificationFactory<T> for EmailNotificationFactory {
    fn create_notification(&self, content: T) -> Notification<T> {
        debug!(channel = %Channel::Email, "Creating notification");
        Notification::new(Channel::Email, content)
    }

    fn channel(&self) -> Channel {
        Channel::Email
    }
}

/// Produces SMS notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmsNotificationFactory;

impl<T> NotificationFactory<T> for SmsNotificationFactory {
    fn create_notification(&self, content: T) -> Notification<T> {
        debug!(channel = %Channel::Sms, "Creating notification");
        Notification::new(Channel::Sms, content)
    }

    fn channel(&self) -> Channel {
        Channel::Sms
    }
}

/// Returns the boxed factory for `channel`.
///
/// Lets callers pick a factory from a [`Channel`] value instead of naming the
/// concrete type.
pub fn factory_for<T>(channel: Channel) -> Box<dyn NotificationFactory<T>> {
    match channel {
        Channel::Email => Box::new(EmailNotificationFactory),
        Channel::Sms => Box::new(SmsNotificationFactory),
    }
}
