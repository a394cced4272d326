//! Core domain types for notifykit
//!
//! This module defines the notification value and the channel tag shared by
//! factories, builders and observers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The delivery channel a notification was created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Sms,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Email => write!(f, "email"),
            Channel::Sms => write!(f, "sms"),
        }
    }
}

/// An immutable notification carrying a payload of type `T`.
///
/// Notifications are produced by a [`NotificationFactory`] and never change
/// after construction.
///
/// [`NotificationFactory`]: crate::notification::factory::NotificationFactory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification<T> {
    /// The channel this notification is tagged with.
    channel: Channel,
    /// The payload, set once at construction.
    content: T,
}

impl<T> Notification<T> {
    /// Creates a new notification for the given channel.
    pub fn new(channel: Channel, content: T) -> Self {
        Self { channel, content }
    }

    /// Returns the payload unchanged.
    pub fn content(&self) -> &T {
        &self.content
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Consumes the notification and returns its payload.
    pub fn into_content(self) -> T {
        self.content
    }
}
