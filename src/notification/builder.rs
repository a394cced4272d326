//! A fluent builder that stages content before handing it to a factory.

use crate::core::Notification;
use crate::error::NotificationError;
use crate::notification::factory::NotificationFactory;
use tracing::debug;

/// Stages the content of a notification.
///
/// The builder is consumed by [`build`](NotificationBuilder::build); setting
/// content more than once keeps only the last value.
#[derive(Debug, Clone)]
pub struct NotificationBuilder<T> {
    content: Option<T>,
}

impl<T> Default for NotificationBuilder<T> {
    fn default() -> Self {
        Self { content: None }
    }
}

impl<T> NotificationBuilder<T> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages `content`, replacing anything set earlier.
    pub fn set_content(mut self, content: T) -> Self {
        self.content = Some(content);
        self
    }

    /// Builds the notification with `factory`.
    ///
    /// Returns [`NotificationError::ContentNotSet`] if no content was staged.
    pub fn build<F>(self, factory: &F) -> Result<Notification<T>, NotificationError>
    where
        F: NotificationFactory<T> + ?Sized,
    {
        let content = self.content.ok_or(NotificationError::ContentNotSet)?;
        debug!(channel = %factory.channel(), "Building notification");
        Ok(factory.create_notification(content))
    }
}
