//! Error types for notification construction.

use thiserror::Error;

/// Errors that can occur while assembling a notification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotificationError {
    /// `build` was called on a builder that never received content.
    #[error("notification content was not set before build")]
    ContentNotSet,
}
