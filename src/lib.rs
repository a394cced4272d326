/// notifykit - Observer, Factory and Builder patterns over notifications
///
/// This library builds channel-tagged notifications through factories and a
/// fluent builder, and reports them through observers.
pub mod notification;

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod formatting;

// Re-export core types for convenience
pub use crate::core::*;
pub use error::NotificationError;
