//! Creates and delivers notifications.
//!
//! Content is staged in a [`builder::NotificationBuilder`], turned into a
//! notification by a [`factory::NotificationFactory`], and handed by the
//! caller to an [`observer::Observer`]. Nothing here is registered or queued;
//! every delivery is a single direct call.
pub mod builder;
pub mod factory;
pub mod observer;

pub use builder::NotificationBuilder;
pub use factory::{factory_for, EmailNotificationFactory, NotificationFactory, SmsNotificationFactory};
pub use observer::{EmailObserver, Observer, SmsObserver};
