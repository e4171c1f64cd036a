//! Transient, user-facing notifications.
//!
//! The table controller reports failures through the [`Notifier`] trait and
//! never renders anything itself. [`ChannelNotifier`] fans notifications out
//! to any number of subscribers; UI layers provide their own implementations.

mod channel;
mod notification;

pub use channel::ChannelNotifier;
pub use notification::{DEFAULT_NOTIFICATION_TIMEOUT, Notification, NotificationKind};

#[cfg(test)]
use mockall::automock;

/// Sink for notifications. Fire-and-forget: nothing is returned to the caller.
#[cfg_attr(test, automock)]
pub trait Notifier {
    fn show_notification(&self, notification: Notification);
}
