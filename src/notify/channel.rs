use tokio::sync::broadcast;

use super::{Notification, Notifier};

/// Pub/sub notifier broadcasting every notification to all subscribers.
#[derive(Clone)]
pub struct ChannelNotifier {
    tx: broadcast::Sender<Notification>,
}

impl Default for ChannelNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelNotifier {
    /// Create a new ChannelNotifier with a buffer of 32 notifications.
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(32);
        Self { tx }
    }

    /// Subscribe to notifications raised after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }
}

impl Notifier for ChannelNotifier {
    fn show_notification(&self, notification: Notification) {
        // No subscribers is not an error: the toast simply goes unseen.
        let _ = self.tx.send(notification);
    }
}
