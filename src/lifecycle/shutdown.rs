//! Shutdown coordination.

use tokio::sync::broadcast;

/// Broadcasts a single stop request to the admin server and any other task
/// that subscribed before it fired.
#[derive(Debug, Clone)]
pub struct Shutdown {
    notify: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (notify, _) = broadcast::channel(1);
        Self { notify }
    }

    /// Receiver resolved once [`Shutdown::trigger`] runs.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.notify.subscribe()
    }

    /// Request shutdown. Returns how many listeners were notified.
    pub fn trigger(&self, reason: &'static str) -> usize {
        let notified = self.notify.send(()).unwrap_or(0);
        tracing::info!(reason, listeners = notified, "Shutdown requested");
        notified
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
