//! Per-session broadcast bus.

use tokio::sync::broadcast;

use super::SessionEvent;

/// Broadcast channel carrying one session's events.
///
/// Publishing is best-effort: with no subscribers the event is dropped, and
/// slow subscribers observe `RecvError::Lagged`.
#[derive(Clone, Debug)]
pub struct EventBus {
    tx: broadcast::Sender<SessionEvent>,
}

impl EventBus {
    /// Creates a new event bus with default capacity
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn publish(&self, event: SessionEvent) {
        if self.tx.send(event).is_err() {
            // No subscribers - this is normal, not an error
            tracing::trace!("No subscribers for session event");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
