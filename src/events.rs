//! Change notification
//!
//! Services publish a [`ChangeEvent`] after every successful mutation so
//! interested parties (the alert view, future sync layers) can re-derive
//! state from a fresh snapshot. Events carry no entity payload and no
//! ordering guarantee across entity kinds; receivers are expected to re-read
//! the store rather than patch local copies.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Mutex;

/// Which entity collection changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Transaction,
    Budget,
    Goal,
    Investment,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transaction => write!(f, "Transaction"),
            Self::Budget => write!(f, "Budget"),
            Self::Goal => write!(f, "Goal"),
            Self::Investment => write!(f, "Investment"),
        }
    }
}

/// What happened to the entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Updated,
    Deleted,
}

/// A single change notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub entity_kind: EntityKind,
    pub change_kind: ChangeKind,
    pub entity_id: String,
}

impl ChangeEvent {
    pub fn new(
        entity_kind: EntityKind,
        change_kind: ChangeKind,
        entity_id: impl Into<String>,
    ) -> Self {
        Self {
            entity_kind,
            change_kind,
            entity_id: entity_id.into(),
        }
    }
}

/// Fan-out bus for change events
///
/// Subscribers get an unbounded channel; senders whose receiver has been
/// dropped are pruned on the next publish.
#[derive(Default)]
pub struct ChangeBus {
    subscribers: Mutex<Vec<Sender<ChangeEvent>>>,
}

impl ChangeBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber
    pub fn subscribe(&self) -> Receiver<ChangeEvent> {
        let (tx, rx) = channel();
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.push(tx);
        }
        rx
    }

    /// Deliver an event to all live subscribers
    ///
    /// A poisoned lock drops the event rather than taking the caller down;
    /// notifications are advisory, receivers re-read the store anyway.
    pub fn publish(&self, event: ChangeEvent) {
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        }
    }

    /// Number of live subscribers (after the last publish pruned dead ones)
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().map(|s| s.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_reaches_subscriber() {
        let bus = ChangeBus::new();
        let rx = bus.subscribe();

        bus.publish(ChangeEvent::new(
            EntityKind::Transaction,
            ChangeKind::Created,
            "txn-1",
        ));

        let event = rx.try_recv().unwrap();
        assert_eq!(event.entity_kind, EntityKind::Transaction);
        assert_eq!(event.change_kind, ChangeKind::Created);
        assert_eq!(event.entity_id, "txn-1");
    }

    #[test]
    fn test_multiple_subscribers() {
        let bus = ChangeBus::new();
        let rx1 = bus.subscribe();
        let rx2 = bus.subscribe();

        bus.publish(ChangeEvent::new(
            EntityKind::Budget,
            ChangeKind::Updated,
            "bgt-1",
        ));

        assert!(rx1.try_recv().is_ok());
        assert!(rx2.try_recv().is_ok());
    }

    #[test]
    fn test_dropped_subscriber_pruned() {
        let bus = ChangeBus::new();
        let rx = bus.subscribe();
        drop(rx);

        bus.publish(ChangeEvent::new(
            EntityKind::Goal,
            ChangeKind::Deleted,
            "goal-1",
        ));

        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_no_subscribers_is_fine() {
        let bus = ChangeBus::new();
        bus.publish(ChangeEvent::new(
            EntityKind::Investment,
            ChangeKind::Created,
            "inv-1",
        ));
    }
}
