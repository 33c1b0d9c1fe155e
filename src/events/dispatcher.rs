// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::events::{EventType, MediaEvent};
use crate::traits::EventHandler;

/// Handle to one subscription, usable to disconnect it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscription {
    id: SubscriptionId,
    event_type: EventType,
    handler: Arc<dyn EventHandler>,
}

/// Per-object list of event subscriptions.
///
/// Subscribing the same handler twice creates two subscriptions; emission
/// calls handlers in the order they subscribed.
#[derive(Default)]
pub struct EventDispatcher {
    next_id: AtomicU64,
    subscriptions: RwLock<Vec<Subscription>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, event_type: EventType, handler: Arc<dyn EventHandler>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscriptions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Subscription {
                id,
                event_type,
                handler,
            });
        id
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn disconnect(&self, id: SubscriptionId) -> bool {
        let mut subs = self
            .subscriptions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = subs.len();
        subs.retain(|s| s.id != id);
        before != subs.len()
    }

    pub fn subscriber_count(&self, event_type: EventType) -> usize {
        self.subscriptions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|s| s.event_type == event_type)
            .count()
    }

    /// Deliver `event` to every matching handler. Returns how many ran.
    pub async fn emit(&self, event: &MediaEvent) -> usize {
        // snapshot so handlers may subscribe or disconnect while running
        let handlers: Vec<Arc<dyn EventHandler>> = self
            .subscriptions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|s| s.event_type == event.event_type)
            .map(|s| Arc::clone(&s.handler))
            .collect();

        for handler in &handlers {
            handler.handle(event).await;
        }
        handlers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::ObjectId;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Recorder {
        tag: &'static str,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    #[async_trait]
    impl EventHandler for Recorder {
        async fn handle(&self, _event: &MediaEvent) {
            self.log.lock().unwrap().push(self.tag);
        }
    }

    fn error_event() -> MediaEvent {
        MediaEvent::error(ObjectId::from("p/1_X"), 1, "boom")
    }

    #[tokio::test]
    async fn test_emit_runs_handlers_in_subscription_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let dispatcher = EventDispatcher::new();
        for tag in ["first", "second", "third"] {
            dispatcher.subscribe(
                EventType::Error,
                Arc::new(Recorder {
                    tag,
                    log: Arc::clone(&log),
                }),
            );
        }

        assert_eq!(dispatcher.emit(&error_event()).await, 3);
        assert_eq!(*log.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_duplicate_subscription_fires_twice() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let dispatcher = EventDispatcher::new();
        let handler: Arc<dyn EventHandler> = Arc::new(Recorder {
            tag: "dup",
            log: Arc::clone(&log),
        });
        dispatcher.subscribe(EventType::Error, Arc::clone(&handler));
        dispatcher.subscribe(EventType::Error, handler);

        dispatcher.emit(&error_event()).await;
        assert_eq!(log.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_disconnect_and_filtering() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let dispatcher = EventDispatcher::new();
        let id = dispatcher.subscribe(
            EventType::Error,
            Arc::new(Recorder {
                tag: "err",
                log: Arc::clone(&log),
            }),
        );
        dispatcher.subscribe(
            EventType::MediaFlowInStateChanged,
            Arc::new(Recorder {
                tag: "flow",
                log: Arc::clone(&log),
            }),
        );

        assert!(dispatcher.disconnect(id));
        assert!(!dispatcher.disconnect(id));
        assert_eq!(dispatcher.subscriber_count(EventType::Error), 0);

        assert_eq!(dispatcher.emit(&error_event()).await, 0);
        assert!(log.lock().unwrap().is_empty());
    }
}
