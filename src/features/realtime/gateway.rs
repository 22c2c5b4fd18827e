use tokio::sync::broadcast;

use crate::features::realtime::events::RealtimeEvent;

const DEFAULT_BUS_CAPACITY: usize = 256;

/// In-process event bus behind the WebSocket endpoint. Services publish
/// through [`AlertPublisher`]; each connected client holds a receiver and
/// filters by its own rooms.
pub struct RealtimeGateway {
    tx: broadcast::Sender<RealtimeEvent>,
}

impl RealtimeGateway {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUS_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Narrow publishing handle for services. Cheap to clone.
    pub fn publisher(&self) -> AlertPublisher {
        AlertPublisher {
            tx: self.tx.clone(),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RealtimeEvent> {
        self.tx.subscribe()
    }
}

impl Default for RealtimeGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct AlertPublisher {
    tx: broadcast::Sender<RealtimeEvent>,
}

impl AlertPublisher {
    /// Publish an event to every connected client's receiver. A send error
    /// just means nobody is connected; delivery is best-effort either way.
    pub fn publish(&self, event: RealtimeEvent) {
        let room = event.room.clone();
        let name = event.event;
        match self.tx.send(event) {
            Ok(receivers) => {
                tracing::debug!(room = %room, event = name, receivers, "Published realtime event");
            }
            Err(_) => {
                tracing::debug!(room = %room, event = name, "No realtime subscribers");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::realtime::events::EVENT_TEST_NOTIFICATION;
    use serde_json::json;
    use uuid::Uuid;

    #[tokio::test]
    async fn published_events_reach_subscribers() {
        let gateway = RealtimeGateway::new();
        let mut rx = gateway.subscribe();

        let user_id = Uuid::new_v4();
        gateway.publisher().publish(RealtimeEvent::user(
            user_id,
            EVENT_TEST_NOTIFICATION,
            json!({"message": "hello"}),
        ));

        let event = rx.recv().await.unwrap();
        assert_eq!(event.room, format!("user:{}", user_id));
        assert_eq!(event.event, EVENT_TEST_NOTIFICATION);
    }

    #[tokio::test]
    async fn publish_without_subscribers_does_not_panic() {
        let gateway = RealtimeGateway::new();
        gateway
            .publisher()
            .publish(RealtimeEvent::user(Uuid::new_v4(), EVENT_TEST_NOTIFICATION, json!({})));
    }
}
