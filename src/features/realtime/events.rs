use serde_json::Value;
use uuid::Uuid;

pub const EVENT_INCIDENT_ALERT: &str = "incident-alert";
pub const EVENT_EMERGENCY_ALERT: &str = "emergency-alert";
pub const EVENT_TEST_NOTIFICATION: &str = "test-notification";
pub const EVENT_VOTE_UPDATED: &str = "vote-updated";

/// A message addressed to one delivery room. Rooms are derived server-side
/// from the recipient's record, never chosen by the client.
#[derive(Debug, Clone)]
pub struct RealtimeEvent {
    pub room: String,
    pub event: &'static str,
    pub payload: Value,
}

impl RealtimeEvent {
    pub fn user(user_id: Uuid, event: &'static str, payload: Value) -> Self {
        Self {
            room: format!("user:{}", user_id),
            event,
            payload,
        }
    }

    pub fn neighborhood(neighborhood_id: Uuid, event: &'static str, payload: Value) -> Self {
        Self {
            room: format!("neighborhood:{}", neighborhood_id),
            event,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rooms_are_scoped_by_kind() {
        let id = Uuid::nil();
        let user_event = RealtimeEvent::user(id, EVENT_TEST_NOTIFICATION, json!({}));
        let hood_event = RealtimeEvent::neighborhood(id, EVENT_INCIDENT_ALERT, json!({}));

        assert!(user_event.room.starts_with("user:"));
        assert!(hood_event.room.starts_with("neighborhood:"));
        assert_ne!(user_event.room, hood_event.room);
    }
}
