use axum::{routing::get, Router};

use crate::features::realtime::handlers::{ws_upgrade, RealtimeState};

/// Create the WebSocket route
pub fn routes(state: RealtimeState) -> Router {
    Router::new().route("/ws", get(ws_upgrade)).with_state(state)
}
