use axum::{
    extract::{
        ws::{Message, WebSocket},
        Query, State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use std::sync::Arc;
use tokio::time::{interval, Duration};

use crate::core::error::{AppError, Result};
use crate::features::auth::services::TokenService;
use crate::features::realtime::gateway::RealtimeGateway;
use crate::features::users::UserService;

/// Query parameters for the WebSocket upgrade
#[derive(Debug, Deserialize)]
pub struct WsQuery {
    pub token: String,
}

#[derive(Clone)]
pub struct RealtimeState {
    pub tokens: Arc<TokenService>,
    pub users: Arc<UserService>,
    pub gateway: Arc<RealtimeGateway>,
}

/// WebSocket upgrade handler for `/ws`.
///
/// Authentication happens BEFORE the upgrade, so a bad token gets a plain
/// 401 and no connection is opened. Room membership is derived from the
/// authenticated user's record; clients cannot join arbitrary rooms.
pub async fn ws_upgrade(
    ws: WebSocketUpgrade,
    State(state): State<RealtimeState>,
    Query(query): Query<WsQuery>,
) -> Result<impl IntoResponse> {
    let auth = state.tokens.verify(&query.token)?;
    let user = state
        .users
        .get_by_id(auth.id)
        .await
        .map_err(|_| AppError::Unauthorized("Invalid authentication token".to_string()))?;

    let mut rooms = vec![format!("user:{}", user.id)];
    if let Some(neighborhood_id) = user.neighborhood_id {
        rooms.push(format!("neighborhood:{}", neighborhood_id));
    }

    tracing::debug!(user_id = %user.id, rooms = ?rooms, "WebSocket client authenticated");

    let gateway = state.gateway.clone();
    Ok(ws.on_upgrade(move |socket| handle_socket(socket, gateway, rooms)))
}

async fn handle_socket(socket: WebSocket, gateway: Arc<RealtimeGateway>, rooms: Vec<String>) {
    let (mut sender, mut receiver) = socket.split();
    let mut events = gateway.subscribe();

    // Ping interval (30s); skip the immediate first tick
    let mut ping_interval = interval(Duration::from_secs(30));
    ping_interval.tick().await;

    loop {
        tokio::select! {
            result = events.recv() => {
                match result {
                    Ok(event) => {
                        if !rooms.contains(&event.room) {
                            continue;
                        }

                        let frame = serde_json::json!({
                            "event": event.event,
                            "data": event.payload,
                        });

                        match serde_json::to_string(&frame) {
                            Ok(json) => {
                                if sender.send(Message::Text(json.into())).await.is_err() {
                                    tracing::debug!("WebSocket send failed, client disconnected");
                                    break;
                                }
                            }
                            Err(e) => {
                                tracing::warn!("Failed to serialize realtime event: {}", e);
                            }
                        }
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(skipped = n, "WebSocket client lagged, skipping events");
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => {
                        tracing::debug!("Event bus closed, shutting down WebSocket");
                        break;
                    }
                }
            }

            _ = ping_interval.tick() => {
                if sender.send(Message::Ping(vec![].into())).await.is_err() {
                    tracing::debug!("Ping failed, client disconnected");
                    break;
                }
            }

            msg = receiver.next() => {
                match msg {
                    Some(Ok(Message::Pong(_))) => {}
                    Some(Ok(Message::Close(_))) | None => {
                        tracing::debug!("WebSocket client disconnected");
                        break;
                    }
                    Some(Err(e)) => {
                        tracing::debug!("WebSocket error: {}", e);
                        break;
                    }
                    // Clients have nothing to say; ignore text/binary
                    _ => {}
                }
            }
        }
    }
}
