use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::features::alerts::handlers;
use crate::features::alerts::services::AlertService;

/// All alert routes require bearer auth; the emergency broadcast also
/// checks the caller's role inside the service.
pub fn routes(alert_service: Arc<AlertService>) -> Router {
    Router::new()
        .route("/api/alerts/test", post(handlers::send_test))
        .route("/api/alerts/incident", post(handlers::send_incident_alert))
        .route("/api/alerts/emergency", post(handlers::send_emergency))
        .route("/api/alerts/history", get(handlers::get_history))
        .with_state(alert_service)
}
