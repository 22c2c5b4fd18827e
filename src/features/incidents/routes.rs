use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::features::incidents::handlers;
use crate::features::incidents::services::IncidentService;

/// Read endpoints. Open to everyone; an optional-auth layer upstream
/// annotates results with the caller's votes when a token is present.
pub fn public_routes(incident_service: Arc<IncidentService>) -> Router {
    Router::new()
        .route("/api/incidents", get(handlers::list_incidents))
        .route("/api/incidents/stats/summary", get(handlers::get_stats_summary))
        .route("/api/incidents/{id}", get(handlers::get_incident))
        .with_state(incident_service)
}

/// Write endpoints, all behind bearer auth.
pub fn protected_routes(incident_service: Arc<IncidentService>) -> Router {
    Router::new()
        .route("/api/incidents", post(handlers::create_incident))
        .route("/api/incidents/{id}", put(handlers::update_incident))
        .route("/api/incidents/{id}/vote", post(handlers::vote_incident))
        .route("/api/incidents/{id}/comments", post(handlers::add_comment))
        .with_state(incident_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;
    use sqlx::postgres::PgPoolOptions;
    use uuid::Uuid;

    use crate::features::realtime::RealtimeGateway;
    use crate::shared::test_helpers::{create_resident_user, with_auth, with_moderator_auth};

    // Lazy pool: nothing connects unless a query runs, and both requests
    // below are rejected before the service touches the database.
    fn service() -> Arc<IncidentService> {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/safehood_test")
            .unwrap();
        Arc::new(IncidentService::new(
            pool,
            RealtimeGateway::default().publisher(),
        ))
    }

    #[tokio::test]
    async fn resident_moderation_attempt_is_forbidden() {
        let router = with_auth(protected_routes(service()), create_resident_user());
        let server = TestServer::new(router).unwrap();

        let response = server
            .put(&format!("/api/incidents/{}", Uuid::new_v4()))
            .json(&json!({ "status": "resolved" }))
            .await;

        response.assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn empty_comment_is_rejected_before_any_write() {
        let router = with_moderator_auth(protected_routes(service()));
        let server = TestServer::new(router).unwrap();

        let response = server
            .post(&format!("/api/incidents/{}/comments", Uuid::new_v4()))
            .json(&json!({ "text": "" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
