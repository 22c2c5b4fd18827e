use axum::{routing::get, Router};

use crate::features::safety::handlers;

/// Create public safety-information routes
pub fn routes() -> Router {
    Router::new()
        .route("/api/safety/emergency-contacts", get(handlers::get_contacts))
        .route("/api/safety/tips", get(handlers::get_tips))
        .route("/api/safety/resources", get(handlers::get_resources))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use serde_json::Value;

    #[tokio::test]
    async fn contacts_endpoint_returns_envelope() {
        let server = TestServer::new(routes()).unwrap();
        let response = server.get("/api/safety/emergency-contacts").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert!(body["data"].as_array().is_some_and(|a| !a.is_empty()));
    }

    #[tokio::test]
    async fn tips_endpoint_honors_category_filter() {
        let server = TestServer::new(routes()).unwrap();
        let response = server
            .get("/api/safety/tips")
            .add_query_param("category", "vehicle")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        let tips = body["data"].as_array().unwrap();
        assert!(tips.iter().all(|t| t["category"] == "vehicle"));
    }
}
