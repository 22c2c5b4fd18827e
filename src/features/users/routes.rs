use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use crate::features::users::handlers;
use crate::features::users::services::UserService;

/// Routes that require an authenticated caller.
pub fn protected_routes(user_service: Arc<UserService>) -> Router {
    Router::new()
        .route("/api/users/profile", get(handlers::get_profile))
        .route("/api/users/me", put(handlers::update_profile))
        .route("/api/users/community", get(handlers::list_community))
        .route("/api/users/search", get(handlers::search_users))
        .route("/api/users/stats", get(handlers::get_stats))
        .route("/api/users/admin/all", get(handlers::list_all_users))
        .route("/api/users/admin/{id}/role", put(handlers::update_user_role))
        .with_state(user_service)
}

/// Routes open to anyone.
pub fn public_routes(user_service: Arc<UserService>) -> Router {
    Router::new()
        .route("/api/users/leaderboard", get(handlers::get_leaderboard))
        .route("/api/users/profile/{id}", get(handlers::get_public_profile))
        .with_state(user_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;
    use sqlx::postgres::PgPoolOptions;
    use uuid::Uuid;

    use crate::shared::test_helpers::{create_resident_user, with_auth};

    fn service() -> Arc<UserService> {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/safehood_test")
            .unwrap();
        Arc::new(UserService::new(pool))
    }

    #[tokio::test]
    async fn non_admin_cannot_assign_roles() {
        let router = with_auth(protected_routes(service()), create_resident_user());
        let server = TestServer::new(router).unwrap();

        let response = server
            .put(&format!("/api/users/admin/{}/role", Uuid::new_v4()))
            .json(&json!({ "role": "moderator" }))
            .await;

        response.assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn short_search_term_is_rejected() {
        let router = with_auth(protected_routes(service()), create_resident_user());
        let server = TestServer::new(router).unwrap();

        let response = server
            .get("/api/users/search")
            .add_query_param("q", "a")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
