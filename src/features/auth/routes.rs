use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::features::auth::handlers;
use crate::features::auth::services::AuthService;

/// Register and login stand outside the auth layer.
pub fn public_routes(auth_service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/auth/register", post(handlers::register))
        .route("/api/auth/login", post(handlers::login))
        .with_state(auth_service)
}

/// Routes that need a bearer token.
pub fn protected_routes(auth_service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/auth/me", get(handlers::me))
        .with_state(auth_service)
}
