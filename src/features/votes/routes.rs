use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::features::votes::handlers;
use crate::features::votes::services::VoteService;

/// Summary is public (with optional-auth annotation upstream).
pub fn public_routes(vote_service: Arc<VoteService>) -> Router {
    Router::new()
        .route("/api/votes/{incidentId}/summary", get(handlers::get_summary))
        .with_state(vote_service)
}

/// Casting requires bearer auth.
pub fn protected_routes(vote_service: Arc<VoteService>) -> Router {
    Router::new()
        .route("/api/votes/{incidentId}/vote", post(handlers::cast_vote))
        .with_state(vote_service)
}
