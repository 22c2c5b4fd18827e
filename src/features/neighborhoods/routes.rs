use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::neighborhoods::handlers;
use crate::features::neighborhoods::services::NeighborhoodService;

/// Create public neighborhood routes
pub fn routes(neighborhood_service: Arc<NeighborhoodService>) -> Router {
    Router::new()
        .route("/api/neighborhoods", get(handlers::list_neighborhoods))
        .route("/api/neighborhoods/{id}", get(handlers::get_neighborhood))
        .with_state(neighborhood_service)
}
