use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::AppError;
use crate::features::neighborhoods::models::Neighborhood;
use crate::features::neighborhoods::services::NeighborhoodService;
use crate::shared::types::{ApiResponse, Meta};

/// List known neighborhoods
#[utoipa::path(
    get,
    path = "/api/neighborhoods",
    tag = "Neighborhoods",
    responses(
        (status = 200, description = "Neighborhoods", body = ApiResponse<Vec<Neighborhood>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_neighborhoods(
    State(service): State<Arc<NeighborhoodService>>,
) -> Result<Json<ApiResponse<Vec<Neighborhood>>>, AppError> {
    let neighborhoods = service.list().await?;
    let total = neighborhoods.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(neighborhoods),
        None,
        Some(Meta { total }),
    )))
}

/// Get a single neighborhood
#[utoipa::path(
    get,
    path = "/api/neighborhoods/{id}",
    tag = "Neighborhoods",
    params(
        ("id" = Uuid, Path, description = "Neighborhood ID")
    ),
    responses(
        (status = 200, description = "Neighborhood detail", body = ApiResponse<Neighborhood>),
        (status = 404, description = "Neighborhood not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_neighborhood(
    State(service): State<Arc<NeighborhoodService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Neighborhood>>, AppError> {
    let neighborhood = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(neighborhood), None, None)))
}
