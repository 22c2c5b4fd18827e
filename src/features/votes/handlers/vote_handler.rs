use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::AppError;
use crate::core::extractor::{AppJson, OptionalUser};
use crate::features::auth::AuthenticatedUser;
use crate::features::votes::dtos::{AuthenticityVoteDto, VoteSummaryDto};
use crate::features::votes::services::VoteService;
use crate::shared::types::ApiResponse;

/// Cast or change an authenticity judgment
#[utoipa::path(
    post,
    path = "/api/votes/{incidentId}/vote",
    tag = "Votes",
    security(("bearer_auth" = [])),
    params(
        ("incidentId" = Uuid, Path, description = "Incident ID")
    ),
    request_body = AuthenticityVoteDto,
    responses(
        (status = 200, description = "Updated summary", body = ApiResponse<VoteSummaryDto>),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Incident not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn cast_vote(
    State(service): State<Arc<VoteService>>,
    auth: AuthenticatedUser,
    Path(incident_id): Path<Uuid>,
    AppJson(dto): AppJson<AuthenticityVoteDto>,
) -> Result<Json<ApiResponse<VoteSummaryDto>>, AppError> {
    let summary = service.cast(incident_id, auth.id, dto.vote).await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}

/// Vote tallies plus the caller's own judgment
#[utoipa::path(
    get,
    path = "/api/votes/{incidentId}/summary",
    tag = "Votes",
    params(
        ("incidentId" = Uuid, Path, description = "Incident ID")
    ),
    responses(
        (status = 200, description = "Vote summary", body = ApiResponse<VoteSummaryDto>),
        (status = 404, description = "Incident not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_summary(
    State(service): State<Arc<VoteService>>,
    OptionalUser(viewer): OptionalUser,
    Path(incident_id): Path<Uuid>,
) -> Result<Json<ApiResponse<VoteSummaryDto>>, AppError> {
    let summary = service.summary(incident_id, viewer.map(|u| u.id)).await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}
