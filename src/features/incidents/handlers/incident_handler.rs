use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::AppError;
use crate::core::extractor::{AppJson, OptionalUser};
use crate::features::auth::AuthenticatedUser;
use crate::features::incidents::dtos::*;
use crate::features::incidents::services::IncidentService;
use crate::shared::types::ApiResponse;

// ============================================================================
// Creation
// ============================================================================

/// Report a new incident
#[utoipa::path(
    post,
    path = "/api/incidents",
    tag = "Incidents",
    security(("bearer_auth" = [])),
    request_body = CreateIncidentDto,
    responses(
        (status = 201, description = "Incident created", body = ApiResponse<IncidentResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_incident(
    State(service): State<Arc<IncidentService>>,
    auth: AuthenticatedUser,
    AppJson(dto): AppJson<CreateIncidentDto>,
) -> Result<(StatusCode, Json<ApiResponse<IncidentResponseDto>>), AppError> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let incident = service.create(&auth, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(incident),
            Some("Incident reported".to_string()),
            None,
        )),
    ))
}

// ============================================================================
// Listing
// ============================================================================

/// List incidents with optional filters
#[utoipa::path(
    get,
    path = "/api/incidents",
    tag = "Incidents",
    params(IncidentQuery),
    responses(
        (status = 200, description = "Paginated incidents", body = ApiResponse<IncidentListResponseDto>),
        (status = 400, description = "Invalid filter"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_incidents(
    State(service): State<Arc<IncidentService>>,
    OptionalUser(viewer): OptionalUser,
    Query(query): Query<IncidentQuery>,
) -> Result<Json<ApiResponse<IncidentListResponseDto>>, AppError> {
    let data = service.list(&query, viewer.map(|u| u.id)).await?;
    Ok(Json(ApiResponse::success(Some(data), None, None)))
}

/// Fetch one incident with reporter, neighborhood, and comments populated
#[utoipa::path(
    get,
    path = "/api/incidents/{id}",
    tag = "Incidents",
    params(
        ("id" = Uuid, Path, description = "Incident ID")
    ),
    responses(
        (status = 200, description = "Incident detail", body = ApiResponse<IncidentResponseDto>),
        (status = 404, description = "Incident not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_incident(
    State(service): State<Arc<IncidentService>>,
    OptionalUser(viewer): OptionalUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<IncidentResponseDto>>, AppError> {
    let incident = service.get_detail(id, viewer.map(|u| u.id)).await?;
    Ok(Json(ApiResponse::success(Some(incident), None, None)))
}

/// Aggregate incident statistics
#[utoipa::path(
    get,
    path = "/api/incidents/stats/summary",
    tag = "Incidents",
    responses(
        (status = 200, description = "Statistics summary", body = ApiResponse<StatsSummaryDto>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_stats_summary(
    State(service): State<Arc<IncidentService>>,
) -> Result<Json<ApiResponse<StatsSummaryDto>>, AppError> {
    let stats = service.stats_summary().await?;
    Ok(Json(ApiResponse::success(Some(stats), None, None)))
}

// ============================================================================
// Moderation
// ============================================================================

/// Update incident verification, status, or resolution notes
#[utoipa::path(
    put,
    path = "/api/incidents/{id}",
    tag = "Incidents",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Incident ID")
    ),
    request_body = UpdateIncidentDto,
    responses(
        (status = 200, description = "Updated incident", body = ApiResponse<IncidentResponseDto>),
        (status = 400, description = "Validation error or illegal transition"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller cannot moderate"),
        (status = 404, description = "Incident not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_incident(
    State(service): State<Arc<IncidentService>>,
    auth: AuthenticatedUser,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateIncidentDto>,
) -> Result<Json<ApiResponse<IncidentResponseDto>>, AppError> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let incident = service.moderate(&auth, id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(incident),
        Some("Incident updated".to_string()),
        None,
    )))
}

// ============================================================================
// Voting and comments
// ============================================================================

/// Cast or change a relevance vote
#[utoipa::path(
    post,
    path = "/api/incidents/{id}/vote",
    tag = "Incidents",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Incident ID")
    ),
    request_body = VoteRequestDto,
    responses(
        (status = 200, description = "Updated vote counts", body = ApiResponse<VoteResultDto>),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Incident not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn vote_incident(
    State(service): State<Arc<IncidentService>>,
    auth: AuthenticatedUser,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<VoteRequestDto>,
) -> Result<Json<ApiResponse<VoteResultDto>>, AppError> {
    let (upvotes, downvotes, user_vote) = service.cast_vote(&auth, id, dto.vote_type).await?;
    Ok(Json(ApiResponse::success(
        Some(VoteResultDto {
            upvotes,
            downvotes,
            user_vote,
        }),
        None,
        None,
    )))
}

/// Comment on an incident
#[utoipa::path(
    post,
    path = "/api/incidents/{id}/comments",
    tag = "Incidents",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Incident ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment added", body = ApiResponse<CommentDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Incident not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn add_comment(
    State(service): State<Arc<IncidentService>>,
    auth: AuthenticatedUser,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<CreateCommentDto>,
) -> Result<(StatusCode, Json<ApiResponse<CommentDto>>), AppError> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let comment = service.add_comment(&auth, id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(comment), None, None)),
    ))
}
