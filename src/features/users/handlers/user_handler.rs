use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::AppError;
use crate::core::extractor::AppJson;
use crate::features::auth::AuthenticatedUser;
use crate::features::users::dtos::*;
use crate::features::users::services::UserService;
use crate::shared::types::ApiResponse;

const LEADERBOARD_SIZE: i64 = 10;
const DEFAULT_SEARCH_LIMIT: i64 = 10;

// ============================================================================
// Profile
// ============================================================================

/// Get the caller's own profile
#[utoipa::path(
    get,
    path = "/api/users/profile",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user profile", body = ApiResponse<PublicProfileDto>),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_profile(
    State(service): State<Arc<UserService>>,
    auth: AuthenticatedUser,
) -> Result<Json<ApiResponse<PublicProfileDto>>, AppError> {
    let user = service.get_by_id(auth.id).await?;
    Ok(Json(ApiResponse::success(
        Some(PublicProfileDto::from(user)),
        None,
        None,
    )))
}

/// Update the caller's profile and notification preferences
#[utoipa::path(
    put,
    path = "/api/users/me",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = ApiResponse<PublicProfileDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_profile(
    State(service): State<Arc<UserService>>,
    auth: AuthenticatedUser,
    AppJson(dto): AppJson<UpdateProfileDto>,
) -> Result<Json<ApiResponse<PublicProfileDto>>, AppError> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = service.update_profile(auth.id, &dto).await?;
    Ok(Json(ApiResponse::success(
        Some(PublicProfileDto::from(user)),
        Some("Profile updated".to_string()),
        None,
    )))
}

// ============================================================================
// Community
// ============================================================================

/// List community members
#[utoipa::path(
    get,
    path = "/api/users/community",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Community members", body = ApiResponse<Vec<CommunityMemberDto>>),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_community(
    State(service): State<Arc<UserService>>,
    _auth: AuthenticatedUser,
) -> Result<Json<ApiResponse<Vec<CommunityMemberDto>>>, AppError> {
    let members = service.list_community().await?;
    let dtos: Vec<CommunityMemberDto> = members.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// Top contributors ranked by report activity
#[utoipa::path(
    get,
    path = "/api/users/leaderboard",
    tag = "Users",
    responses(
        (status = 200, description = "Leaderboard", body = ApiResponse<Vec<LeaderboardEntryDto>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_leaderboard(
    State(service): State<Arc<UserService>>,
) -> Result<Json<ApiResponse<Vec<LeaderboardEntryDto>>>, AppError> {
    let entries = service.leaderboard(LEADERBOARD_SIZE).await?;
    Ok(Json(ApiResponse::success(Some(entries), None, None)))
}

/// Personal report statistics for the caller
#[utoipa::path(
    get,
    path = "/api/users/stats",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Personal statistics", body = ApiResponse<UserStatsDto>),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_stats(
    State(service): State<Arc<UserService>>,
    auth: AuthenticatedUser,
) -> Result<Json<ApiResponse<UserStatsDto>>, AppError> {
    let user = service.get_by_id(auth.id).await?;
    let stats = service.personal_stats(&user).await?;
    Ok(Json(ApiResponse::success(Some(stats), None, None)))
}

/// Public profile of another member
#[utoipa::path(
    get,
    path = "/api/users/profile/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Public profile", body = ApiResponse<PublicProfileDto>),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_public_profile(
    State(service): State<Arc<UserService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PublicProfileDto>>, AppError> {
    let user = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(
        Some(PublicProfileDto::from(user)),
        None,
        None,
    )))
}

/// Search members by name
#[utoipa::path(
    get,
    path = "/api/users/search",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(UserSearchQuery),
    responses(
        (status = 200, description = "Matching members", body = ApiResponse<Vec<PublicProfileDto>>),
        (status = 400, description = "Search term too short"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn search_users(
    State(service): State<Arc<UserService>>,
    auth: AuthenticatedUser,
    Query(query): Query<UserSearchQuery>,
) -> Result<Json<ApiResponse<Vec<PublicProfileDto>>>, AppError> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let limit = query.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    let users = service.search(&query.q, limit, auth.id).await?;
    let dtos: Vec<PublicProfileDto> = users.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

// ============================================================================
// Admin
// ============================================================================

/// Full user listing for administrators
#[utoipa::path(
    get,
    path = "/api/users/admin/all",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All users", body = ApiResponse<Vec<AdminUserDto>>),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_all_users(
    State(service): State<Arc<UserService>>,
    auth: AuthenticatedUser,
) -> Result<Json<ApiResponse<Vec<AdminUserDto>>>, AppError> {
    if !auth.is_admin() {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }

    let users = service.list_community().await?;
    let dtos: Vec<AdminUserDto> = users.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// Assign a member's role
#[utoipa::path(
    put,
    path = "/api/users/admin/{id}/role",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Updated user", body = ApiResponse<AdminUserDto>),
        (status = 400, description = "Unknown role"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_user_role(
    State(service): State<Arc<UserService>>,
    auth: AuthenticatedUser,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateRoleDto>,
) -> Result<Json<ApiResponse<AdminUserDto>>, AppError> {
    if !auth.is_admin() {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }

    let user = service.update_role(id, dto.role).await?;
    Ok(Json(ApiResponse::success(
        Some(AdminUserDto::from(user)),
        Some("Role updated".to_string()),
        None,
    )))
}
