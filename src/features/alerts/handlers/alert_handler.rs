use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::AppError;
use crate::core::extractor::AppJson;
use crate::features::alerts::dtos::*;
use crate::features::alerts::services::AlertService;
use crate::features::auth::AuthenticatedUser;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Send the caller a loopback test notification
#[utoipa::path(
    post,
    path = "/api/alerts/test",
    tag = "Alerts",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Test notification queued"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn send_test(
    State(service): State<Arc<AlertService>>,
    auth: AuthenticatedUser,
) -> Result<Json<ApiResponse<()>>, AppError> {
    service.send_test(&auth);
    Ok(Json(ApiResponse::success(
        None,
        Some("Test notification sent".to_string()),
        None,
    )))
}

/// Notify nearby push subscribers about an incident
#[utoipa::path(
    post,
    path = "/api/alerts/incident",
    tag = "Alerts",
    security(("bearer_auth" = [])),
    request_body = IncidentAlertDto,
    responses(
        (status = 200, description = "Alert fan-out complete", body = ApiResponse<AlertDeliveryDto>),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Incident not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn send_incident_alert(
    State(service): State<Arc<AlertService>>,
    _auth: AuthenticatedUser,
    AppJson(dto): AppJson<IncidentAlertDto>,
) -> Result<Json<ApiResponse<AlertDeliveryDto>>, AppError> {
    let recipients = service.send_incident_alert(&dto).await?;
    Ok(Json(ApiResponse::success(
        Some(AlertDeliveryDto { recipients }),
        Some("Incident alert sent".to_string()),
        None,
    )))
}

/// Broadcast an emergency to a wider radius
#[utoipa::path(
    post,
    path = "/api/alerts/emergency",
    tag = "Alerts",
    security(("bearer_auth" = [])),
    request_body = EmergencyAlertDto,
    responses(
        (status = 200, description = "Broadcast complete", body = ApiResponse<AlertDeliveryDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller cannot send emergency broadcasts"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn send_emergency(
    State(service): State<Arc<AlertService>>,
    auth: AuthenticatedUser,
    AppJson(dto): AppJson<EmergencyAlertDto>,
) -> Result<Json<ApiResponse<AlertDeliveryDto>>, AppError> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let recipients = service.send_emergency(&auth, &dto).await?;
    Ok(Json(ApiResponse::success(
        Some(AlertDeliveryDto { recipients }),
        Some("Emergency broadcast sent".to_string()),
        None,
    )))
}

/// Broadcast incidents within the caller's alert radius, newest first
#[utoipa::path(
    get,
    path = "/api/alerts/history",
    tag = "Alerts",
    security(("bearer_auth" = [])),
    params(PaginationQuery),
    responses(
        (status = 200, description = "Alert history", body = ApiResponse<Vec<AlertHistoryEntryDto>>),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_history(
    State(service): State<Arc<AlertService>>,
    auth: AuthenticatedUser,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<AlertHistoryEntryDto>>>, AppError> {
    let (entries, meta) = service.history(&auth, &pagination).await?;
    Ok(Json(ApiResponse::success(
        Some(entries),
        None,
        Some(Meta { total: meta.total }),
    )))
}
