use axum::{extract::Query, Json};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::features::safety::data::{
    EmergencyContact, SafetyResource, SafetyTip, EMERGENCY_CONTACTS, SAFETY_RESOURCES, SAFETY_TIPS,
};
use crate::shared::types::ApiResponse;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct TipsQuery {
    /// Filter tips by category (home, vehicle, walking, reporting)
    pub category: Option<String>,
}

/// Emergency contact numbers
#[utoipa::path(
    get,
    path = "/api/safety/emergency-contacts",
    tag = "Safety",
    responses(
        (status = 200, description = "Emergency contacts", body = ApiResponse<Vec<EmergencyContact>>)
    )
)]
pub async fn get_contacts() -> Json<ApiResponse<Vec<EmergencyContact>>> {
    Json(ApiResponse::success(
        Some(EMERGENCY_CONTACTS.to_vec()),
        None,
        None,
    ))
}

/// Safety tips, optionally filtered by category
#[utoipa::path(
    get,
    path = "/api/safety/tips",
    tag = "Safety",
    params(TipsQuery),
    responses(
        (status = 200, description = "Safety tips", body = ApiResponse<Vec<SafetyTip>>)
    )
)]
pub async fn get_tips(Query(query): Query<TipsQuery>) -> Json<ApiResponse<Vec<SafetyTip>>> {
    let tips: Vec<SafetyTip> = match query.category.as_deref() {
        Some(category) => SAFETY_TIPS
            .iter()
            .filter(|t| t.category.eq_ignore_ascii_case(category))
            .cloned()
            .collect(),
        None => SAFETY_TIPS.to_vec(),
    };

    Json(ApiResponse::success(Some(tips), None, None))
}

/// External preparedness resources
#[utoipa::path(
    get,
    path = "/api/safety/resources",
    tag = "Safety",
    responses(
        (status = 200, description = "Safety resources", body = ApiResponse<Vec<SafetyResource>>)
    )
)]
pub async fn get_resources() -> Json<ApiResponse<Vec<SafetyResource>>> {
    Json(ApiResponse::success(
        Some(SAFETY_RESOURCES.to_vec()),
        None,
        None,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn category_filter_is_case_insensitive() {
        let response = get_tips(Query(TipsQuery {
            category: Some("HOME".to_string()),
        }))
        .await;

        let tips = response.0.data.unwrap();
        assert!(!tips.is_empty());
        assert!(tips.iter().all(|t| t.category == "home"));
    }

    #[tokio::test]
    async fn unknown_category_returns_empty_list() {
        let response = get_tips(Query(TipsQuery {
            category: Some("boating".to_string()),
        }))
        .await;

        assert!(response.0.data.unwrap().is_empty());
    }
}
