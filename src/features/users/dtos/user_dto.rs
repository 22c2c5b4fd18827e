use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::users::models::{User, UserRole};

/// Public profile view. Email, phone, and password hash are never exposed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfileDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub is_verified: bool,
    pub neighborhood_id: Option<Uuid>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub reports_submitted: i32,
    pub reports_verified: i32,
    pub community_score: i32,
    pub joined_at: DateTime<Utc>,
}

impl From<User> for PublicProfileDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            role: u.role,
            is_verified: u.is_verified,
            neighborhood_id: u.neighborhood_id,
            city: u.city,
            state: u.state,
            reports_submitted: u.reports_submitted,
            reports_verified: u.reports_verified,
            community_score: u.community_score,
            joined_at: u.created_at,
        }
    }
}

/// Member entry in the community directory (authenticated view).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommunityMemberDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub area: String,
    pub role: UserRole,
    pub joined_date: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
    pub incidents_reported: i32,
}

impl From<User> for CommunityMemberDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
            phone: u.phone,
            area: u.city.unwrap_or_default(),
            role: u.role,
            joined_date: u.created_at,
            last_active: u.last_active,
            incidents_reported: u.reports_submitted,
        }
    }
}

/// Full user record for the admin listing. Password hash stays out of
/// every wire representation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserDto {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub is_verified: bool,
    pub neighborhood_id: Option<Uuid>,
    pub push_enabled: bool,
    pub email_enabled: bool,
    pub sms_enabled: bool,
    pub alert_radius_miles: f64,
    pub reports_submitted: i32,
    pub reports_verified: i32,
    pub community_score: i32,
    pub last_active: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for AdminUserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            phone: u.phone,
            role: u.role,
            is_verified: u.is_verified,
            neighborhood_id: u.neighborhood_id,
            push_enabled: u.push_enabled,
            email_enabled: u.email_enabled,
            sms_enabled: u.sms_enabled,
            alert_radius_miles: u.alert_radius_miles,
            reports_submitted: u.reports_submitted,
            reports_verified: u.reports_verified,
            community_score: u.community_score,
            last_active: u.last_active,
            created_at: u.created_at,
        }
    }
}

/// Leaderboard entry with the composite community score:
/// reports * 10 + verified reports * 20 + accumulated score.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntryDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub reports_submitted: i32,
    pub reports_verified: i32,
    pub score: i64,
}

/// Personal report statistics for the authenticated caller.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserStatsDto {
    pub reports_submitted: i64,
    pub reports_verified: i64,
    pub reports_this_month: i64,
    pub nearby_incidents: i64,
    pub community_score: i32,
}

/// Notification preference block, updatable via the profile endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferencesDto {
    pub push_enabled: Option<bool>,
    pub push_types: Option<Vec<String>>,
    pub email_enabled: Option<bool>,
    pub email_types: Option<Vec<String>>,
    pub sms_enabled: Option<bool>,
    pub sms_types: Option<Vec<String>>,
    #[validate(range(min = 1.0, max = 50.0, message = "Radius must be 1-50 miles"))]
    pub alert_radius_miles: Option<f64>,
}

/// Partial profile update for the authenticated caller.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileDto {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: Option<String>,

    #[validate(length(max = 30, message = "Phone must not exceed 30 characters"))]
    pub phone: Option<String>,

    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be -90..90"))]
    pub lat: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be -180..180"))]
    pub lng: Option<f64>,

    #[validate(nested)]
    pub notification_preferences: Option<NotificationPreferencesDto>,
}

/// Query parameters for member name search.
#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct UserSearchQuery {
    #[validate(length(min = 2, message = "Search term must be at least 2 characters"))]
    pub q: String,

    /// Result cap (default: 10)
    #[validate(range(min = 1, max = 50, message = "Limit must be 1-50"))]
    pub limit: Option<i64>,
}

/// Role assignment body for the admin role endpoint. An unknown role fails
/// deserialization before the handler runs.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRoleDto {
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_latitude_rejected() {
        let dto = UpdateProfileDto {
            first_name: None,
            last_name: None,
            phone: None,
            street: None,
            city: None,
            state: None,
            zip_code: None,
            lat: Some(123.0),
            lng: None,
            notification_preferences: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn one_character_search_term_rejected() {
        let query = UserSearchQuery {
            q: "a".to_string(),
            limit: None,
        };
        assert!(query.validate().is_err());

        let query = UserSearchQuery {
            q: "al".to_string(),
            limit: Some(25),
        };
        assert!(query.validate().is_ok());
    }

    #[test]
    fn unknown_role_fails_deserialization() {
        let result = serde_json::from_str::<UpdateRoleDto>(r#"{"role":"superuser"}"#);
        assert!(result.is_err());

        let dto: UpdateRoleDto = serde_json::from_str(r#"{"role":"first-responder"}"#).unwrap();
        assert_eq!(dto.role, UserRole::FirstResponder);
    }

    #[test]
    fn radius_bounds_enforced() {
        let prefs = NotificationPreferencesDto {
            push_enabled: None,
            push_types: None,
            email_enabled: None,
            email_types: None,
            sms_enabled: None,
            sms_types: None,
            alert_radius_miles: Some(80.0),
        };
        assert!(prefs.validate().is_err());
    }
}
