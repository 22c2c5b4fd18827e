use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// User role enum matching the database enum. Serialized kebab-case on the
/// wire (`first-responder`), snake_case in Postgres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    Resident,
    Moderator,
    Admin,
    FirstResponder,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Resident => write!(f, "resident"),
            UserRole::Moderator => write!(f, "moderator"),
            UserRole::Admin => write!(f, "admin"),
            UserRole::FirstResponder => write!(f, "first-responder"),
        }
    }
}

/// Database model for a registered user.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub neighborhood_id: Option<Uuid>,
    pub role: UserRole,
    pub is_verified: bool,
    pub push_enabled: bool,
    pub push_types: Vec<String>,
    pub email_enabled: bool,
    pub email_types: Vec<String>,
    pub sms_enabled: bool,
    pub sms_types: Vec<String>,
    pub alert_radius_miles: f64,
    pub reports_submitted: i32,
    pub reports_verified: i32,
    pub community_score: i32,
    pub last_active: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new user at registration.
#[derive(Debug)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_wire_format_is_kebab_case() {
        let json = serde_json::to_string(&UserRole::FirstResponder).unwrap();
        assert_eq!(json, "\"first-responder\"");

        let role: UserRole = serde_json::from_str("\"first-responder\"").unwrap();
        assert_eq!(role, UserRole::FirstResponder);
    }
}
