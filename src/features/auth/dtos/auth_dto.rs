use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::users::models::{User, UserRole};
use crate::shared::validation::PHONE_REGEX;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeDto {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub neighborhood_id: Option<Uuid>,
    pub is_verified: bool,
}

impl From<User> for MeDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            phone: user.phone,
            role: user.role,
            neighborhood_id: user.neighborhood_id,
            is_verified: user.is_verified,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponseDto {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: MeDto,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_rejects_short_password() {
        let dto = RegisterDto {
            email: "jo@example.com".to_string(),
            password: "short".to_string(),
            first_name: "Jo".to_string(),
            last_name: "Woods".to_string(),
            phone: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn register_rejects_bad_phone() {
        let dto = RegisterDto {
            email: "jo@example.com".to_string(),
            password: "long-enough-password".to_string(),
            first_name: "Jo".to_string(),
            last_name: "Woods".to_string(),
            phone: Some("not-a-number".to_string()),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn register_accepts_valid_payload() {
        let dto = RegisterDto {
            email: "jo@example.com".to_string(),
            password: "long-enough-password".to_string(),
            first_name: "Jo".to_string(),
            last_name: "Woods".to_string(),
            phone: Some("+15550001111".to_string()),
        };
        assert!(dto.validate().is_ok());
    }
}
