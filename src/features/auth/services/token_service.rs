use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::{AuthenticatedUser, Claims};
use crate::features::users::models::UserRole;

/// Issues and validates self-signed HS256 bearer tokens.
pub struct TokenService {
    config: AuthConfig,
}

impl TokenService {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn ttl_secs(&self) -> i64 {
        self.config.token_ttl.as_secs() as i64
    }

    pub fn issue(&self, user_id: Uuid, email: &str, role: UserRole) -> Result<String> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            role,
            iat: now,
            exp: now + self.ttl_secs(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("Failed to encode JWT: {}", e)))
    }

    /// Validates signature and expiry, then maps claims to the request
    /// identity. Any failure is reported as a generic 401.
    pub fn verify(&self, token: &str) -> Result<AuthenticatedUser> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;

        let id = Uuid::parse_str(&data.claims.sub)
            .map_err(|_| AppError::Unauthorized("Invalid token subject".to_string()))?;

        Ok(AuthenticatedUser {
            id,
            email: data.claims.email,
            role: data.claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_service() -> TokenService {
        TokenService::new(AuthConfig {
            jwt_secret: "test-secret-key-minimum-32-chars!!".to_string(),
            token_ttl: Duration::from_secs(3600),
        })
    }

    #[test]
    fn issue_verify_roundtrip() {
        let service = test_service();
        let user_id = Uuid::new_v4();

        let token = service
            .issue(user_id, "alice@example.com", UserRole::Resident)
            .expect("issue should succeed");
        let user = service.verify(&token).expect("verify should succeed");

        assert_eq!(user.id, user_id);
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.role, UserRole::Resident);
    }

    #[test]
    fn role_survives_roundtrip() {
        let service = test_service();
        let token = service
            .issue(Uuid::new_v4(), "medic@example.com", UserRole::FirstResponder)
            .unwrap();
        let user = service.verify(&token).unwrap();
        assert_eq!(user.role, UserRole::FirstResponder);
    }

    #[test]
    fn garbage_token_rejected() {
        let service = test_service();
        assert!(service.verify("not-a-jwt").is_err());
    }

    #[test]
    fn wrong_secret_rejected() {
        let service = test_service();
        let other = TokenService::new(AuthConfig {
            jwt_secret: "another-secret-key-of-enough-length!".to_string(),
            token_ttl: Duration::from_secs(3600),
        });

        let token = service
            .issue(Uuid::new_v4(), "bob@example.com", UserRole::Resident)
            .unwrap();
        assert!(other.verify(&token).is_err());
    }
}
