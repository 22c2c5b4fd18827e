use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{AuthResponseDto, LoginDto, MeDto, RegisterDto};
use crate::features::auth::services::TokenService;
use crate::features::users::models::CreateUser;
use crate::features::users::UserService;

/// Registration and credential login. Tokens come from [`TokenService`];
/// passwords are bcrypt-hashed and never leave this module.
pub struct AuthService {
    users: Arc<UserService>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(users: Arc<UserService>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    pub async fn register(&self, dto: RegisterDto) -> Result<AuthResponseDto> {
        let password_hash = bcrypt::hash(&dto.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;

        let user = self
            .users
            .create(&CreateUser {
                email: dto.email,
                password_hash,
                first_name: dto.first_name,
                last_name: dto.last_name,
                phone: dto.phone,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User registered");

        let access_token = self.tokens.issue(user.id, &user.email, user.role)?;
        Ok(AuthResponseDto {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.tokens.ttl_secs(),
            user: MeDto::from(user),
        })
    }

    /// The same 401 comes back for an unknown email and a wrong password,
    /// so login failures leak nothing about which account exists.
    pub async fn login(&self, dto: LoginDto) -> Result<AuthResponseDto> {
        let user = self
            .users
            .find_by_email(&dto.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

        let valid = bcrypt::verify(&dto.password, &user.password_hash)
            .map_err(|e| AppError::Internal(format!("Failed to verify password: {}", e)))?;
        if !valid {
            return Err(AppError::Unauthorized(
                "Invalid email or password".to_string(),
            ));
        }

        self.users.touch_last_active(user.id).await;

        let access_token = self.tokens.issue(user.id, &user.email, user.role)?;
        Ok(AuthResponseDto {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.tokens.ttl_secs(),
            user: MeDto::from(user),
        })
    }

    pub async fn me(&self, user_id: uuid::Uuid) -> Result<MeDto> {
        let user = self.users.get_by_id(user_id).await?;
        Ok(MeDto::from(user))
    }
}
