use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::users::models::UserRole;

/// Identity attached to the request by the auth middleware.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Moderation-level access: moderators, admins, and first responders
    /// may verify and resolve incidents.
    pub fn can_moderate(&self) -> bool {
        matches!(
            self.role,
            UserRole::Moderator | UserRole::Admin | UserRole::FirstResponder
        )
    }

    /// Emergency broadcasts are restricted to first responders and admins.
    pub fn can_send_emergency(&self) -> bool {
        matches!(self.role, UserRole::FirstResponder | UserRole::Admin)
    }
}

/// JWT claims payload for self-issued HS256 tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - user UUID
    pub sub: String,
    pub email: String,
    pub role: UserRole,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: UserRole) -> AuthenticatedUser {
        AuthenticatedUser {
            id: Uuid::new_v4(),
            email: "member@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn residents_cannot_moderate() {
        assert!(!user_with_role(UserRole::Resident).can_moderate());
        assert!(!user_with_role(UserRole::Resident).can_send_emergency());
    }

    #[test]
    fn moderation_roles() {
        assert!(user_with_role(UserRole::Moderator).can_moderate());
        assert!(user_with_role(UserRole::Admin).can_moderate());
        assert!(user_with_role(UserRole::FirstResponder).can_moderate());
    }

    #[test]
    fn emergency_roles() {
        assert!(user_with_role(UserRole::FirstResponder).can_send_emergency());
        assert!(user_with_role(UserRole::Admin).can_send_emergency());
        assert!(!user_with_role(UserRole::Moderator).can_send_emergency());
    }
}
