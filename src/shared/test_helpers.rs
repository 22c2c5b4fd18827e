#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;

#[cfg(test)]
use crate::features::users::models::UserRole;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, Router};

#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
pub fn create_resident_user() -> AuthenticatedUser {
    AuthenticatedUser {
        id: Uuid::new_v4(),
        email: "resident@example.com".to_string(),
        role: UserRole::Resident,
    }
}

#[cfg(test)]
pub fn create_moderator_user() -> AuthenticatedUser {
    AuthenticatedUser {
        id: Uuid::new_v4(),
        email: "moderator@example.com".to_string(),
        role: UserRole::Moderator,
    }
}

/// Wrap a router so every request arrives pre-authenticated as `user`,
/// standing in for the bearer-token middleware.
#[cfg(test)]
pub fn with_auth(router: Router, user: AuthenticatedUser) -> Router {
    router.layer(axum::middleware::from_fn(
        move |mut request: Request, next: Next| {
            let user = user.clone();
            async move {
                request.extensions_mut().insert(user);
                next.run(request).await
            }
        },
    ))
}

#[cfg(test)]
pub fn with_moderator_auth(router: Router) -> Router {
    with_auth(router, create_moderator_user())
}
