//! User registration, authentication, and profile management.

use std::sync::Arc;

use tracing::info;

use notehub_auth::password::PasswordHasher;
use notehub_core::error::AppError;
use notehub_database::repositories::user::UserRepository;
use notehub_entity::user::{CreateUser, User};

use crate::context::RequestContext;

/// Request to register a new user.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterRequest {
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Plaintext password (hashed before storage).
    pub password: String,
}

/// Manages user accounts.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    password_hasher: Arc<PasswordHasher>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(user_repo: Arc<UserRepository>, password_hasher: Arc<PasswordHasher>) -> Self {
        Self {
            user_repo,
            password_hasher,
        }
    }

    /// Registers a new user.
    ///
    /// All fields are required; the email is trimmed and lowercased before
    /// the uniqueness check. A duplicate email is a `Conflict`.
    pub async fn register(&self, req: RegisterRequest) -> Result<User, AppError> {
        let name = req.name.trim();
        let email = normalize_email(&req.email);

        if name.is_empty() || email.is_empty() || req.password.is_empty() {
            return Err(AppError::validation("All fields are required"));
        }

        let password_hash = self.password_hasher.hash_password(&req.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                email,
                display_name: name.to_string(),
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Verifies credentials and returns the matching user.
    ///
    /// Unknown email and wrong password are indistinguishable to the
    /// caller; both fail with the same `Authentication` error.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = normalize_email(email);

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid email or password"))?;

        let valid = self
            .password_hasher
            .verify_password(password, &user.password_hash)?;

        if !valid {
            return Err(AppError::authentication("Invalid email or password"));
        }

        Ok(user)
    }

    /// Returns the acting user's profile.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Updates the acting user's display name.
    pub async fn update_display_name(
        &self,
        ctx: &RequestContext,
        name: &str,
    ) -> Result<User, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Display name cannot be empty"));
        }

        let user = self.user_repo.update_display_name(ctx.user_id, name).await?;

        info!(user_id = %ctx.user_id, "Profile updated");
        Ok(user)
    }
}

/// Trim and lowercase an email for case-normalized storage and lookup.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  A@X.Com "), "a@x.com");
        assert_eq!(normalize_email("b@x.com"), "b@x.com");
    }
}
