//! Authentication extractors — resolve the opaque bearer token to an
//! explicit [`RequestContext`] and inject it into handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use notehub_core::error::AppError;
use notehub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
///
/// Resolving the token also slides the session's expiration window.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let session = state.session_manager.resolve(&token).await?;

        // The session outliving its user row would be a deployment defect;
        // treat it as an authentication failure, not a 500.
        let user = state
            .user_repo
            .find_by_id(session.user_id)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid or expired session"))?;

        Ok(AuthUser(RequestContext::new(
            user.id,
            session.id,
            user.email,
            user.display_name,
        )))
    }
}

/// Like [`AuthUser`], but never rejects: anonymous requests yield `None`.
///
/// Used by the landing page, which personalizes when a session is present.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<RequestContext>);

impl FromRequestParts<AppState> for OptionalAuthUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ctx = AuthUser::from_request_parts(parts, state)
            .await
            .ok()
            .map(|auth| auth.0);
        Ok(OptionalAuthUser(ctx))
    }
}

/// The raw bearer token, for endpoints that act on the token itself
/// (logout ends the session the token names).
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl FromRequestParts<AppState> for BearerToken {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        bearer_token(parts)
            .map(BearerToken)
            .ok_or_else(|| ApiError(AppError::authentication("Missing Authorization header")))
    }
}

/// Pulls the bearer token out of the Authorization header.
fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(String::from)
}
