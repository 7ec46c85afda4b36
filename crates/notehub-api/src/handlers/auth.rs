//! Auth handlers — register, login, logout, me.

use axum::extract::State;
use axum::Json;
use validator::Validate;

use notehub_core::error::AppError;
use notehub_service::user::service::RegisterRequest as SvcRegister;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, AuthResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, BearerToken};
use crate::state::AppState;

/// POST /api/auth/register
///
/// Creates the user and immediately starts a session, like login.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .user_service
        .register(SvcRegister {
            email: req.email,
            name: req.name,
            password: req.password,
        })
        .await?;

    let (token, session) = state.session_manager.start(user.id).await?;

    Ok(Json(ApiResponse::ok(AuthResponse {
        token,
        expires_at: session.expires_at,
        user: UserResponse::from(user),
    })))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .user_service
        .authenticate(&req.email, &req.password)
        .await?;

    let (token, session) = state.session_manager.start(user.id).await?;

    Ok(Json(ApiResponse::ok(AuthResponse {
        token,
        expires_at: session.expires_at,
        user: UserResponse::from(user),
    })))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.session_manager.end(&token).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Logged out".to_string(),
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.user_service.get_profile(&auth).await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}
