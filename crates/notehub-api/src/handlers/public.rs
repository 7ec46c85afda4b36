//! Unauthenticated handlers: the landing view and published notes.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use notehub_core::error::AppError;

use crate::dto::response::{ApiResponse, PublicNoteResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::OptionalAuthUser;
use crate::state::AppState;

/// Landing view. Anonymous callers get `user: null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandingResponse {
    /// Service name.
    pub service: String,
    /// The authenticated user, when a valid session token was sent.
    pub user: Option<UserResponse>,
}

/// GET /
///
/// Reachable with or without a session; an invalid or expired token is
/// treated the same as no token.
pub async fn landing(
    State(state): State<AppState>,
    OptionalAuthUser(ctx): OptionalAuthUser,
) -> Result<Json<ApiResponse<LandingResponse>>, ApiError> {
    let user = match ctx {
        Some(ctx) => Some(UserResponse::from(
            state.user_service.get_profile(&ctx).await?,
        )),
        None => None,
    };

    Ok(Json(ApiResponse::ok(LandingResponse {
        service: "notehub".to_string(),
        user,
    })))
}

/// GET /p/{slug}
///
/// The public read path. No authentication, no ownership; anything with
/// a live slug is world-readable by design of the publish flow.
pub async fn public_note(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<PublicNoteResponse>>, ApiError> {
    let note = state.note_service.get_public(&slug).await?;

    let author = state
        .user_repo
        .find_by_id(note.owner_id)
        .await?
        .ok_or_else(|| AppError::not_found("Note not found"))?;

    Ok(Json(ApiResponse::ok(PublicNoteResponse::new(note, &author))))
}
