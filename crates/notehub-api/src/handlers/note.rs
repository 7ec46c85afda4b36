//! Note handlers.

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use notehub_core::error::AppError;
use notehub_entity::note::Note;
use notehub_service::note::service::{
    CreateNoteRequest as SvcCreateNote, UpdateNoteRequest as SvcUpdateNote,
};

use crate::dto::request::{CreateNoteRequest, UpdateNoteRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/notes
pub async fn create_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateNoteRequest>,
) -> Result<Json<ApiResponse<Note>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let note = state
        .note_service
        .create(
            &auth,
            SvcCreateNote {
                title: req.title,
                content: req.content,
                is_public: req.is_public,
                folder_id: req.folder_id,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(note)))
}

/// GET /api/notes/{id}
pub async fn get_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(note_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Note>>, ApiError> {
    let note = state.note_service.get(&auth, note_id).await?;
    Ok(Json(ApiResponse::ok(note)))
}

/// PUT /api/notes/{id}
pub async fn update_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(note_id): Path<Uuid>,
    Json(req): Json<UpdateNoteRequest>,
) -> Result<Json<ApiResponse<Note>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let note = state
        .note_service
        .update(
            &auth,
            note_id,
            SvcUpdateNote {
                title: req.title,
                content: req.content,
                is_public: req.is_public,
                folder_id: req.folder_id,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(note)))
}

/// DELETE /api/notes/{id}
pub async fn delete_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(note_id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.note_service.delete(&auth, note_id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Note deleted".to_string(),
    })))
}
