//! Folder handlers.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use notehub_core::error::AppError;
use notehub_entity::folder::Folder;
use notehub_entity::note::Note;

use crate::dto::request::CreateFolderRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// A folder together with its direct children.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderContentsResponse {
    /// The folder itself.
    pub folder: Folder,
    /// Direct subfolders, newest-created first.
    pub subfolders: Vec<Folder>,
    /// Contained notes, newest-updated first.
    pub notes: Vec<Note>,
}

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateFolderRequest>,
) -> Result<Json<ApiResponse<Folder>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let folder = state
        .folder_service
        .create(&auth, &req.name, req.parent_id)
        .await?;

    Ok(Json(ApiResponse::ok(folder)))
}

/// GET /api/folders/{id}
///
/// Returns the folder and its direct children in one response.
pub async fn get_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(folder_id): Path<Uuid>,
) -> Result<Json<ApiResponse<FolderContentsResponse>>, ApiError> {
    let folder = state.folder_service.get(&auth, folder_id).await?;
    let (subfolders, notes) = state.folder_service.list_children(&auth, folder_id).await?;

    Ok(Json(ApiResponse::ok(FolderContentsResponse {
        folder,
        subfolders,
        notes,
    })))
}

/// DELETE /api/folders/{id}
pub async fn delete_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(folder_id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.folder_service.delete(&auth, folder_id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Folder deleted".to_string(),
    })))
}
