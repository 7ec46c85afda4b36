//! Dashboard handler: the authenticated top-level view.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use notehub_entity::folder::Folder;
use notehub_entity::note::Note;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// Top-level workspace view: root folders plus uncategorized notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// Root folders, newest-created first.
    pub folders: Vec<Folder>,
    /// Notes outside any folder, newest-updated first.
    pub notes: Vec<Note>,
}

/// GET /api/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<DashboardResponse>>, ApiError> {
    let folders = state.folder_service.list_roots(&auth).await?;
    let notes = state.note_service.list_uncategorized(&auth).await?;

    Ok(Json(ApiResponse::ok(DashboardResponse { folders, notes })))
}
