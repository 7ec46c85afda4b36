//! Folder CRUD operations with ownership enforcement.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use notehub_core::error::AppError;
use notehub_database::repositories::folder::FolderRepository;
use notehub_database::repositories::note::NoteRepository;
use notehub_entity::folder::{CreateFolder, Folder};
use notehub_entity::note::Note;

use crate::context::RequestContext;
use crate::ownership::ensure_owner;

/// Manages folder CRUD and hierarchy maintenance.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Folder repository.
    folder_repo: Arc<FolderRepository>,
    /// Note repository (for child listings).
    note_repo: Arc<NoteRepository>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(folder_repo: Arc<FolderRepository>, note_repo: Arc<NoteRepository>) -> Self {
        Self {
            folder_repo,
            note_repo,
        }
    }

    /// Creates a new folder.
    ///
    /// A supplied parent must exist and be owned by the caller; the
    /// same-owner invariant is enforced here, not by the foreign key.
    /// An absent parent creates a root folder.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        name: &str,
        parent_id: Option<Uuid>,
    ) -> Result<Folder, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Folder name is required"));
        }

        if let Some(parent_id) = parent_id {
            let parent = self
                .folder_repo
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| AppError::not_found("Parent folder not found"))?;
            ensure_owner(parent.owner_id, ctx)?;
        }

        let folder = self
            .folder_repo
            .create(&CreateFolder {
                owner_id: ctx.user_id,
                parent_id,
                name: name.to_string(),
            })
            .await?;

        info!(
            user_id = %ctx.user_id,
            folder_id = %folder.id,
            root = folder.is_root(),
            "Folder created"
        );
        Ok(folder)
    }

    /// Gets a folder by ID, enforcing ownership.
    pub async fn get(&self, ctx: &RequestContext, folder_id: Uuid) -> Result<Folder, AppError> {
        let folder = self
            .folder_repo
            .find_by_id(folder_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))?;
        ensure_owner(folder.owner_id, ctx)?;
        Ok(folder)
    }

    /// Lists the caller's root folders, newest-created first.
    pub async fn list_roots(&self, ctx: &RequestContext) -> Result<Vec<Folder>, AppError> {
        self.folder_repo.find_roots(ctx.user_id).await
    }

    /// Lists a folder's direct children: subfolders newest-created first,
    /// notes newest-updated first. Requires ownership of the folder.
    pub async fn list_children(
        &self,
        ctx: &RequestContext,
        folder_id: Uuid,
    ) -> Result<(Vec<Folder>, Vec<Note>), AppError> {
        let folder = self.get(ctx, folder_id).await?;

        let subfolders = self.folder_repo.find_children(folder.id).await?;
        let notes = self.note_repo.find_in_folder(folder.id).await?;

        Ok((subfolders, notes))
    }

    /// Deletes a folder with the safe-delete policy.
    ///
    /// Direct child folders are re-parented to root and contained notes
    /// detached in the same transaction that removes the row; nothing
    /// cascades.
    pub async fn delete(&self, ctx: &RequestContext, folder_id: Uuid) -> Result<(), AppError> {
        let folder = self.get(ctx, folder_id).await?;

        self.folder_repo.delete_and_detach(folder.id).await?;

        info!(
            user_id = %ctx.user_id,
            folder_id = %folder_id,
            "Folder deleted, children detached"
        );
        Ok(())
    }
}
