//! Note CRUD operations and publish/unpublish transitions.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use notehub_core::error::AppError;
use notehub_database::repositories::folder::FolderRepository;
use notehub_database::repositories::note::NoteRepository;
use notehub_entity::note::{CreateNote, Note, UpdateNote};

use crate::context::RequestContext;
use crate::ownership::ensure_owner;
use crate::slug::SlugGenerator;

/// Title assigned when the submitted title is blank after trimming.
const DEFAULT_TITLE: &str = "Untitled";

/// How many times a slug-collision race is retried before giving up.
const SLUG_RETRY_LIMIT: u32 = 3;

/// Request to create a new note.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateNoteRequest {
    /// Note title (blank defaults to "Untitled").
    pub title: String,
    /// Note body text.
    pub content: String,
    /// Whether the note is public from the start.
    pub is_public: bool,
    /// Containing folder (None for uncategorized).
    pub folder_id: Option<Uuid>,
}

/// Request to update an existing note.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UpdateNoteRequest {
    /// New title (blank defaults to "Untitled").
    pub title: String,
    /// New body text.
    pub content: String,
    /// Desired visibility.
    pub is_public: bool,
    /// New folder placement (None for uncategorized).
    pub folder_id: Option<Uuid>,
}

/// Manages note CRUD and the public/private lifecycle.
#[derive(Debug, Clone)]
pub struct NoteService {
    /// Note repository.
    note_repo: Arc<NoteRepository>,
    /// Folder repository (for placement checks).
    folder_repo: Arc<FolderRepository>,
    /// Slug generator.
    slug_generator: SlugGenerator,
}

impl NoteService {
    /// Creates a new note service.
    pub fn new(
        note_repo: Arc<NoteRepository>,
        folder_repo: Arc<FolderRepository>,
        slug_generator: SlugGenerator,
    ) -> Self {
        Self {
            note_repo,
            folder_repo,
            slug_generator,
        }
    }

    /// Creates a new note.
    ///
    /// A supplied folder must exist and be owned by the caller. A slug is
    /// assigned at creation time only when the note is public. The
    /// slug-probe-then-insert race is absorbed by a bounded retry.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateNoteRequest,
    ) -> Result<Note, AppError> {
        self.check_folder_placement(ctx, req.folder_id).await?;

        let title = effective_title(&req.title);

        let mut attempt = 0;
        let note = loop {
            attempt += 1;

            let slug = if req.is_public {
                Some(self.slug_generator.unique_slug(&title).await?)
            } else {
                None
            };

            let data = CreateNote {
                owner_id: ctx.user_id,
                folder_id: req.folder_id,
                title: title.clone(),
                content: req.content.clone(),
                is_public: req.is_public,
                slug,
            };

            match self.note_repo.create(&data).await {
                Ok(note) => break note,
                Err(e) if e.is_retryable() && attempt < SLUG_RETRY_LIMIT => {
                    warn!(attempt, "Slug collision on create, retrying");
                }
                Err(e) => return Err(e),
            }
        };

        info!(
            user_id = %ctx.user_id,
            note_id = %note.id,
            public = note.is_public,
            "Note created"
        );
        Ok(note)
    }

    /// Gets a note by ID, enforcing ownership.
    pub async fn get(&self, ctx: &RequestContext, note_id: Uuid) -> Result<Note, AppError> {
        let note = self
            .note_repo
            .find_by_id(note_id)
            .await?
            .ok_or_else(|| AppError::not_found("Note not found"))?;
        ensure_owner(note.owner_id, ctx)?;
        Ok(note)
    }

    /// Lists the caller's uncategorized notes, newest-updated first.
    pub async fn list_uncategorized(&self, ctx: &RequestContext) -> Result<Vec<Note>, AppError> {
        self.note_repo.find_uncategorized(ctx.user_id).await
    }

    /// Updates a note, applying the publish/unpublish transition rules.
    ///
    /// Going public always generates a fresh slug, even when the note held
    /// one before; going private clears it. No-op transitions leave the
    /// slug untouched. `updated_at` is refreshed on every successful
    /// update. Folder reassignment validates ownership of the target
    /// folder, matching create.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        note_id: Uuid,
        req: UpdateNoteRequest,
    ) -> Result<Note, AppError> {
        let existing = self.get(ctx, note_id).await?;

        self.check_folder_placement(ctx, req.folder_id).await?;

        let title = effective_title(&req.title);
        let needs_fresh_slug = req.is_public && !existing.is_public;

        let mut attempt = 0;
        let note = loop {
            attempt += 1;

            let slug = if needs_fresh_slug {
                Some(self.slug_generator.unique_slug(&title).await?)
            } else if req.is_public {
                existing.slug.clone()
            } else {
                None
            };

            let data = UpdateNote {
                id: existing.id,
                folder_id: req.folder_id,
                title: title.clone(),
                content: req.content.clone(),
                is_public: req.is_public,
                slug,
            };

            match self.note_repo.update(&data).await {
                Ok(note) => break note,
                Err(e) if e.is_retryable() && needs_fresh_slug && attempt < SLUG_RETRY_LIMIT => {
                    warn!(attempt, "Slug collision on update, retrying");
                }
                Err(e) => return Err(e),
            }
        };

        info!(
            user_id = %ctx.user_id,
            note_id = %note.id,
            public = note.is_public,
            "Note updated"
        );
        Ok(note)
    }

    /// Deletes a note unconditionally (leaf entity, no cascade concerns).
    pub async fn delete(&self, ctx: &RequestContext, note_id: Uuid) -> Result<(), AppError> {
        let note = self.get(ctx, note_id).await?;

        self.note_repo.delete(note.id).await?;

        info!(user_id = %ctx.user_id, note_id = %note_id, "Note deleted");
        Ok(())
    }

    /// Looks up a public note by slug for the unauthenticated read path.
    ///
    /// A note toggled back to private is immediately unreachable here,
    /// since its slug is cleared on the transition.
    pub async fn get_public(&self, slug: &str) -> Result<Note, AppError> {
        self.note_repo
            .find_public_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Note not found"))
    }

    /// Validates that a target folder exists and belongs to the caller.
    async fn check_folder_placement(
        &self,
        ctx: &RequestContext,
        folder_id: Option<Uuid>,
    ) -> Result<(), AppError> {
        if let Some(folder_id) = folder_id {
            let folder = self
                .folder_repo
                .find_by_id(folder_id)
                .await?
                .ok_or_else(|| AppError::not_found("Folder not found"))?;
            ensure_owner(folder.owner_id, ctx)?;
        }
        Ok(())
    }
}

/// Default the title when blank after trimming.
fn effective_title(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_title_defaults_when_blank() {
        assert_eq!(effective_title("  "), "Untitled");
        assert_eq!(effective_title(""), "Untitled");
        assert_eq!(effective_title(" Weekly Plan "), "Weekly Plan");
    }
}
