//! Note repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use notehub_core::error::{AppError, ErrorKind};
use notehub_core::result::AppResult;
use notehub_entity::note::{CreateNote, Note, UpdateNote};

/// Repository for note CRUD and slug lookups.
#[derive(Debug, Clone)]
pub struct NoteRepository {
    pool: PgPool,
}

impl NoteRepository {
    /// Create a new note repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a note by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Note>> {
        sqlx::query_as::<_, Note>("SELECT * FROM notes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find note", e))
    }

    /// Find a public note by slug. Private notes are never returned.
    pub async fn find_public_by_slug(&self, slug: &str) -> AppResult<Option<Note>> {
        sqlx::query_as::<_, Note>("SELECT * FROM notes WHERE slug = $1 AND is_public = TRUE")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find note by slug", e)
            })
    }

    /// List an owner's uncategorized notes, newest-updated first.
    pub async fn find_uncategorized(&self, owner_id: Uuid) -> AppResult<Vec<Note>> {
        sqlx::query_as::<_, Note>(
            "SELECT * FROM notes WHERE owner_id = $1 AND folder_id IS NULL \
             ORDER BY updated_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list uncategorized notes", e)
        })
    }

    /// List notes in a folder, newest-updated first.
    pub async fn find_in_folder(&self, folder_id: Uuid) -> AppResult<Vec<Note>> {
        sqlx::query_as::<_, Note>(
            "SELECT * FROM notes WHERE folder_id = $1 ORDER BY updated_at DESC",
        )
        .bind(folder_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folder notes", e))
    }

    /// Check whether a slug is already taken by any note.
    pub async fn slug_exists(&self, slug: &str) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notes WHERE slug = $1")
            .bind(slug)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check slug", e))?;
        Ok(count > 0)
    }

    /// Create a new note.
    ///
    /// A unique violation on the slug column means a concurrent create won
    /// the race between the uniqueness probe and this insert; it surfaces
    /// as a retryable [`ErrorKind::SlugCollision`].
    pub async fn create(&self, data: &CreateNote) -> AppResult<Note> {
        sqlx::query_as::<_, Note>(
            "INSERT INTO notes (owner_id, folder_id, title, content, is_public, slug) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(data.owner_id)
        .bind(data.folder_id)
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.is_public)
        .bind(&data.slug)
        .fetch_one(&self.pool)
        .await
        .map_err(map_slug_violation)
    }

    /// Update a note's content, placement, and visibility.
    ///
    /// Always refreshes `updated_at`. Slug races map to
    /// [`ErrorKind::SlugCollision`] as on create.
    pub async fn update(&self, data: &UpdateNote) -> AppResult<Note> {
        sqlx::query_as::<_, Note>(
            "UPDATE notes SET folder_id = $2, title = $3, content = $4, is_public = $5, \
             slug = $6, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(data.id)
        .bind(data.folder_id)
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.is_public)
        .bind(&data.slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_slug_violation)?
        .ok_or_else(|| AppError::not_found(format!("Note {} not found", data.id)))
    }

    /// Delete a note.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete note", e))?;
        Ok(result.rows_affected() > 0)
    }
}

/// Map a unique violation on `notes.slug` to a retryable slug collision.
fn map_slug_violation(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("notes_slug_key") => {
            AppError::slug_collision("Slug was claimed by a concurrent write")
        }
        _ => AppError::with_source(ErrorKind::Database, "Failed to write note", e),
    }
}
