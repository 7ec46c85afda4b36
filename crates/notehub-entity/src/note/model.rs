//! Note entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A document owned by exactly one user, optionally placed in one folder.
///
/// Invariant: `slug` is non-null iff `is_public` is true, and slug values
/// are unique across all notes. Both are backed by database constraints.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Note {
    /// Unique note identifier.
    pub id: Uuid,
    /// The note owner.
    pub owner_id: Uuid,
    /// Containing folder (null for uncategorized notes).
    pub folder_id: Option<Uuid>,
    /// Note title.
    pub title: String,
    /// Note body text.
    pub content: String,
    /// Whether the note is publicly readable.
    pub is_public: bool,
    /// URL-safe public identifier (present iff `is_public`).
    pub slug: Option<String>,
    /// When the note was created.
    pub created_at: DateTime<Utc>,
    /// When the note content was last mutated.
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Check the visibility invariant: a slug is held iff the note is public.
    pub fn visibility_consistent(&self) -> bool {
        self.is_public == self.slug.is_some()
    }
}

/// Data required to create a new note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNote {
    /// The note owner.
    pub owner_id: Uuid,
    /// Containing folder (None for uncategorized).
    pub folder_id: Option<Uuid>,
    /// Note title.
    pub title: String,
    /// Note body text.
    pub content: String,
    /// Whether the note is public.
    pub is_public: bool,
    /// Slug, present iff `is_public`.
    pub slug: Option<String>,
}

/// Data for updating an existing note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNote {
    /// The note ID to update.
    pub id: Uuid,
    /// New folder placement (None for uncategorized).
    pub folder_id: Option<Uuid>,
    /// New title.
    pub title: String,
    /// New body text.
    pub content: String,
    /// New visibility.
    pub is_public: bool,
    /// New slug, present iff `is_public`.
    pub slug: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(is_public: bool, slug: Option<&str>) -> Note {
        Note {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            folder_id: None,
            title: "Weekly Plan".to_string(),
            content: String::new(),
            is_public,
            slug: slug.map(String::from),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_visibility_consistent() {
        assert!(note(true, Some("weekly-plan")).visibility_consistent());
        assert!(note(false, None).visibility_consistent());
        assert!(!note(true, None).visibility_consistent());
        assert!(!note(false, Some("weekly-plan")).visibility_consistent());
    }
}
