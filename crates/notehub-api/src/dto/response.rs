//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use notehub_entity::note::Note;
use notehub_entity::user::User;

/// Generic success envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Always true for success responses.
    pub success: bool,
    /// The payload.
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Wrap a payload in the success envelope.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

/// Public view of a user (no password hash).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Email address.
    pub email: String,
    /// Display name.
    pub display_name: String,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            display_name: user.display_name,
            created_at: user.created_at,
        }
    }
}

/// Returned on register and login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Opaque session token; send as `Authorization: Bearer <token>`.
    pub token: String,
    /// When the session expires (slides forward on every request).
    pub expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: UserResponse,
}

/// Unauthenticated view of a published note.
///
/// Exposes no row identifiers, only the content and the author's name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicNoteResponse {
    /// Note title.
    pub title: String,
    /// Note body text.
    pub content: String,
    /// Author display name.
    pub author: String,
    /// When the note was created.
    pub created_at: DateTime<Utc>,
    /// When the note was last updated.
    pub updated_at: DateTime<Utc>,
}

impl PublicNoteResponse {
    /// Build the public view from a note and its author.
    pub fn new(note: Note, author: &User) -> Self {
        Self {
            title: note.title,
            content: note.content,
            author: author.display_name.clone(),
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}
