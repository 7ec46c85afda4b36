//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Update profile request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// New display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}

/// Create folder request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFolderRequest {
    /// Folder name.
    #[validate(length(min = 1, max = 120, message = "Folder name is required"))]
    pub name: String,
    /// Parent folder ID (None for a root folder).
    pub parent_id: Option<Uuid>,
}

/// Create note request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateNoteRequest {
    /// Note title (blank defaults to "Untitled").
    #[serde(default)]
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: String,
    /// Note body text.
    #[serde(default)]
    pub content: String,
    /// Whether the note is public from the start.
    #[serde(default)]
    pub is_public: bool,
    /// Containing folder (None for uncategorized).
    pub folder_id: Option<Uuid>,
}

/// Update note request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateNoteRequest {
    /// New title (blank defaults to "Untitled").
    #[serde(default)]
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: String,
    /// New body text.
    #[serde(default)]
    pub content: String,
    /// Desired visibility.
    #[serde(default)]
    pub is_public: bool,
    /// New folder placement (None for uncategorized).
    pub folder_id: Option<Uuid>,
}
