//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use notehub_auth::session::manager::SessionManager;
use notehub_core::config::AppConfig;
use notehub_database::repositories::user::UserRepository;
use notehub_service::folder::FolderService;
use notehub_service::note::NoteService;
use notehub_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Session lifecycle manager.
    pub session_manager: Arc<SessionManager>,
    /// User repository (identity resolution in extractors).
    pub user_repo: Arc<UserRepository>,
    /// User account service.
    pub user_service: Arc<UserService>,
    /// Folder service.
    pub folder_service: Arc<FolderService>,
    /// Note service.
    pub note_service: Arc<NoteService>,
}
