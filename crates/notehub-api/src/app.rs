//! Application builder: wires repositories, services, and state into an
//! Axum app and runs the server.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use notehub_auth::password::PasswordHasher;
use notehub_auth::session::manager::SessionManager;
use notehub_core::config::AppConfig;
use notehub_core::error::AppError;
use notehub_database::repositories::folder::FolderRepository;
use notehub_database::repositories::note::NoteRepository;
use notehub_database::repositories::session::SessionRepository;
use notehub_database::repositories::user::UserRepository;
use notehub_service::folder::FolderService;
use notehub_service::note::NoteService;
use notehub_service::slug::SlugGenerator;
use notehub_service::user::UserService;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application from configuration and a pool.
///
/// Also used by the integration tests, which drive the returned router
/// directly instead of binding a socket.
pub fn build_app(config: AppConfig, db_pool: PgPool) -> Router {
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let session_repo = Arc::new(SessionRepository::new(db_pool.clone()));
    let folder_repo = Arc::new(FolderRepository::new(db_pool.clone()));
    let note_repo = Arc::new(NoteRepository::new(db_pool.clone()));

    let password_hasher = Arc::new(PasswordHasher::new());
    let session_manager = Arc::new(SessionManager::new(
        Arc::clone(&session_repo),
        config.session.clone(),
    ));

    let slug_generator = SlugGenerator::new(Arc::clone(&note_repo));

    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
    ));
    let folder_service = Arc::new(FolderService::new(
        Arc::clone(&folder_repo),
        Arc::clone(&note_repo),
    ));
    let note_service = Arc::new(NoteService::new(
        Arc::clone(&note_repo),
        Arc::clone(&folder_repo),
        slug_generator,
    ));

    let state = AppState {
        config: Arc::new(config),
        db_pool,
        session_manager,
        user_repo,
        user_service,
        folder_service,
        note_service,
    };

    build_router(state)
}

/// Runs the NoteHub server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app = build_app(config, db_pool);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("NoteHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
    }
    tracing::info!("Shutdown signal received");
}
