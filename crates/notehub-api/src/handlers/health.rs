//! Health check handler.

use axum::extract::State;
use axum::Json;

use notehub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /health
///
/// Liveness plus a database connectivity probe.
pub async fn health(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let db_ok: i32 = sqlx::query_scalar("SELECT 1")
        .fetch_one(&state.db_pool)
        .await
        .map_err(|e| AppError::with_source(
            notehub_core::error::ErrorKind::Database,
            "Database health check failed",
            e,
        ))?;

    Ok(Json(serde_json::json!({
        "status": "ok",
        "database": db_ok == 1,
    })))
}
