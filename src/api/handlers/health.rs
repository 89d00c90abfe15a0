//! Health check handler.

use axum::{extract::State, Json};

use crate::{error::Result, models::HealthResponse, services::AppState};

/// Liveness probe with a real database ping.
///
/// # Endpoint
/// `GET /health`
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    let db_ok = state.database.health_check().await.is_ok();

    Ok(Json(HealthResponse::healthy(db_ok)))
}
