use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::warn;

use crate::db::connection::ping;
use crate::state::AppState;

/// GET /healthz — round trip against the store; 503 when it is unreachable.
pub async fn healthz(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match ping(&state.db).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"status": "healthy", "service": "vote", "database": "connected"})),
        ),
        Err(err) => {
            warn!("vote health check failed: {err}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"status": "unhealthy", "service": "vote", "database": "disconnected"})),
            )
        }
    }
}

/// GET /health — legacy unconditional liveness.
pub async fn health() -> Json<Value> {
    Json(json!({"status": "ok", "service": "vote"}))
}
