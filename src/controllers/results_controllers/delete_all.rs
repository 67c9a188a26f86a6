use axum::{extract::State, response::Redirect};
use tracing::info;

use crate::state::AppState;
use crate::utils::error::AppResult;

/// Unconditionally clears the vote store. Irreversible; any confirmation
/// happens client-side before the request is made.
pub async fn delete_all(State(state): State<AppState>) -> AppResult<Redirect> {
    let result = sqlx::query("DELETE FROM votes").execute(&state.db).await?;

    info!(rows = result.rows_affected(), "all votes deleted");

    Ok(Redirect::to("/?deleted=1"))
}
