use axum::{extract::State, response::Redirect, Form};
use tracing::info;

use crate::controllers::vote_controllers::models::CastVoteForm;
use crate::models::vote_models::VoteRecord;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

pub async fn cast_vote(
    State(state): State<AppState>,
    Form(payload): Form<CastVoteForm>,
) -> AppResult<Redirect> {
    let option = payload
        .option
        .ok_or_else(|| AppError::ValidationError("Missing form field: option".to_string()))?;

    if !state.options.contains(&option) {
        return Err(AppError::ValidationError(format!(
            "Invalid option: {option}"
        )));
    }

    let vote: VoteRecord =
        sqlx::query_as("INSERT INTO votes (option) VALUES ($1) RETURNING id, option, created_at")
            .bind(&option)
            .fetch_one(&state.db)
            .await?;

    info!(id = vote.id, option = %vote.option, "vote recorded");

    Ok(Redirect::to("/?success=1"))
}
