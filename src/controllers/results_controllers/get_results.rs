use axum::{extract::State, Json};

use crate::controllers::results_controllers::{load_tally, models::ResultsResponse};
use crate::state::AppState;
use crate::utils::error::AppResult;

pub async fn get_results(State(state): State<AppState>) -> AppResult<Json<ResultsResponse>> {
    let tally = load_tally(&state.db).await?;
    Ok(Json(ResultsResponse::from(tally)))
}
