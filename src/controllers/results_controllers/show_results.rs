use axum::{
    extract::{Query, State},
    response::Html,
};

use crate::controllers::results_controllers::{load_tally, models::ResultsFlags};
use crate::state::AppState;
use crate::utils::error::AppResult;
use crate::views::render_results_page;

pub async fn show_results(
    State(state): State<AppState>,
    Query(flags): Query<ResultsFlags>,
) -> AppResult<Html<String>> {
    let tally = load_tally(&state.db).await?;
    Ok(Html(render_results_page(&tally, flags.deleted.is_some())))
}
