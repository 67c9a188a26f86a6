use axum::{
    extract::{Query, State},
    response::Html,
};

use crate::controllers::vote_controllers::models::FormFlags;
use crate::state::AppState;
use crate::views::render_vote_page;

pub async fn show_form(
    State(state): State<AppState>,
    Query(flags): Query<FormFlags>,
) -> Html<String> {
    Html(render_vote_page(&state.options, flags.success.is_some()))
}
