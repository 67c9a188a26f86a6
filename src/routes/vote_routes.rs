use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::controllers::vote_controllers::{cast_vote, health, show_form};
use crate::state::AppState;

pub fn vote_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(show_form::show_form))
        .route("/vote", post(cast_vote::cast_vote))
        .route("/healthz", get(health::healthz))
        .route("/health", get(health::health))
        .layer(TraceLayer::new_for_http())
}
