use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::controllers::results_controllers::{delete_all, get_results, health, show_results};
use crate::state::AppState;

pub fn results_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(show_results::show_results))
        .route("/delete-all", post(delete_all::delete_all))
        .route("/api/results", get(get_results::get_results))
        .route("/healthz", get(health::healthz))
        .route("/health", get(health::health))
        .layer(TraceLayer::new_for_http())
}
