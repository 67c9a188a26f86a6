pub mod results_routes;
pub mod vote_routes;
