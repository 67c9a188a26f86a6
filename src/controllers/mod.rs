pub mod results_controllers;
pub mod vote_controllers;
