pub mod config;
pub mod controllers;
pub mod db;
pub mod models;
pub mod routes;
pub mod state;
pub mod utils;
pub mod views;
