pub mod cast_vote;
pub mod health;
pub mod models;
pub mod show_form;
