pub mod catalog;
pub mod config;
pub mod engine;
pub mod errors;
pub mod models;
pub mod routes;
pub mod state;
