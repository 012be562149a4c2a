//! Shared application state for the facade layer.

pub mod app_state;

pub use app_state::AppState;
