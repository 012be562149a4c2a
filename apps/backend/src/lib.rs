#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod ai;
pub mod domain;
pub mod error;
pub mod errors;
pub mod protocol;
pub mod repos;
pub mod services;
pub mod state;

// Re-exports for public API
pub use ai::{AiFailureMode, AiPlayer, BotAction};
pub use domain::{GameSnapshot, GameState, PlayerId, RoomId};
pub use error::AppError;
pub use errors::ErrorCode;
pub use services::GameFlowService;
pub use state::AppState;

// Prelude for test convenience
pub mod prelude {
    pub use super::adapters::*;
    pub use super::error::*;
    pub use super::repos::*;
    pub use super::services::*;
    pub use super::state::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
