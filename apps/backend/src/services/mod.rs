//! Service layer: the engine facade and its orchestration.

pub mod game_flow;

pub use game_flow::GameFlowService;
