//! AI player module - handles automated game decisions.
//!
//! This module provides:
//! - AiPlayer trait for decision policies
//! - Heuristic: the deterministic house policy for bot seats
//! - RandomPlayer: makes random legal moves (seedable for tests)

mod heuristic;
mod random;
mod trait_def;

pub use heuristic::Heuristic;
pub use random::RandomPlayer;
use serde_json::Value as JsonValue;
pub use trait_def::{AiError, AiPlayer, BotAction};

/// AI failure mode - how to handle AI errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiFailureMode {
    /// Surface the error to the caller (for tests)
    Fail,
    /// Fall back to random play (for production)
    FallbackRandom,
}

/// Create an AI player from ai_type string and optional config.
///
/// Currently supports:
/// - "heuristic": the deterministic house policy
/// - "random": RandomPlayer with optional seed from config
///
/// Returns None if ai_type is unrecognized.
pub fn create_ai(ai_type: &str, config: Option<&JsonValue>) -> Option<Box<dyn AiPlayer>> {
    let seed = config.and_then(|c| c.get("seed")).and_then(|s| s.as_u64());
    match ai_type {
        "heuristic" => Some(Box::new(Heuristic::new(seed))),
        "random" => Some(Box::new(RandomPlayer::new(seed))),
        _ => None,
    }
}
