//! AI player trait definition.

use std::fmt;

use crate::domain::player_view::PlayerView;
use crate::domain::{CardId, Color};
use crate::error::AppError;

/// Errors that can occur during AI decision-making.
#[derive(Debug)]
pub enum AiError {
    /// AI encountered an internal error
    Internal(String),
    /// AI produced or faced an invalid move situation
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        AppError::internal(format!("AI error: {err}"))
    }
}

/// The action a decision policy settles on.
///
/// Exactly the surface a human player has: play a card (with a color when
/// it is a wild, optionally declaring UNO first), draw, pass, or answer an
/// open wild-draw-four challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotAction {
    Play {
        card: CardId,
        chosen_color: Option<Color>,
        declare_uno: bool,
    },
    Draw,
    Pass,
    ResolveChallenge {
        challenge: bool,
    },
}

/// Trait for AI players.
///
/// Implementations receive the game state visible to their seat and must
/// choose a legal action. `view.legal_plays` is the single source of play
/// legality; implementations should never re-derive game rules.
///
/// The same `decide` function serves scheduled bot turns and any auto-play
/// path for an absent human; nothing in an implementation may depend on who
/// invokes it.
pub trait AiPlayer: Send + Sync {
    fn decide(&self, view: &PlayerView) -> Result<BotAction, AiError>;
}
