//! Random AI player - makes random legal moves.
//!
//! [`RandomPlayer`] is the reference implementation of the
//! [`AiPlayer`](super::AiPlayer) trait and the fallback policy when a
//! configured AI errors. It chooses uniformly among legal actions, is
//! seedable for deterministic tests, and never panics.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer, BotAction};
use crate::domain::player_view::PlayerView;
use crate::domain::Color;

/// AI that makes random legal moves.
///
/// Mutable RNG state lives behind a `Mutex` since trait methods take
/// `&self`; `Some(seed)` gives reproducible behavior for tests, `None` seeds
/// from OS entropy.
pub struct RandomPlayer {
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(s) = seed {
            StdRng::seed_from_u64(s)
        } else {
            StdRng::from_os_rng()
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl AiPlayer for RandomPlayer {
    fn decide(&self, view: &PlayerView) -> Result<BotAction, AiError> {
        // Challenges are a coin this player never flips: accept, like the
        // house policy, so fallback behavior stays predictable.
        if view.challenge_to_answer {
            return Ok(BotAction::ResolveChallenge { challenge: false });
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        if let Some(card) = view.legal_plays.choose(&mut *rng) {
            let chosen_color = if card.kind.is_wild() {
                Color::CHOOSABLE.choose(&mut *rng).copied()
            } else {
                None
            };
            return Ok(BotAction::Play {
                card: card.id,
                chosen_color,
                declare_uno: view.hand.len() == 2,
            });
        }

        // No legal play: draw once, then pass (a pending stack is absorbed
        // by the draw itself).
        if view.has_drawn_this_turn && view.pending_draw.is_none() {
            Ok(BotAction::Pass)
        } else {
            Ok(BotAction::Draw)
        }
    }
}
