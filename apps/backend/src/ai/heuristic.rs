//! Heuristic - the deterministic house policy for bot seats.
//!
//! Decision order:
//! - Facing a wild-draw-four challenge: always accept, never challenge.
//! - Under a pending draw stack: extend it with a matching stackable card if
//!   one is held, else draw (which absorbs the stack).
//! - After drawing this turn: play the just-drawn card if it became valid,
//!   else pass.
//! - Otherwise, among valid cards: an offensive wild-draw-four when the next
//!   seat is close to going out, a finishing wild-draw-four when this play
//!   leaves two cards, else the highest point-value card (aggressive
//!   hand-thinning).
//! - Wild colors: the color holding the most remaining points, tie-broken
//!   toward the color in effect, then canonical color order.
//!
//! No randomness; the same view always yields the same action.

use crate::ai::{AiError, AiPlayer, BotAction};
use crate::domain::player_view::PlayerView;
use crate::domain::{Card, CardKind, Color};

#[derive(Clone, Default)]
pub struct Heuristic {
    _seed: Option<u64>, // reserved, currently unused for strict determinism
}

impl Heuristic {
    pub const NAME: &'static str = "Heuristic";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        Self { _seed: seed }
    }

    /// Color with the highest remaining point total after `playing` leaves
    /// the hand. Ties go to the color in effect, then canonical order.
    fn choose_color(view: &PlayerView, playing: &Card) -> Color {
        let mut totals = [0u32; 4];
        for card in view.hand.iter().filter(|c| c.id != playing.id) {
            if let Some(idx) = Color::CHOOSABLE.iter().position(|&c| c == card.color) {
                totals[idx] += card.kind.point_value();
            }
        }
        let best = totals.iter().copied().max().unwrap_or(0);

        if let Some(current) = view.current_color {
            if let Some(idx) = Color::CHOOSABLE.iter().position(|&c| c == current) {
                if totals[idx] == best {
                    return current;
                }
            }
        }
        Color::CHOOSABLE
            .iter()
            .zip(totals)
            .find(|(_, total)| *total == best)
            .map(|(&color, _)| color)
            .unwrap_or(Color::Red)
    }

    fn play(view: &PlayerView, card: &Card) -> BotAction {
        let chosen_color = card
            .kind
            .is_wild()
            .then(|| Self::choose_color(view, card));
        BotAction::Play {
            card: card.id,
            chosen_color,
            declare_uno: view.hand.len() == 2,
        }
    }
}

impl AiPlayer for Heuristic {
    fn decide(&self, view: &PlayerView) -> Result<BotAction, AiError> {
        // Challenges are never worth the six-card downside to this policy.
        if view.challenge_to_answer {
            return Ok(BotAction::ResolveChallenge { challenge: false });
        }

        // Under a stack, legal plays are exactly the matching stackable cards.
        if view.pending_draw.is_some() {
            return Ok(match view.legal_plays.first() {
                Some(card) => Self::play(view, card),
                None => BotAction::Draw,
            });
        }

        if view.has_drawn_this_turn {
            if let Some(card) = view.drawn_card.and_then(|id| view.legal_play(id)) {
                return Ok(Self::play(view, card));
            }
            return Ok(BotAction::Pass);
        }

        let legal = &view.legal_plays;
        let Some(first) = legal.first() else {
            return Ok(BotAction::Draw);
        };

        let wild_four = legal.iter().find(|c| c.kind == CardKind::WildDrawFour);
        let next_hand = view.next_seat_hand_size.unwrap_or(usize::MAX);

        if let Some(w4) = wild_four {
            // Offensive: hit a next seat that is close to going out.
            if next_hand < 3 {
                return Ok(Self::play(view, w4));
            }
            // Finishing: this play leaves exactly two cards.
            if view.hand.len() == 3 {
                return Ok(Self::play(view, w4));
            }
        }

        let mut best = first;
        for card in &legal[1..] {
            if card.kind.point_value() > best.kind.point_value() {
                best = card;
            }
        }
        Ok(Self::play(view, best))
    }
}
