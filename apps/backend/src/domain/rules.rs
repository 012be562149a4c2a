//! Game constants and the play-validity oracle.

use super::cards_logic::faces_match;
use super::cards_types::{Card, CardKind};
use super::state::{GameState, PendingDraw, Seat, StackKind, Status};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;
pub const OPENING_HAND: usize = 7;
pub const DECK_SIZE: usize = 108;

/// Cards drawn by a player caught without declaring UNO.
pub const UNO_PENALTY_DRAW: u8 = 2;
/// Cards drawn when accepting an unchallenged wild-draw-four.
pub const WILD_FOUR_DRAW: u8 = 4;
/// Extra cards drawn by a challenger whose challenge fails.
pub const FAILED_CHALLENGE_PENALTY: u8 = 2;

/// Upper bound on the human-readable event trail kept on the state.
pub const MAX_LOG_ENTRIES: usize = 100;

fn stack_accepts(pending: &PendingDraw, kind: CardKind) -> bool {
    match pending.kind {
        StackKind::DrawTwo => kind == CardKind::DrawTwo,
        StackKind::WildDrawFour => kind == CardKind::WildDrawFour,
    }
}

/// Decide whether `card` may legally be played on the current state.
///
/// Stateless with respect to the caller: everything consulted lives on the
/// state value passed in. Rules in priority order:
///
/// 1. While a draw stack is pending, only a card of the matching stackable
///    kind is valid - nothing else, not even a plain wild.
/// 2. While a wild-draw-four challenge is open, nothing is playable; the
///    challenge has its own resolution entry point.
/// 3. Wild and wild-draw-four are otherwise always valid.
/// 4. First card of the round (empty discard) is always valid.
/// 5. Otherwise: match the color in effect, match the top card's face color,
///    or match the top card's face (same number value, or same action kind -
///    a skip is valid on any skip, a reverse on any reverse).
pub fn is_valid_play(state: &GameState, card: &Card) -> bool {
    if let Some(pending) = &state.pending_draw {
        return stack_accepts(pending, card.kind);
    }
    if state.challenge.is_some() {
        return false;
    }
    if card.kind.is_wild() {
        return true;
    }
    let Some(top) = state.discard_pile.last() else {
        return true;
    };
    if faces_match(card, top) {
        return true;
    }
    let color_in_effect = state.current_color.unwrap_or_else(|| top.effective_color());
    card.color == color_in_effect || card.color == top.color
}

/// All cards in `seat`'s hand the oracle currently accepts. Empty outside
/// a live round.
pub fn valid_plays(state: &GameState, seat: Seat) -> Vec<Card> {
    if state.status != Status::Playing {
        return Vec::new();
    }
    let Some(player) = state.player(seat) else {
        return Vec::new();
    };
    player
        .cards
        .iter()
        .filter(|c| is_valid_play(state, c))
        .copied()
        .collect()
}
