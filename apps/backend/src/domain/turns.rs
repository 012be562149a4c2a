//! Turn/direction state machine.
//!
//! All rotation goes through [`seat_offset`] so direction, skip and the
//! two-player reverse special case share one source of truth.

use super::state::{require_turn, seat_offset, GameState, Seat};
use crate::errors::domain::DomainError;

/// Seat that acts after `from`, honoring the current direction.
pub fn next_seat(state: &GameState, from: Seat) -> Seat {
    seat_offset(from, state.direction.delta(), state.player_count())
}

/// Hand the turn to `seat`, resetting the per-turn draw bookkeeping.
pub fn set_turn(state: &mut GameState, seat: Seat) {
    state.turn = Some(seat);
    state.has_drawn_this_turn = false;
    state.drawn_card = None;
}

/// Advance the turn by `steps` seats in the current direction.
///
/// One step is a normal advance; two steps realize a skip (the intermediate
/// seat never gets to act).
pub fn advance_turn_by(state: &mut GameState, steps: u8) -> Result<Seat, DomainError> {
    let mut seat = require_turn(state, "advance_turn_by")?;
    for _ in 0..steps {
        seat = next_seat(state, seat);
    }
    set_turn(state, seat);
    Ok(seat)
}

/// Normal single-seat turn advance.
pub fn advance_turn(state: &mut GameState) -> Result<Seat, DomainError> {
    advance_turn_by(state, 1)
}

/// Apply a reverse: flip direction and advance.
///
/// With two players a reverse is defined to behave exactly like a skip: the
/// sole opponent is skipped and the turn returns to the player who reversed.
/// This must be special-cased; the generic flip-then-advance lands on the
/// opponent.
pub fn apply_reverse(state: &mut GameState) -> Result<Seat, DomainError> {
    state.direction = state.direction.flipped();
    if state.player_count() == 2 {
        advance_turn_by(state, 2)
    } else {
        advance_turn(state)
    }
}
