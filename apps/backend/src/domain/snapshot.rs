//! Public snapshot API for observing room state without exposing hands.
//!
//! A [`GameSnapshot`] is what gets broadcast to every room member after a
//! mutation: all public facts, hand counts instead of hands. Per-seat
//! private views live in [`super::player_view`].

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Color};
use super::scoring::MatchResult;
use super::state::{Direction, GameState, PendingDraw, PlayerId, RoomId, Seat, Status};

/// Public info about a single seat in the room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatPublic {
    pub seat: Seat,
    pub player_id: PlayerId,
    pub name: String,
    pub card_count: usize,
    pub said_uno: bool,
    pub is_host: bool,
    pub is_bot: bool,
    pub avatar_index: u8,
    /// Filled once the round is finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
}

/// Top-level public snapshot of a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub room_id: RoomId,
    pub version: u32,
    pub status: Status,
    pub seats: Vec<SeatPublic>,
    pub turn: Option<Seat>,
    /// Player id behind `turn`, for clients that track identities.
    pub current_player: Option<PlayerId>,
    pub direction: Direction,
    pub top_card: Option<Card>,
    pub current_color: Option<Color>,
    pub draw_pile_size: usize,
    pub pending_draw: Option<PendingDraw>,
    pub challenge_active: bool,
    pub winner: Option<PlayerId>,
    pub log: Vec<String>,
    pub match_history: Vec<MatchResult>,
}

/// Build the public snapshot of `state`.
pub fn snapshot(state: &GameState) -> GameSnapshot {
    let seats = state
        .players
        .iter()
        .enumerate()
        .map(|(seat, p)| SeatPublic {
            seat: seat as Seat,
            player_id: p.id,
            name: p.name.clone(),
            card_count: p.cards.len(),
            said_uno: p.said_uno,
            is_host: p.is_host,
            is_bot: p.is_bot,
            avatar_index: p.avatar_index,
            points: p.points,
        })
        .collect();

    GameSnapshot {
        room_id: state.room_id,
        version: state.version,
        status: state.status,
        seats,
        turn: state.turn,
        current_player: state
            .turn
            .and_then(|s| state.player(s))
            .map(|p| p.id),
        direction: state.direction,
        top_card: state.discard_pile.last().copied(),
        current_color: state.current_color,
        draw_pile_size: state.draw_pile.len(),
        pending_draw: state.pending_draw,
        challenge_active: state.challenge.is_some(),
        winner: state.winner.and_then(|s| state.player(s)).map(|p| p.id),
        log: state.log.clone(),
        match_history: state.match_history.clone(),
    }
}
