//! Player view of game state - what information is visible to one seat.
//!
//! [`PlayerView`] is the primary interface between the engine and decision
//! makers: AI policies receive it in [`crate::ai::AiPlayer::decide`], and a
//! UI for human players renders from the same struct. It carries the seat's
//! own hand, every public fact, and the precomputed set of legal plays, so
//! nobody outside the domain layer re-implements game rules.

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, CardId, Color};
use super::rules::valid_plays;
use super::state::{
    ChallengeState, Direction, GameState, PendingDraw, RoomId, Seat, Status,
};
use super::turns::next_seat;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Public facts about one other seat at the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpponentPublic {
    pub seat: Seat,
    pub name: String,
    pub card_count: usize,
    pub said_uno: bool,
    pub is_bot: bool,
}

/// Everything `seat` can see at a decision point, plus legality helpers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub room_id: RoomId,
    pub seat: Seat,
    pub status: Status,
    /// Your current hand.
    pub hand: Vec<Card>,
    /// Cards the oracle accepts right now, a subset of `hand`.
    pub legal_plays: Vec<Card>,
    pub top_card: Option<Card>,
    pub current_color: Option<Color>,
    pub direction: Direction,
    pub turn: Option<Seat>,
    pub pending_draw: Option<PendingDraw>,
    /// True when this seat must answer an open wild-draw-four challenge.
    pub challenge_to_answer: bool,
    pub has_drawn_this_turn: bool,
    /// The card drawn this turn, if any.
    pub drawn_card: Option<CardId>,
    /// Other seats in table order starting after this one.
    pub opponents: Vec<OpponentPublic>,
    /// Hand size of the seat that would act after this one.
    pub next_seat_hand_size: Option<usize>,
}

impl PlayerView {
    pub fn is_my_turn(&self) -> bool {
        self.turn == Some(self.seat)
    }

    /// The legal play with the given id, if any.
    pub fn legal_play(&self, card_id: CardId) -> Option<&Card> {
        self.legal_plays.iter().find(|c| c.id == card_id)
    }
}

/// Build the redacted view of `state` for `seat`.
pub fn view_for(state: &GameState, seat: Seat) -> Result<PlayerView, DomainError> {
    let Some(player) = state.player(seat) else {
        return Err(DomainError::not_found(
            NotFoundKind::Player,
            format!("No player at seat {seat}"),
        ));
    };

    let n = state.player_count();
    let mut opponents = Vec::with_capacity(n.saturating_sub(1));
    for step in 1..n {
        let other = (usize::from(seat) + step) % n;
        let p = &state.players[other];
        opponents.push(OpponentPublic {
            seat: other as Seat,
            name: p.name.clone(),
            card_count: p.cards.len(),
            said_uno: p.said_uno,
            is_bot: p.is_bot,
        });
    }

    let challenge_to_answer = matches!(
        state.challenge,
        Some(ChallengeState { challenger, .. }) if challenger == seat
    );

    let next_seat_hand_size = if n > 1 && state.status == Status::Playing {
        let after = next_seat(state, seat);
        state.player(after).map(|p| p.cards.len())
    } else {
        None
    };

    Ok(PlayerView {
        room_id: state.room_id,
        seat,
        status: state.status,
        hand: player.cards.clone(),
        legal_plays: valid_plays(state, seat),
        top_card: state.discard_pile.last().copied(),
        current_color: state.current_color,
        direction: state.direction,
        turn: state.turn,
        pending_draw: state.pending_draw,
        challenge_to_answer,
        has_drawn_this_turn: state.has_drawn_this_turn,
        drawn_card: state.drawn_card,
        opponents,
        next_seat_hand_size,
    })
}
