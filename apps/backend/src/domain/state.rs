//! The room's game-state aggregate and seat/turn bookkeeping.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cards_types::{Card, CardId, CardKind, Color};
use super::rules::{MAX_LOG_ENTRIES, MAX_PLAYERS};
use super::scoring::MatchResult;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

pub type Seat = u8;
pub type PlayerId = Uuid;
pub type RoomId = Uuid;

/// Room lifecycle status. `Finished` is terminal for a round; a rematch
/// resets the room to `Waiting`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Waiting,
    Playing,
    Finished,
}

/// Direction of play around the table.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Seat step applied on every turn advance: +1 or -1.
    pub fn delta(self) -> i8 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Which card kind an open draw stack accepts.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StackKind {
    DrawTwo,
    WildDrawFour,
}

impl StackKind {
    /// Stackable kind for a played card, if any.
    pub fn from_card_kind(kind: CardKind) -> Option<Self> {
        match kind {
            CardKind::DrawTwo => Some(StackKind::DrawTwo),
            CardKind::WildDrawFour => Some(StackKind::WildDrawFour),
            _ => None,
        }
    }

    /// Cards added to the stack by one more card of this kind.
    pub fn draw_increment(self) -> u8 {
        match self {
            StackKind::DrawTwo => 2,
            StackKind::WildDrawFour => 4,
        }
    }
}

/// An accumulating draw-two / wild-draw-four chain awaiting a
/// stack-or-absorb decision from the current player.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct PendingDraw {
    pub kind: StackKind,
    pub count: u8,
}

/// An open wild-draw-four legality challenge.
///
/// Present only between an unstacked wild-draw-four play and the
/// challenger's decision; `prior_color` is the color that was in effect
/// before the wild was played, recorded so legality can be judged later.
/// Never coexists with a pending draw stack.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct ChallengeState {
    pub challenger: Seat,
    pub challenged: Seat,
    pub card_played: CardId,
    pub prior_color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub cards: Vec<Card>,
    pub is_host: bool,
    pub is_bot: bool,
    /// True only between a declaration at two cards and the play down to one,
    /// or while the hand actually holds one card. Force-reset by any draw.
    pub said_uno: bool,
    /// Filled at round end; None while a round is live.
    pub points: Option<u32>,
    /// Cosmetic avatar reference, opaque to the engine.
    pub avatar_index: u8,
}

impl Player {
    pub fn new(name: impl Into<String>, avatar_index: u8, is_bot: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            cards: Vec::new(),
            is_host: false,
            is_bot,
            said_uno: false,
            points: None,
            avatar_index,
        }
    }

    pub fn hand_size(&self) -> usize {
        self.cards.len()
    }
}

/// Entire room container, sufficient for pure domain operations.
///
/// One value of this type is the unit of persistence and of serialization;
/// the facade fetches a fresh copy per action, mutates it, and saves it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub room_id: RoomId,
    pub status: Status,
    /// Seat order defines turn order.
    pub players: Vec<Player>,
    /// Seat whose turn it is; None outside a live round.
    pub turn: Option<Seat>,
    pub direction: Direction,
    /// Draw pile; the top card is the end of the vec.
    pub draw_pile: Vec<Card>,
    /// Discard pile; the top card is the end of the vec. Never empty while a
    /// round is live.
    pub discard_pile: Vec<Card>,
    /// Color new plays must match; Some for the whole of a live round.
    pub current_color: Option<Color>,
    pub has_drawn_this_turn: bool,
    /// Card drawn this turn, if any; the only card a post-draw play may use.
    pub drawn_card: Option<CardId>,
    pub pending_draw: Option<PendingDraw>,
    pub challenge: Option<ChallengeState>,
    /// Winning seat, set only when status is Finished.
    pub winner: Option<Seat>,
    /// Rounds started so far; 1-based during the first round.
    pub round_no: u32,
    /// Base seed fixed at room creation; every shuffle derives from it.
    pub rng_seed: u64,
    /// Reshuffles performed this round (seed derivation input).
    pub reshuffles: u32,
    /// Append-only log of finished rounds.
    pub match_history: Vec<MatchResult>,
    /// Append-only human-readable event trail, bounded length.
    pub log: Vec<String>,
    /// Bumped by one on every successful facade mutation.
    pub version: u32,
}

impl GameState {
    pub fn new(room_id: RoomId, rng_seed: u64) -> Self {
        Self {
            room_id,
            status: Status::Waiting,
            players: Vec::new(),
            turn: None,
            direction: Direction::Clockwise,
            draw_pile: Vec::new(),
            discard_pile: Vec::new(),
            current_color: None,
            has_drawn_this_turn: false,
            drawn_card: None,
            pending_draw: None,
            challenge: None,
            winner: None,
            round_no: 0,
            rng_seed,
            reshuffles: 0,
            match_history: Vec::new(),
            log: Vec::new(),
            version: 0,
        }
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players.get(seat as usize)
    }

    pub fn player_mut(&mut self, seat: Seat) -> Option<&mut Player> {
        self.players.get_mut(seat as usize)
    }

    pub fn seat_of(&self, player_id: PlayerId) -> Option<Seat> {
        self.players
            .iter()
            .position(|p| p.id == player_id)
            .map(|i| i as Seat)
    }

    /// Seat lookup that treats an unknown player as a state desync.
    pub fn require_seat(&self, player_id: PlayerId) -> Result<Seat, DomainError> {
        self.seat_of(player_id).ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Player,
                format!("Player {player_id} not in room {}", self.room_id),
            )
        })
    }

    /// Add a player to a waiting room. The first player becomes host.
    pub fn add_player(&mut self, player: Player) -> Result<Seat, DomainError> {
        if self.status != Status::Waiting {
            return Err(DomainError::conflict(
                ConflictKind::AlreadyStarted,
                "Cannot join once the round has started",
            ));
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(DomainError::conflict(
                ConflictKind::RoomFull,
                format!("Room already seats {MAX_PLAYERS} players"),
            ));
        }
        let mut player = player;
        player.is_host = self.players.is_empty();
        let seat = self.players.len() as Seat;
        self.push_log(format!("{} joined", player.name));
        self.players.push(player);
        Ok(seat)
    }

    /// Remove a player from a waiting room, promoting a new host if needed.
    pub fn remove_player(&mut self, player_id: PlayerId) -> Result<Player, DomainError> {
        if self.status != Status::Waiting {
            return Err(DomainError::conflict(
                ConflictKind::AlreadyStarted,
                "Cannot leave once the round has started",
            ));
        }
        let seat = self.require_seat(player_id)?;
        let removed = self.players.remove(seat as usize);
        if removed.is_host {
            if let Some(next_host) = self.players.first_mut() {
                next_host.is_host = true;
            }
        }
        self.push_log(format!("{} left", removed.name));
        Ok(removed)
    }

    /// Append to the event trail, dropping the oldest entry past the bound.
    pub fn push_log(&mut self, entry: impl Into<String>) {
        self.log.push(entry.into());
        if self.log.len() > MAX_LOG_ENTRIES {
            self.log.remove(0);
        }
    }
}

/// Seat / turn math helpers.
///
/// These live in `domain` so every layer (services, views, bots) shares a
/// single source of truth for rotation and "who acts next".
#[inline]
pub fn seat_offset(seat: Seat, delta: i8, player_count: usize) -> Seat {
    debug_assert!(player_count > 0);
    let n = player_count as i16;
    ((i16::from(seat) + i16::from(delta)).rem_euclid(n)) as Seat
}

pub fn require_turn(state: &GameState, ctx: &'static str) -> Result<Seat, DomainError> {
    state.turn.ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: turn must be set ({ctx})"))
    })
}

pub fn require_current_color(state: &GameState, ctx: &'static str) -> Result<Color, DomainError> {
    state.current_color.ok_or_else(|| {
        DomainError::validation_other(format!(
            "Invariant violated: current color must be set ({ctx})"
        ))
    })
}
