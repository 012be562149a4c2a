//! Edge-triggered lifecycle transitions derived from before/after states.
//!
//! The mutation wrapper captures a lifecycle view on both sides of a state
//! change and derives the transitions that drive notification fan-out, so
//! individual entry points never hand-roll "did the turn change" logic.

use super::state::{GameState, PlayerId, Seat, Status};

/// The slice of room state that lifecycle transitions are derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLifecycleView {
    pub version: u32,
    pub status: Status,
    pub turn: Option<Seat>,
    pub players: Vec<PlayerId>,
}

impl GameLifecycleView {
    pub fn of(state: &GameState) -> Self {
        Self {
            version: state.version,
            status: state.status,
            turn: state.turn,
            players: state.players.iter().map(|p| p.id).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Edge-triggered: the turn became a specific seat.
    TurnBecame { seat: Seat },

    /// Edge-triggered: room moved from Waiting -> Playing.
    GameStarted,

    /// Edge-triggered: room moved from Playing -> Finished.
    GameEnded,

    /// Edge-triggered: room moved from Finished -> Waiting (rematch).
    GameReset,

    /// Edge-triggered: a player appeared in the roster.
    PlayerJoined { player_id: PlayerId },

    /// Edge-triggered: a player disappeared from the roster.
    PlayerLeft { player_id: PlayerId },
}

/// Derive domain transitions from before/after lifecycle state.
pub fn derive_game_transitions(
    before: &GameLifecycleView,
    after: &GameLifecycleView,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Turn change
    if let Some(seat) = after.turn {
        if before.turn != Some(seat) {
            transitions.push(GameTransition::TurnBecame { seat });
        }
    }

    // 2. Game start (Waiting -> Playing)
    if before.status == Status::Waiting && after.status == Status::Playing {
        transitions.push(GameTransition::GameStarted);
    }

    // 3. Game end (!Finished -> Finished)
    if before.status != Status::Finished && after.status == Status::Finished {
        transitions.push(GameTransition::GameEnded);
    }

    // 4. Rematch reset (Finished -> Waiting)
    if before.status == Status::Finished && after.status == Status::Waiting {
        transitions.push(GameTransition::GameReset);
    }

    // 5. Roster changes
    for &id in &after.players {
        if !before.players.contains(&id) {
            transitions.push(GameTransition::PlayerJoined { player_id: id });
        }
    }
    for &id in &before.players {
        if !after.players.contains(&id) {
            transitions.push(GameTransition::PlayerLeft { player_id: id });
        }
    }

    transitions
}
