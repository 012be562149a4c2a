//! Server-to-client message types broadcast after room mutations.
//!
//! The engine does not own a transport; whatever delivery layer is plugged
//! in as a [`crate::repos::RoomNotifier`] fans these out verbatim.

use serde::{Deserialize, Serialize};

use crate::domain::snapshot::GameSnapshot;
use crate::domain::{PlayerId, RoomId, Seat};

pub const PROTOCOL_VERSION: i32 = 1;

#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    /// Full public state after a mutation; sent to every room member.
    RoomState {
        room_id: RoomId,
        version: u32,
        game: GameSnapshot,
    },

    /// Nudge for the seat that must act now.
    YourTurn {
        room_id: RoomId,
        seat: Seat,
        version: u32,
    },

    /// Terminal notice for a finished round.
    RoundEnded {
        room_id: RoomId,
        winner: PlayerId,
        final_score: u32,
    },

    Error {
        code: String,
        message: String,
    },
}
