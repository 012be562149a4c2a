//! Roster operations: room creation, joining, bots, leaving.
//!
//! These are glue around the domain roster helpers; they perform no game
//! logic of their own.

use rand::Rng;
use tracing::info;
use uuid::Uuid;

use super::GameFlowService;
use crate::domain::{GameState, Player, PlayerId, RoomId};
use crate::errors::domain::{ConflictKind, DomainError};
use crate::state::AppState;
use crate::AppError;

impl GameFlowService {
    /// Create a room with `host_name` seated as host.
    ///
    /// The room's RNG seed is drawn from entropy here, once; every shuffle
    /// afterwards derives from it.
    pub async fn create_room(
        &self,
        app: &AppState,
        host_name: impl Into<String>,
        avatar_index: u8,
    ) -> Result<GameState, AppError> {
        let room_id = Uuid::new_v4();
        let rng_seed: u64 = rand::rng().random();
        let mut state = GameState::new(room_id, rng_seed);
        state.add_player(Player::new(host_name, avatar_index, false))?;
        state.version = 1;
        app.store().save(&state).await?;
        info!(%room_id, "room created");
        Ok(state)
    }

    /// Seat a new player in a waiting room.
    pub async fn join_room(
        &self,
        app: &AppState,
        room_id: RoomId,
        name: impl Into<String>,
        avatar_index: u8,
    ) -> Result<(GameState, PlayerId), AppError> {
        let player = Player::new(name, avatar_index, false);
        let player_id = player.id;
        let (result, _) = self
            .run_mutation(app, room_id, move |state| Ok(state.add_player(player)?))
            .await?;
        info!(%room_id, %player_id, "player joined");
        Ok((result.state, player_id))
    }

    /// Seat a bot. Host-only.
    pub async fn add_bot(
        &self,
        app: &AppState,
        room_id: RoomId,
        host_id: PlayerId,
    ) -> Result<GameState, AppError> {
        let (result, _) = self
            .run_mutation(app, room_id, |state| {
                let seat = state.require_seat(host_id)?;
                if !state.players[seat as usize].is_host {
                    return Err(DomainError::conflict(
                        ConflictKind::NotHost,
                        "Only the host may add bots",
                    )
                    .into());
                }
                let name = format!("Bot {}", state.player_count() + 1);
                let avatar_index = state.player_count() as u8;
                Ok(state.add_player(Player::new(name, avatar_index, true))?)
            })
            .await?;
        info!(%room_id, "bot added");
        Ok(result.state)
    }

    /// Unseat a player from a waiting room. An emptied room is removed
    /// from the store.
    pub async fn leave_room(
        &self,
        app: &AppState,
        room_id: RoomId,
        player_id: PlayerId,
    ) -> Result<GameState, AppError> {
        let (result, _) = self
            .run_mutation(app, room_id, |state| Ok(state.remove_player(player_id)?))
            .await?;
        if result.state.players.is_empty() {
            app.store().remove(room_id).await?;
            info!(%room_id, "room emptied and removed");
        }
        Ok(result.state)
    }
}
