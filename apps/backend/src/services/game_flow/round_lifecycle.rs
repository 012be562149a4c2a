use tracing::info;

use super::GameFlowService;
use crate::domain::{dealing, scoring, GameState, PlayerId, RoomId, Status};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::state::AppState;
use crate::AppError;

impl GameFlowService {
    /// Start a round: deal hands, seed the discard pile, hand out the
    /// opening turn. Host-only; requires a waiting room with 2-4 players.
    pub async fn start_round(
        &self,
        app: &AppState,
        room_id: RoomId,
        player_id: PlayerId,
    ) -> Result<GameState, AppError> {
        info!(%room_id, %player_id, "starting round");
        let (result, _) = self
            .run_mutation(app, room_id, |state| {
                let seat = state.require_seat(player_id)?;
                if !state.players[seat as usize].is_host {
                    return Err(DomainError::conflict(
                        ConflictKind::NotHost,
                        "Only the host may start the round",
                    )
                    .into());
                }
                Ok(dealing::start_round(state)?)
            })
            .await?;
        info!(%room_id, round_no = result.state.round_no, "round started");
        Ok(result.state)
    }

    /// Reset a finished room back to Waiting, preserving roster and match
    /// history. Host-only.
    pub async fn rematch(
        &self,
        app: &AppState,
        room_id: RoomId,
        player_id: PlayerId,
    ) -> Result<GameState, AppError> {
        info!(%room_id, %player_id, "rematch requested");
        let (result, _) = self
            .run_mutation(app, room_id, |state| {
                let seat = state.require_seat(player_id)?;
                if !state.players[seat as usize].is_host {
                    return Err(DomainError::conflict(
                        ConflictKind::NotHost,
                        "Only the host may reset the room",
                    )
                    .into());
                }
                if state.status != Status::Finished {
                    return Err(DomainError::validation(
                        ValidationKind::PhaseMismatch,
                        "Only a finished round can be reset",
                    )
                    .into());
                }
                scoring::reset_for_rematch(state);
                Ok(())
            })
            .await?;
        Ok(result.state)
    }
}
