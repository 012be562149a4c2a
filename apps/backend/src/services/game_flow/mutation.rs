use tracing::warn;

use super::GameFlowService;
use crate::domain::game_transition::{
    derive_game_transitions, GameLifecycleView, GameTransition,
};
use crate::domain::snapshot::snapshot;
use crate::domain::{GameState, RoomId};
use crate::protocol::ServerMsg;
use crate::repos::require_room;
use crate::state::AppState;
use crate::AppError;

/// Outcome of a room mutation: the saved state plus the lifecycle
/// transitions the mutation caused.
#[derive(Debug)]
pub struct GameFlowMutationResult {
    pub state: GameState,
    pub old_version: u32,
    pub transitions: Vec<GameTransition>,
}

impl GameFlowMutationResult {
    pub fn final_version(&self) -> u32 {
        self.state.version
    }
}

impl GameFlowService {
    /// Run one mutation against a freshly fetched working copy.
    ///
    /// On mutation error the store is untouched and nothing is broadcast -
    /// a rejected action must leave no side effects. On success the version
    /// is bumped, the state saved (last-write-wins), transitions derived
    /// from the before/after lifecycle views, and the room notified.
    pub(super) async fn run_mutation<T, F>(
        &self,
        app: &AppState,
        room_id: RoomId,
        mutation: F,
    ) -> Result<(GameFlowMutationResult, T), AppError>
    where
        F: FnOnce(&mut GameState) -> Result<T, AppError>,
    {
        let mut state = require_room(app.store(), room_id).await?;
        let before = GameLifecycleView::of(&state);
        let old_version = before.version;

        let value = match mutation(&mut state) {
            Ok(value) => value,
            Err(err) => {
                if err.is_desync() {
                    warn!(%room_id, code = %err.code(), "state desync detected; caller should refresh");
                }
                return Err(err);
            }
        };

        state.version = old_version.wrapping_add(1);
        app.store().save(&state).await?;

        let after = GameLifecycleView::of(&state);
        let transitions = derive_game_transitions(&before, &after);
        self.notify_room(app, &state, &transitions).await;

        Ok((
            GameFlowMutationResult {
                state,
                old_version,
                transitions,
            },
            value,
        ))
    }

    /// Broadcast the post-mutation state plus per-transition nudges.
    /// Delivery is best-effort; failures are logged, never surfaced.
    async fn notify_room(
        &self,
        app: &AppState,
        state: &GameState,
        transitions: &[GameTransition],
    ) {
        let room_id = state.room_id;
        let room_state = ServerMsg::RoomState {
            room_id,
            version: state.version,
            game: snapshot(state),
        };
        if let Err(err) = app.notifier().broadcast(room_id, room_state).await {
            warn!(%room_id, %err, "room state broadcast failed");
        }

        for transition in transitions {
            let msg = match transition {
                GameTransition::TurnBecame { seat } => Some(ServerMsg::YourTurn {
                    room_id,
                    seat: *seat,
                    version: state.version,
                }),
                GameTransition::GameEnded => {
                    state.match_history.last().map(|result| ServerMsg::RoundEnded {
                        room_id,
                        winner: result.winner,
                        final_score: result.final_score,
                    })
                }
                _ => None,
            };
            if let Some(msg) = msg {
                if let Err(err) = app.notifier().broadcast(room_id, msg).await {
                    warn!(%room_id, %err, "transition broadcast failed");
                }
            }
        }
    }
}
