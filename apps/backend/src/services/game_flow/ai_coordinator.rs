use tracing::{debug, warn};

use super::GameFlowService;
use crate::ai::{AiFailureMode, AiPlayer, BotAction, Heuristic, RandomPlayer};
use crate::domain::player_view::view_for;
use crate::domain::plays::ChallengeDecision;
use crate::domain::{GameState, PlayerId, RoomId, Status};
use crate::repos::require_room;
use crate::state::AppState;
use crate::AppError;

impl GameFlowService {
    /// Execute one bot decision if the seat to act is a bot.
    ///
    /// Returns true if a bot action ran. Driven by an external scheduler
    /// (timer, background job, test loop) after each mutation; nothing here
    /// acts spontaneously, and every call re-validates preconditions
    /// against a freshly fetched state, so "cancellation" is simply not
    /// being re-invoked.
    pub async fn run_pending_bot_turn(
        &self,
        app: &AppState,
        room_id: RoomId,
        failure_mode: AiFailureMode,
    ) -> Result<bool, AppError> {
        let state = require_room(app.store(), room_id).await?;
        if state.status != Status::Playing {
            return Ok(false);
        }
        let Some(seat) = state.turn else {
            return Ok(false);
        };
        let Some(player) = state.player(seat) else {
            return Ok(false);
        };
        if !player.is_bot {
            debug!(%room_id, seat, "human to act, bot coordinator idle");
            return Ok(false);
        }
        let player_id = player.id;

        let view = view_for(&state, seat)?;
        let policy = Heuristic::new(None);
        let action = match policy.decide(&view) {
            Ok(action) => action,
            Err(err) => match failure_mode {
                AiFailureMode::Fail => return Err(err.into()),
                AiFailureMode::FallbackRandom => {
                    warn!(%room_id, seat, %err, "bot policy failed, falling back to random");
                    RandomPlayer::new(None).decide(&view)?
                }
            },
        };

        debug!(%room_id, seat, ?action, "bot acting");
        self.apply_bot_action(app, room_id, player_id, action).await?;
        Ok(true)
    }

    async fn apply_bot_action(
        &self,
        app: &AppState,
        room_id: RoomId,
        player_id: PlayerId,
        action: BotAction,
    ) -> Result<GameState, AppError> {
        match action {
            BotAction::Play {
                card,
                chosen_color,
                declare_uno,
            } => {
                if declare_uno {
                    self.declare_uno(app, room_id, player_id).await?;
                }
                self.play_card(app, room_id, player_id, card, chosen_color)
                    .await
            }
            BotAction::Draw => self.draw_card(app, room_id, player_id).await,
            BotAction::Pass => self.pass_turn(app, room_id, player_id).await,
            BotAction::ResolveChallenge { challenge } => {
                let decision = if challenge {
                    ChallengeDecision::Challenge
                } else {
                    ChallengeDecision::Accept
                };
                self.resolve_challenge(app, room_id, player_id, decision)
                    .await
            }
        }
    }
}
