use tracing::{debug, info};

use super::GameFlowService;
use crate::domain::player_view::{view_for, PlayerView};
use crate::domain::plays::{self, ChallengeDecision};
use crate::domain::snapshot::{snapshot, GameSnapshot};
use crate::domain::{CardId, Color, GameState, PlayerId, RoomId};
use crate::repos::require_room;
use crate::state::AppState;
use crate::AppError;

impl GameFlowService {
    /// Play a card for `player_id`, resolving its effect.
    pub async fn play_card(
        &self,
        app: &AppState,
        room_id: RoomId,
        player_id: PlayerId,
        card_id: CardId,
        chosen_color: Option<Color>,
    ) -> Result<GameState, AppError> {
        debug!(%room_id, %player_id, %card_id, "playing card");
        let (result, outcome) = self
            .run_mutation(app, room_id, |state| {
                let seat = state.require_seat(player_id)?;
                Ok(plays::play_card(state, seat, card_id, chosen_color)?)
            })
            .await?;
        if outcome.round_finished {
            info!(%room_id, winner = ?outcome.winner, "round finished");
        }
        Ok(result.state)
    }

    /// Draw for `player_id`: absorbs a pending stack, accepts an open
    /// challenge, or takes the optional single card of a normal turn.
    pub async fn draw_card(
        &self,
        app: &AppState,
        room_id: RoomId,
        player_id: PlayerId,
    ) -> Result<GameState, AppError> {
        debug!(%room_id, %player_id, "drawing");
        let (result, outcome) = self
            .run_mutation(app, room_id, |state| {
                let seat = state.require_seat(player_id)?;
                Ok(plays::draw_card(state, seat)?)
            })
            .await?;
        debug!(
            %room_id,
            cards_drawn = outcome.cards_drawn,
            absorbed_stack = outcome.absorbed_stack,
            "draw resolved"
        );
        Ok(result.state)
    }

    /// End the turn after drawing produced nothing the player plays.
    pub async fn pass_turn(
        &self,
        app: &AppState,
        room_id: RoomId,
        player_id: PlayerId,
    ) -> Result<GameState, AppError> {
        debug!(%room_id, %player_id, "passing");
        let (result, _) = self
            .run_mutation(app, room_id, |state| {
                let seat = state.require_seat(player_id)?;
                Ok(plays::pass_turn(state, seat)?)
            })
            .await?;
        Ok(result.state)
    }

    /// Declare UNO while holding exactly two cards.
    pub async fn declare_uno(
        &self,
        app: &AppState,
        room_id: RoomId,
        player_id: PlayerId,
    ) -> Result<GameState, AppError> {
        debug!(%room_id, %player_id, "declaring UNO");
        let (result, _) = self
            .run_mutation(app, room_id, |state| {
                let seat = state.require_seat(player_id)?;
                Ok(plays::declare_uno(state, seat)?)
            })
            .await?;
        Ok(result.state)
    }

    /// Catch `target_id` at one card without a declaration.
    pub async fn call_uno_on(
        &self,
        app: &AppState,
        room_id: RoomId,
        caller_id: PlayerId,
        target_id: PlayerId,
    ) -> Result<GameState, AppError> {
        debug!(%room_id, %caller_id, %target_id, "calling UNO");
        let (result, penalty) = self
            .run_mutation(app, room_id, |state| {
                let caller = state.require_seat(caller_id)?;
                let target = state.require_seat(target_id)?;
                Ok(plays::call_uno_on(state, caller, target)?)
            })
            .await?;
        info!(%room_id, %target_id, cards_drawn = penalty.cards_drawn, "UNO penalty applied");
        Ok(result.state)
    }

    /// Resolve an open wild-draw-four challenge as `player_id`.
    pub async fn resolve_challenge(
        &self,
        app: &AppState,
        room_id: RoomId,
        player_id: PlayerId,
        decision: ChallengeDecision,
    ) -> Result<GameState, AppError> {
        debug!(%room_id, %player_id, ?decision, "resolving challenge");
        let (result, outcome) = self
            .run_mutation(app, room_id, |state| {
                let seat = state.require_seat(player_id)?;
                Ok(plays::resolve_challenge(state, seat, decision)?)
            })
            .await?;
        info!(
            %room_id,
            play_was_legal = ?outcome.play_was_legal,
            penalized = outcome.penalized,
            cards_drawn = outcome.cards_drawn,
            "challenge resolved"
        );
        Ok(result.state)
    }

    /// Public snapshot of a room (no hands).
    pub async fn room_snapshot(
        &self,
        app: &AppState,
        room_id: RoomId,
    ) -> Result<GameSnapshot, AppError> {
        let state = require_room(app.store(), room_id).await?;
        Ok(snapshot(&state))
    }

    /// Redacted per-player view, the decision surface for bots and UIs.
    pub async fn player_view(
        &self,
        app: &AppState,
        room_id: RoomId,
        player_id: PlayerId,
    ) -> Result<PlayerView, AppError> {
        let state = require_room(app.store(), room_id).await?;
        let seat = state.require_seat(player_id)?;
        Ok(view_for(&state, seat)?)
    }
}
