//! Round scoring, match history and rematch reset.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::cards_logic::hand_points;
use super::state::{GameState, PlayerId, Seat, Status};

/// One player's line in a finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerResult {
    pub player: PlayerId,
    pub name: String,
    /// Zero for the winner; the value of the remaining hand otherwise.
    pub points: u32,
}

/// Record of a finished round, appended to the room's match history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: PlayerId,
    pub finished_at: OffsetDateTime,
    /// Sum of all losers' points, kept for leaderboard purposes.
    pub final_score: u32,
    pub player_results: Vec<PlayerResult>,
}

/// Finish the round won by `winner`: freeze scores, append history.
///
/// The winner's recorded points are zero; each other player scores the value
/// of the cards left in their hand. The losers' sum is recorded once as
/// `final_score`.
pub fn finish_round(state: &mut GameState, winner: Seat) {
    state.status = Status::Finished;
    state.winner = Some(winner);
    state.turn = None;
    state.pending_draw = None;
    state.challenge = None;
    state.has_drawn_this_turn = false;
    state.drawn_card = None;

    let mut final_score = 0u32;
    let mut player_results = Vec::with_capacity(state.players.len());
    for (seat, player) in state.players.iter_mut().enumerate() {
        let points = if seat == winner as usize {
            0
        } else {
            hand_points(&player.cards)
        };
        player.points = Some(points);
        final_score += points;
        player_results.push(PlayerResult {
            player: player.id,
            name: player.name.clone(),
            points,
        });
    }

    let winner_id = state.players[winner as usize].id;
    let winner_name = state.players[winner as usize].name.clone();
    state.match_history.push(MatchResult {
        winner: winner_id,
        finished_at: OffsetDateTime::now_utc(),
        final_score,
        player_results,
    });
    state.push_log(format!("{winner_name} wins the round ({final_score} points)"));
}

/// Reset a finished room back to Waiting for a rematch.
///
/// Clears every per-round transient field but preserves the roster and the
/// match history. Hands are emptied; the next `start_round` deals fresh.
pub fn reset_for_rematch(state: &mut GameState) {
    state.status = Status::Waiting;
    state.turn = None;
    state.direction = Default::default();
    state.draw_pile.clear();
    state.discard_pile.clear();
    state.current_color = None;
    state.has_drawn_this_turn = false;
    state.drawn_card = None;
    state.pending_draw = None;
    state.challenge = None;
    state.winner = None;
    state.reshuffles = 0;
    for player in state.players.iter_mut() {
        player.cards.clear();
        player.said_uno = false;
        player.points = None;
    }
    state.push_log("Room reset for a rematch");
}
