//! Test-only game state helpers for domain unit tests.

use uuid::Uuid;

use crate::ai::{AiPlayer, BotAction};
use crate::domain::dealing;
use crate::domain::player_view::view_for;
use crate::domain::plays::{
    self, draw_card, pass_turn, play_card, resolve_challenge, ChallengeDecision,
};
use crate::domain::state::{GameState, Player, Seat, Status};
use crate::domain::Card;

/// Parse a card token, panicking on bad fixtures.
pub fn card(token: &str) -> Card {
    token
        .parse()
        .unwrap_or_else(|e| panic!("bad card token {token:?}: {e}"))
}

/// Parse several card tokens into a hand.
pub fn hand(tokens: &[&str]) -> Vec<Card> {
    tokens.iter().map(|t| card(t)).collect()
}

/// Build a playing state with exactly the given hands and discard top.
///
/// Piles hold only what the test supplies (`with_draw_pile` to add one), so
/// card conservation does not hold for these states; use [`started_state`]
/// when it matters. Seat 0 is host and to act.
pub fn playing_state(hands: Vec<Vec<Card>>, top: Card) -> GameState {
    let mut state = GameState::new(Uuid::new_v4(), 7);
    for (i, cards) in hands.into_iter().enumerate() {
        let mut player = Player::new(format!("P{i}"), i as u8, false);
        player.is_host = i == 0;
        player.cards = cards;
        state.players.push(player);
    }
    state.status = Status::Playing;
    state.current_color = Some(top.effective_color());
    state.discard_pile = vec![top];
    state.turn = Some(0);
    state.round_no = 1;
    state
}

/// Attach a draw pile (top is the last token).
pub fn with_draw_pile(mut state: GameState, tokens: &[&str]) -> GameState {
    state.draw_pile = hand(tokens);
    state
}

/// A real dealt room: `n` players, full 108-card conservation, seat 0 to
/// act. Deterministic per seed.
pub fn started_state(n: usize, seed: u64) -> GameState {
    let mut state = GameState::new(Uuid::new_v4(), seed);
    for i in 0..n {
        let player = Player::new(format!("P{i}"), i as u8, i != 0);
        state
            .add_player(player)
            .unwrap_or_else(|e| panic!("seat {i}: {e}"));
    }
    dealing::start_round(&mut state).expect("start_round");
    state
}

/// Total cards across both piles and every hand.
pub fn total_cards(state: &GameState) -> usize {
    state.draw_pile.len()
        + state.discard_pile.len()
        + state
            .players
            .iter()
            .map(|p| p.cards.len())
            .sum::<usize>()
}

/// Give `seat` the turn without touching anything else.
pub fn force_turn(state: &mut GameState, seat: Seat) {
    state.turn = Some(seat);
    state.has_drawn_this_turn = false;
    state.drawn_card = None;
}

/// Let `policy` take one action for the seat to act. Returns true when the
/// action finished the round. Panics on any engine rejection: a policy fed
/// its own view must only produce legal actions.
pub fn drive_one_action(state: &mut GameState, policy: &dyn AiPlayer) -> bool {
    let seat = state.turn.expect("live round has a seat to act");
    let view = view_for(state, seat).expect("view for acting seat");
    match policy.decide(&view).expect("policy decision") {
        BotAction::Play {
            card,
            chosen_color,
            declare_uno,
        } => {
            if declare_uno {
                plays::declare_uno(state, seat).expect("declare");
            }
            play_card(state, seat, card, chosen_color)
                .expect("play")
                .round_finished
        }
        BotAction::Draw => {
            draw_card(state, seat).expect("draw");
            false
        }
        BotAction::Pass => {
            pass_turn(state, seat).expect("pass");
            false
        }
        BotAction::ResolveChallenge { challenge } => {
            let decision = if challenge {
                ChallengeDecision::Challenge
            } else {
                ChallengeDecision::Accept
            };
            resolve_challenge(state, seat, decision).expect("challenge");
            false
        }
    }
}
