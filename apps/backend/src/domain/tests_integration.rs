//! Whole-round integration tests: deterministic policies drive dealt rooms
//! from the opening play to a finished, scored round.

use crate::ai::Heuristic;
use crate::domain::cards_logic::hand_points;
use crate::domain::rules::DECK_SIZE;
use crate::domain::scoring::reset_for_rematch;
use crate::domain::state::Status;
use crate::domain::test_state_helpers::{drive_one_action, started_state, total_cards};
use crate::domain::{dealing, CardKind, Color, GameState};

const STEP_LIMIT: usize = 5_000;

fn discard_faces(state: &GameState) -> Vec<(Color, CardKind)> {
    state
        .discard_pile
        .iter()
        .map(|c| (c.color, c.kind))
        .collect()
}

fn play_out(state: &mut GameState) {
    let policy = Heuristic::new(None);
    let mut steps = 0;
    while state.status == Status::Playing {
        drive_one_action(state, &policy);
        steps += 1;
        assert!(
            steps < STEP_LIMIT,
            "round did not finish within {STEP_LIMIT} actions"
        );
    }
}

#[test]
fn heuristic_policies_finish_rounds_at_every_table_size() {
    for (n, seed) in [(2usize, 11u64), (3, 22), (4, 33)] {
        let mut state = started_state(n, seed);
        play_out(&mut state);

        assert_eq!(state.status, Status::Finished, "{n} players, seed {seed}");
        let winner = state.winner.expect("winner set");
        assert!(state.players[winner as usize].cards.is_empty());
        assert_eq!(state.turn, None);
        assert_eq!(total_cards(&state), DECK_SIZE);

        // Scores: zero for the winner, remaining hand value for the rest,
        // summed once into the history record.
        let mut expected_total = 0;
        for (seat, player) in state.players.iter().enumerate() {
            let expected = if seat == winner as usize {
                0
            } else {
                hand_points(&player.cards)
            };
            assert_eq!(player.points, Some(expected));
            expected_total += expected;
        }
        let record = state.match_history.last().expect("history appended");
        assert_eq!(record.winner, state.players[winner as usize].id);
        assert_eq!(record.final_score, expected_total);
    }
}

#[test]
fn identical_seeds_replay_identically() {
    let mut a = started_state(3, 77);
    let mut b = started_state(3, 77);
    // Player ids differ between the rooms, so compare face sequences.
    play_out(&mut a);
    play_out(&mut b);

    assert_eq!(a.winner, b.winner);
    assert_eq!(discard_faces(&a), discard_faces(&b));
}

#[test]
fn rematch_runs_a_second_round_on_the_same_roster() {
    let mut state = started_state(3, 44);
    play_out(&mut state);
    assert_eq!(state.match_history.len(), 1);

    reset_for_rematch(&mut state);
    assert_eq!(state.status, Status::Waiting);

    dealing::start_round(&mut state).expect("second round deals");
    assert_eq!(state.round_no, 2);
    assert_eq!(total_cards(&state), DECK_SIZE);
    play_out(&mut state);

    assert_eq!(state.status, Status::Finished);
    assert_eq!(state.match_history.len(), 2);
}
