//! Unit tests for the play-validity oracle.

use crate::domain::rules::{is_valid_play, valid_plays};
use crate::domain::state::{ChallengeState, PendingDraw, StackKind};
use crate::domain::test_state_helpers::{card, hand, playing_state};
use crate::domain::Color;

#[test]
fn matches_by_color_in_effect() {
    let state = playing_state(vec![hand(&["R7"]), hand(&["B3"])], card("R5"));
    assert!(is_valid_play(&state, &card("R7")));
    assert!(!is_valid_play(&state, &card("B3")));
}

#[test]
fn matches_by_number_value_across_colors() {
    let state = playing_state(vec![hand(&["B5"])], card("R5"));
    assert!(is_valid_play(&state, &card("B5")));
    assert!(!is_valid_play(&state, &card("B6")));
}

#[test]
fn skip_on_skip_and_reverse_on_reverse_ignore_color() {
    let state = playing_state(vec![hand(&["BS"])], card("RS"));
    assert!(is_valid_play(&state, &card("BS")));
    assert!(is_valid_play(&state, &card("GS")));
    assert!(!is_valid_play(&state, &card("BR")), "reverse on skip");

    let state = playing_state(vec![hand(&["YR"])], card("GR"));
    assert!(is_valid_play(&state, &card("YR")));
}

#[test]
fn draw_two_matches_draw_two_across_colors() {
    let state = playing_state(vec![hand(&["BD2"])], card("RD2"));
    assert!(is_valid_play(&state, &card("BD2")));
}

#[test]
fn wilds_are_always_valid_without_a_stack() {
    let state = playing_state(vec![hand(&["W", "W4"])], card("R5"));
    assert!(is_valid_play(&state, &card("W")));
    assert!(is_valid_play(&state, &card("W4")));
}

#[test]
fn totally_unrelated_card_is_invalid() {
    let state = playing_state(vec![hand(&["B3"])], card("R5"));
    assert!(!is_valid_play(&state, &card("B3")));
    assert!(!is_valid_play(&state, &card("GS")));
}

#[test]
fn top_card_tested_against_itself_is_valid() {
    let top = card("R5");
    let state = playing_state(vec![hand(&["R5"])], top);
    assert!(is_valid_play(&state, &top));
}

#[test]
fn first_card_of_the_round_is_always_valid() {
    let mut state = playing_state(vec![hand(&["B3"])], card("R5"));
    state.discard_pile.clear();
    state.current_color = None;
    assert!(is_valid_play(&state, &card("B3")));
    assert!(is_valid_play(&state, &card("GS")));
}

#[test]
fn chosen_wild_color_governs_matching() {
    let mut top = card("W");
    top.chosen_color = Some(Color::Blue);
    let state = playing_state(vec![hand(&["B3", "R5"])], top);

    assert!(is_valid_play(&state, &card("B3")));
    // Red matches neither the chosen blue nor the wild's black face.
    assert!(!is_valid_play(&state, &card("R5")));
}

#[test]
fn pending_stack_only_accepts_the_matching_kind() {
    let mut state = playing_state(
        vec![hand(&["RD2", "W4", "W", "R5", "RS"])],
        card("RD2"),
    );
    state.pending_draw = Some(PendingDraw {
        kind: StackKind::DrawTwo,
        count: 2,
    });

    assert!(is_valid_play(&state, &card("BD2")));
    assert!(!is_valid_play(&state, &card("W4")));
    assert!(!is_valid_play(&state, &card("W")), "not even a plain wild");
    assert!(!is_valid_play(&state, &card("R5")));
    assert!(!is_valid_play(&state, &card("RS")));

    state.pending_draw = Some(PendingDraw {
        kind: StackKind::WildDrawFour,
        count: 4,
    });
    assert!(is_valid_play(&state, &card("W4")));
    assert!(!is_valid_play(&state, &card("RD2")));
}

#[test]
fn open_challenge_blocks_every_play() {
    let top = card("W4");
    let mut state = playing_state(vec![hand(&["R5", "W"]), hand(&["B3"])], top);
    state.challenge = Some(ChallengeState {
        challenger: 0,
        challenged: 1,
        card_played: top.id,
        prior_color: Color::Red,
    });

    assert!(!is_valid_play(&state, &card("R5")));
    assert!(!is_valid_play(&state, &card("W")));
}

#[test]
fn valid_plays_is_the_oracle_filtered_hand() {
    let state = playing_state(vec![hand(&["R7", "B3", "W", "G5"])], card("R5"));
    let legal = valid_plays(&state, 0);
    let faces: Vec<_> = legal.iter().map(|c| (c.color, c.kind)).collect();

    assert_eq!(legal.len(), 3);
    assert!(faces.contains(&(card("R7").color, card("R7").kind)));
    assert!(faces.contains(&(Color::Black, crate::domain::CardKind::Wild)));
    // G5 matches the top's value
    assert!(faces.contains(&(card("G5").color, card("G5").kind)));
    // B3 matches nothing
    assert!(!faces.contains(&(card("B3").color, card("B3").kind)));

    assert!(valid_plays(&state, 9).is_empty(), "empty for a bad seat");
}
