//! Unit tests for deck construction, shuffling and round start.

use std::collections::HashSet;

use crate::domain::dealing::{build_deck, deal, shuffle_with_seed, start_round};
use crate::domain::rules::{DECK_SIZE, OPENING_HAND};
use crate::domain::state::{GameState, Player, Status};
use crate::domain::test_state_helpers::total_cards;
use crate::domain::{CardKind, Color};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use uuid::Uuid;

#[test]
fn deck_has_108_cards_with_the_right_distribution() {
    let deck = build_deck();
    assert_eq!(deck.len(), DECK_SIZE);

    for color in Color::CHOOSABLE {
        let of_color = |pred: &dyn Fn(CardKind) -> bool| {
            deck.iter()
                .filter(|c| c.color == color && pred(c.kind))
                .count()
        };
        assert_eq!(of_color(&|k| matches!(k, CardKind::Number(0))), 1);
        for v in 1..=9 {
            assert_eq!(of_color(&|k| k == CardKind::Number(v)), 2, "value {v}");
        }
        assert_eq!(of_color(&|k| k == CardKind::Skip), 2);
        assert_eq!(of_color(&|k| k == CardKind::Reverse), 2);
        assert_eq!(of_color(&|k| k == CardKind::DrawTwo), 2);
    }
    assert_eq!(deck.iter().filter(|c| c.kind == CardKind::Wild).count(), 4);
    assert_eq!(
        deck.iter()
            .filter(|c| c.kind == CardKind::WildDrawFour)
            .count(),
        4
    );
}

#[test]
fn deck_card_ids_are_unique() {
    let deck = build_deck();
    let ids: HashSet<_> = deck.iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), deck.len());
}

#[test]
fn shuffle_is_deterministic_per_seed() {
    let mut a = build_deck();
    let mut b = build_deck();
    shuffle_with_seed(&mut a, 99);
    shuffle_with_seed(&mut b, 99);
    let faces_a: Vec<_> = a.iter().map(|c| (c.color, c.kind)).collect();
    let faces_b: Vec<_> = b.iter().map(|c| (c.color, c.kind)).collect();
    assert_eq!(faces_a, faces_b);

    let mut c = build_deck();
    shuffle_with_seed(&mut c, 100);
    let faces_c: Vec<_> = c.iter().map(|c| (c.color, c.kind)).collect();
    assert_ne!(faces_a, faces_c);
}

#[test]
fn deal_validates_player_count() {
    assert!(matches!(
        deal(1, 5),
        Err(DomainError::Validation(ValidationKind::NotEnoughPlayers, _))
    ));
    assert!(matches!(
        deal(5, 5),
        Err(DomainError::Conflict(ConflictKind::RoomFull, _))
    ));
    assert!(deal(2, 5).is_ok());
    assert!(deal(4, 5).is_ok());
}

#[test]
fn deal_hands_out_seven_each_and_conserves_cards() {
    for n in 2..=4 {
        let deal = deal(n, 42).unwrap();
        assert_eq!(deal.hands.len(), n);
        for hand in &deal.hands {
            assert_eq!(hand.len(), OPENING_HAND);
        }
        let total = deal
            .hands
            .iter()
            .map(|h| h.len())
            .sum::<usize>()
            + deal.draw_pile.len()
            + 1; // opening card
        assert_eq!(total, DECK_SIZE);
    }
}

#[test]
fn opening_card_is_always_a_number() {
    for seed in 0..50 {
        let deal = deal(4, seed).unwrap();
        assert!(
            matches!(deal.opening_card.kind, CardKind::Number(_)),
            "seed {seed} opened on {:?}",
            deal.opening_card.kind
        );
    }
}

fn waiting_room(n: usize) -> GameState {
    let mut state = GameState::new(Uuid::new_v4(), 7);
    for i in 0..n {
        state
            .add_player(Player::new(format!("P{i}"), i as u8, false))
            .unwrap();
    }
    state
}

#[test]
fn start_round_transitions_to_playing() {
    let mut state = waiting_room(3);
    start_round(&mut state).unwrap();

    assert_eq!(state.status, Status::Playing);
    assert_eq!(state.round_no, 1);
    assert_eq!(state.turn, Some(0));
    assert!(!state.has_drawn_this_turn);
    assert_eq!(state.discard_pile.len(), 1);
    assert_eq!(
        state.current_color,
        Some(state.discard_pile[0].color),
        "color in effect is the opening card's"
    );
    for player in &state.players {
        assert_eq!(player.cards.len(), OPENING_HAND);
        assert!(!player.said_uno);
        assert_eq!(player.points, None);
    }
    assert_eq!(total_cards(&state), DECK_SIZE);
}

#[test]
fn start_round_rejects_a_running_room() {
    let mut state = waiting_room(2);
    start_round(&mut state).unwrap();
    assert!(matches!(
        start_round(&mut state),
        Err(DomainError::Conflict(ConflictKind::AlreadyStarted, _))
    ));
}

#[test]
fn start_round_needs_two_players() {
    let mut state = waiting_room(1);
    assert!(matches!(
        start_round(&mut state),
        Err(DomainError::Validation(ValidationKind::NotEnoughPlayers, _))
    ));
    assert_eq!(state.status, Status::Waiting, "failed start changes nothing");
}

#[test]
fn same_room_seed_deals_the_same_round() {
    let mut a = waiting_room(4);
    let mut b = waiting_room(4);
    b.rng_seed = a.rng_seed;
    start_round(&mut a).unwrap();
    start_round(&mut b).unwrap();

    for (pa, pb) in a.players.iter().zip(&b.players) {
        let faces_a: Vec<_> = pa.cards.iter().map(|c| (c.color, c.kind)).collect();
        let faces_b: Vec<_> = pb.cards.iter().map(|c| (c.color, c.kind)).collect();
        assert_eq!(faces_a, faces_b);
    }
}
