//! Deck construction and deterministic dealing.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::cards_types::{Card, CardKind, Color};
use super::rules::{DECK_SIZE, MAX_PLAYERS, MIN_PLAYERS, OPENING_HAND};
use super::seed_derivation::derive_dealing_seed;
use super::state::{Direction, GameState, Status};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

/// Build the full 108-card deck in canonical order.
///
/// Per color: one 0, two each of 1-9, two skips, two reverses, two
/// draw-twos. Plus four wilds and four wild-draw-fours.
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for color in Color::CHOOSABLE {
        deck.push(Card::new(color, CardKind::Number(0)));
        for value in 1..=9 {
            deck.push(Card::new(color, CardKind::Number(value)));
            deck.push(Card::new(color, CardKind::Number(value)));
        }
        for kind in [CardKind::Skip, CardKind::Reverse, CardKind::DrawTwo] {
            deck.push(Card::new(color, kind));
            deck.push(Card::new(color, kind));
        }
    }
    for _ in 0..4 {
        deck.push(Card::new(Color::Black, CardKind::Wild));
        deck.push(Card::new(Color::Black, CardKind::WildDrawFour));
    }
    debug_assert_eq!(deck.len(), DECK_SIZE);
    deck
}

/// Fisher-Yates shuffle driven by a seeded ChaCha stream, so the same seed
/// always yields the same permutation.
pub fn shuffle_with_seed(cards: &mut [Card], seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    cards.shuffle(&mut rng);
}

/// Result of dealing a fresh round: one hand per seat, the remaining draw
/// pile (top is the end of the vec), and the opening discard card.
#[derive(Debug, Clone)]
pub struct Deal {
    pub hands: Vec<Vec<Card>>,
    pub draw_pile: Vec<Card>,
    pub opening_card: Card,
}

/// Shuffle a fresh deck and deal opening hands for `num_players` seats.
///
/// Seven cards each, dealt in seat order. The opening discard is drawn from
/// the remaining pile, cycling action and wild cards to the pile bottom until
/// a plain number card surfaces, so a round never opens on an ambiguous
/// effect.
pub fn deal(num_players: usize, seed: u64) -> Result<Deal, DomainError> {
    if num_players < MIN_PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::NotEnoughPlayers,
            format!("Need at least {MIN_PLAYERS} players, got {num_players}"),
        ));
    }
    if num_players > MAX_PLAYERS {
        return Err(DomainError::conflict(
            ConflictKind::RoomFull,
            format!("At most {MAX_PLAYERS} players, got {num_players}"),
        ));
    }

    let mut pile = build_deck();
    shuffle_with_seed(&mut pile, seed);

    let mut hands: Vec<Vec<Card>> = vec![Vec::with_capacity(OPENING_HAND); num_players];
    for _ in 0..OPENING_HAND {
        for hand in hands.iter_mut() {
            let card = pile.pop().ok_or_else(|| {
                DomainError::validation_other("Deck exhausted while dealing opening hands")
            })?;
            hand.push(card);
        }
    }

    let opening_card = loop {
        let card = pile.pop().ok_or_else(|| {
            DomainError::validation_other("Deck exhausted while seeding the discard pile")
        })?;
        if matches!(card.kind, CardKind::Number(_)) {
            break card;
        }
        // Action or wild: slide it under the pile and keep flipping.
        pile.insert(0, card);
    };

    Ok(Deal {
        hands,
        draw_pile: pile,
        opening_card,
    })
}

/// Transition a waiting room into a playing round.
///
/// Deals hands, seeds the discard pile, resets per-round fields and hands
/// the opening turn to seat 0. The dealing seed derives from the room seed
/// and round number.
pub fn start_round(state: &mut GameState) -> Result<(), DomainError> {
    if state.status != Status::Waiting {
        return Err(DomainError::conflict(
            ConflictKind::AlreadyStarted,
            "Round already started",
        ));
    }

    let num_players = state.players.len();
    let round_no = state.round_no + 1;
    let deal = deal(num_players, derive_dealing_seed(state.rng_seed, round_no))?;

    for (player, hand) in state.players.iter_mut().zip(deal.hands) {
        player.cards = hand;
        player.said_uno = false;
        player.points = None;
    }

    state.round_no = round_no;
    state.reshuffles = 0;
    state.draw_pile = deal.draw_pile;
    state.current_color = Some(deal.opening_card.color);
    state.discard_pile = vec![deal.opening_card];
    state.direction = Direction::Clockwise;
    state.status = Status::Playing;
    state.winner = None;
    state.pending_draw = None;
    state.challenge = None;
    state.turn = Some(0);
    state.has_drawn_this_turn = false;
    state.drawn_card = None;

    let leader = state.players[0].name.clone();
    state.push_log(format!(
        "Round {round_no} started; {} on the table, {leader} to play",
        deal.opening_card
    ));
    Ok(())
}
