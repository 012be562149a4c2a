// Proptest generators for domain types.
// These generators produce valid cards and player counts for
// property-based testing.

use proptest::prelude::*;

use crate::domain::{Card, CardKind, Color};

/// Generate a random choosable Color (never Black)
pub fn color() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(Color::Red),
        Just(Color::Blue),
        Just(Color::Green),
        Just(Color::Yellow),
    ]
}

/// Generate a random non-wild CardKind
pub fn colored_kind() -> impl Strategy<Value = CardKind> {
    prop_oneof![
        (0u8..=9).prop_map(CardKind::Number),
        Just(CardKind::Skip),
        Just(CardKind::Reverse),
        Just(CardKind::DrawTwo),
    ]
}

/// Generate a random wild CardKind
pub fn wild_kind() -> impl Strategy<Value = CardKind> {
    prop_oneof![Just(CardKind::Wild), Just(CardKind::WildDrawFour)]
}

/// Generate a random colored (non-wild) Card
pub fn colored_card() -> impl Strategy<Value = Card> {
    (color(), colored_kind()).prop_map(|(color, kind)| Card::new(color, kind))
}

/// Generate a random wild Card
pub fn wild_card() -> impl Strategy<Value = Card> {
    wild_kind().prop_map(|kind| Card::new(Color::Black, kind))
}

/// Generate any card
pub fn card() -> impl Strategy<Value = Card> {
    prop_oneof![4 => colored_card(), 1 => wild_card()]
}

/// Generate a hand of 1 to `max` cards
pub fn hand_up_to(max: usize) -> impl Strategy<Value = Vec<Card>> {
    proptest::collection::vec(card(), 1..=max)
}

/// Generate a valid player count (2-4)
pub fn player_count() -> impl Strategy<Value = usize> {
    2usize..=4
}
