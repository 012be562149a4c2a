//! Card game logic: color membership in hands, face matching, hand scoring

use super::cards_types::{Card, CardKind, Color};

/// True if any card in `hand` would satisfy a color match against `color`.
///
/// Wilds do not count: they are black-faced and match nothing by color.
/// This is the test a wild-draw-four challenge runs against the prior color.
pub fn hand_has_color(hand: &[Card], color: Color) -> bool {
    hand.iter().any(|c| c.color == color)
}

/// Face match between a candidate card and the discard top, ignoring any
/// pending stack or challenge (the oracle layers those on top).
///
/// Matches when the faces share a number value or share a non-number kind;
/// color is not consulted here.
pub fn faces_match(card: &Card, top: &Card) -> bool {
    match (card.kind, top.kind) {
        (CardKind::Number(a), CardKind::Number(b)) => a == b,
        (a, b) => a == b,
    }
}

/// Sum of the point values of the cards left in a hand.
pub fn hand_points(hand: &[Card]) -> u32 {
    hand.iter().map(|c| c.kind.point_value()).sum()
}
