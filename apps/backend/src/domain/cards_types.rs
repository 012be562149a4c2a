//! Core card-related types: Card, CardKind, Color

use std::fmt;

use uuid::Uuid;

pub type CardId = Uuid;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    /// The face color of an unplayed wild; never a chosen color.
    Black,
}

impl Color {
    /// The four colors a wild may impose, in canonical order.
    pub const CHOOSABLE: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    pub fn is_choosable(self) -> bool {
        self != Color::Black
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Black => "Black",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CardKind {
    /// Face value 0-9.
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl CardKind {
    pub fn is_wild(self) -> bool {
        matches!(self, CardKind::Wild | CardKind::WildDrawFour)
    }

    /// Scoring value of a card left in a loser's hand.
    pub fn point_value(self) -> u32 {
        match self {
            CardKind::Number(n) => u32::from(n),
            CardKind::Skip | CardKind::Reverse | CardKind::DrawTwo => 20,
            CardKind::Wild | CardKind::WildDrawFour => 50,
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardKind::Number(n) => write!(f, "{n}"),
            CardKind::Skip => write!(f, "Skip"),
            CardKind::Reverse => write!(f, "Reverse"),
            CardKind::DrawTwo => write!(f, "Draw Two"),
            CardKind::Wild => write!(f, "Wild"),
            CardKind::WildDrawFour => write!(f, "Wild Draw Four"),
        }
    }
}

/// A single physical card. Created once by the deck builder; the only
/// mutation ever applied is attaching `chosen_color` when a wild is played
/// (and clearing it when a reshuffle returns the card to the draw pile).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub id: CardId,
    pub color: Color,
    pub kind: CardKind,
    pub chosen_color: Option<Color>,
}

impl Card {
    pub fn new(color: Color, kind: CardKind) -> Self {
        debug_assert!(
            kind.is_wild() == (color == Color::Black),
            "wilds are black, non-wilds are colored"
        );
        if let CardKind::Number(n) = kind {
            debug_assert!(n <= 9, "number faces are 0-9");
        }
        Self {
            id: Uuid::new_v4(),
            color,
            kind,
            chosen_color: None,
        }
    }

    /// Color this card imposes on the discard pile: the chosen color for a
    /// played wild, the face color otherwise.
    pub fn effective_color(&self) -> Color {
        self.chosen_color.unwrap_or(self.color)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind.is_wild(), self.chosen_color) {
            (true, Some(chosen)) => write!(f, "{} ({chosen})", self.kind),
            (true, None) => write!(f, "{}", self.kind),
            _ => write!(f, "{} {}", self.color, self.kind),
        }
    }
}
