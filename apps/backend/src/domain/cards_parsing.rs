//! Card parsing from string representations (e.g., "R5", "GD2", "W4")
//!
//! Tokens are a color letter followed by a face: `R5` (red five), `BS`
//! (blue skip), `YR` (yellow reverse), `GD2` (green draw-two), plus the
//! colorless `W` (wild) and `W4` (wild draw four). Used by tests and
//! fixtures; parsed cards get a fresh id.

use std::str::FromStr;

use super::cards_types::{Card, CardKind, Color};
use crate::errors::domain::{DomainError, ValidationKind};

fn parse_err(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "W" => return Ok(Card::new(Color::Black, CardKind::Wild)),
            "W4" => return Ok(Card::new(Color::Black, CardKind::WildDrawFour)),
            _ => {}
        }

        let mut chars = s.chars();
        let color_ch = chars.next().ok_or_else(|| parse_err(s))?;
        let color = match color_ch {
            'R' => Color::Red,
            'B' => Color::Blue,
            'G' => Color::Green,
            'Y' => Color::Yellow,
            _ => return Err(parse_err(s)),
        };

        let face = chars.as_str();
        let kind = match face {
            "S" => CardKind::Skip,
            "R" => CardKind::Reverse,
            "D2" => CardKind::DrawTwo,
            _ => {
                let value: u8 = face.parse().map_err(|_| parse_err(s))?;
                if value > 9 {
                    return Err(parse_err(s));
                }
                CardKind::Number(value)
            }
        };

        Ok(Card::new(color, kind))
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
/// Returns an error if any token is invalid.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
