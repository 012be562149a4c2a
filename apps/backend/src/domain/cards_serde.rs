//! Serialization and deserialization for card types
//!
//! Colors and card kinds serialize as SCREAMING_SNAKE_CASE strings so that
//! stored room blobs and broadcast snapshots stay readable. `Card` itself
//! derives nothing; its manual impls keep the id/chosen-color fields stable.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, CardId, CardKind, Color};

// Color serde
impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match self {
            Color::Red => "RED",
            Color::Blue => "BLUE",
            Color::Green => "GREEN",
            Color::Yellow => "YELLOW",
            Color::Black => "BLACK",
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "RED" => Ok(Color::Red),
            "BLUE" => Ok(Color::Blue),
            "GREEN" => Ok(Color::Green),
            "YELLOW" => Ok(Color::Yellow),
            "BLACK" => Ok(Color::Black),
            _ => Err(serde::de::Error::custom(format!("Invalid color: {s}"))),
        }
    }
}

// CardKind serde (number faces as their digit, actions as words)
impl Serialize for CardKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match self {
            CardKind::Number(n) => return serializer.serialize_str(&n.to_string()),
            CardKind::Skip => "SKIP",
            CardKind::Reverse => "REVERSE",
            CardKind::DrawTwo => "DRAW_TWO",
            CardKind::Wild => "WILD",
            CardKind::WildDrawFour => "WILD_DRAW_FOUR",
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for CardKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "SKIP" => Ok(CardKind::Skip),
            "REVERSE" => Ok(CardKind::Reverse),
            "DRAW_TWO" => Ok(CardKind::DrawTwo),
            "WILD" => Ok(CardKind::Wild),
            "WILD_DRAW_FOUR" => Ok(CardKind::WildDrawFour),
            digit => match digit.parse::<u8>() {
                Ok(n) if n <= 9 => Ok(CardKind::Number(n)),
                _ => Err(serde::de::Error::custom(format!("Invalid card kind: {s}"))),
            },
        }
    }
}

// Card serde (explicit struct form; chosen_color omitted when unset)
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let fields = if self.chosen_color.is_some() { 4 } else { 3 };
        let mut st = serializer.serialize_struct("Card", fields)?;
        st.serialize_field("id", &self.id)?;
        st.serialize_field("color", &self.color)?;
        st.serialize_field("kind", &self.kind)?;
        if self.chosen_color.is_some() {
            st.serialize_field("chosen_color", &self.chosen_color)?;
        }
        st.end()
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct CardRepr {
            id: CardId,
            color: Color,
            kind: CardKind,
            #[serde(default)]
            chosen_color: Option<Color>,
        }

        let repr = CardRepr::deserialize(deserializer)?;
        Ok(Card {
            id: repr.id,
            color: repr.color,
            kind: repr.kind,
            chosen_color: repr.chosen_color,
        })
    }
}
