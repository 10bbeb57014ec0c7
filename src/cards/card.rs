//! Card values.
//!
//! A `Card` is an immutable `{color, value}` pair. Two cards are equal when
//! both fields match; the deck holds duplicates, so equality never identifies
//! a specific physical card.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Card color. Wild cards carry `Color::Wild` until played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
    Wild,
}

impl Color {
    /// The four playable suit colors, in deck order.
    pub const SUITS: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];

    const ALL: [Color; 5] = [
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Wild,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Yellow => "Yellow",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Wild => "Wild",
        }
    }
}

/// Card face value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl Value {
    /// Number faces One through Nine (two copies per color each).
    pub const ONE_TO_NINE: [Value; 9] = [
        Value::One,
        Value::Two,
        Value::Three,
        Value::Four,
        Value::Five,
        Value::Six,
        Value::Seven,
        Value::Eight,
        Value::Nine,
    ];

    /// Colored action faces (two copies per color each).
    pub const ACTIONS: [Value; 3] = [Value::Skip, Value::Reverse, Value::DrawTwo];

    const ALL: [Value; 15] = [
        Value::Zero,
        Value::One,
        Value::Two,
        Value::Three,
        Value::Four,
        Value::Five,
        Value::Six,
        Value::Seven,
        Value::Eight,
        Value::Nine,
        Value::Skip,
        Value::Reverse,
        Value::DrawTwo,
        Value::Wild,
        Value::WildDrawFour,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Value::Zero => "Zero",
            Value::One => "One",
            Value::Two => "Two",
            Value::Three => "Three",
            Value::Four => "Four",
            Value::Five => "Five",
            Value::Six => "Six",
            Value::Seven => "Seven",
            Value::Eight => "Eight",
            Value::Nine => "Nine",
            Value::Skip => "Skip",
            Value::Reverse => "Reverse",
            Value::DrawTwo => "DrawTwo",
            Value::Wild => "Wild",
            Value::WildDrawFour => "WildDrawFour",
        }
    }

    /// Is this a wild face?
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, Value::Wild | Value::WildDrawFour)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub value: Value,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(color: Color, value: Value) -> Self {
        Self { color, value }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.value)
    }
}

/// Failure to parse a card from text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseCardError {
    #[error("expected \"<color> <value>\", got {0:?}")]
    Malformed(String),
    #[error("unknown color {0:?}")]
    UnknownColor(String),
    #[error("unknown value {0:?}")]
    UnknownValue(String),
}

impl std::str::FromStr for Color {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCardError::UnknownColor(s.to_string()))
    }
}

impl std::str::FromStr for Value {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Value::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCardError::UnknownValue(s.to_string()))
    }
}

impl std::str::FromStr for Card {
    type Err = ParseCardError;

    /// Parses the `Display` form, e.g. `"Red Seven"` or `"wild wilddrawfour"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(color), Some(value), None) => Ok(Card::new(color.parse()?, value.parse()?)),
            _ => Err(ParseCardError::Malformed(s.to_string())),
        }
    }
}
