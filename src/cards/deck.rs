//! Standard 108-card deck.

use super::card::{Card, Color, Value};
use crate::core::rng::GameRng;

/// Cards in a full deck.
pub const DECK_SIZE: usize = 108;

/// Copies of each wild face in a full deck.
const WILD_COPIES: usize = 4;

/// Build a full deck in a fixed order.
///
/// Per suit color: one Zero, two of each One..Nine, two of each Skip,
/// Reverse and DrawTwo. Then four Wild and four WildDrawFour.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);

    for color in Color::SUITS {
        deck.push(Card::new(color, Value::Zero));
        for value in Value::ONE_TO_NINE.into_iter().chain(Value::ACTIONS) {
            deck.push(Card::new(color, value));
            deck.push(Card::new(color, value));
        }
    }

    for value in [Value::Wild, Value::WildDrawFour] {
        deck.extend(std::iter::repeat(Card::new(Color::Wild, value)).take(WILD_COPIES));
    }

    deck
}

/// A fresh full deck, uniformly shuffled.
#[must_use]
pub fn generate_shuffled_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = full_deck();
    rng.shuffle(&mut deck);
    deck
}
