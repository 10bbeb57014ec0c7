//! Ordered card piles.
//!
//! A `Pile` is an ordered zone: index 0 is the bottom, the last card is the
//! top. The draw pile is drawn from the top, the discard pile is played onto
//! the top.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::rng::GameRng;

/// An ordered stack of cards.
///
/// ```
/// use uno_engine::cards::{Card, Color, Value};
/// use uno_engine::zones::Pile;
///
/// let mut pile = Pile::new();
/// pile.push(Card::new(Color::Red, Value::One));
/// pile.push(Card::new(Color::Blue, Value::Two));
///
/// assert_eq!(pile.top(), Some(&Card::new(Color::Blue, Value::Two)));
/// assert_eq!(pile.pop_top(), Some(Card::new(Color::Blue, Value::Two)));
/// assert_eq!(pile.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Top card (last in the vec).
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Put a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the top card.
    pub fn pop_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove every card except the top one, bottom to top.
    ///
    /// Returns an empty vec when the pile holds one card or none.
    pub fn take_all_but_top(&mut self) -> Vec<Card> {
        match self.cards.pop() {
            Some(top) => std::mem::replace(&mut self.cards, vec![top]),
            None => Vec::new(),
        }
    }

    /// Keep only the bottom `len` cards.
    pub fn truncate(&mut self, len: usize) {
        self.cards.truncate(len);
    }

    /// Remove every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Shuffle the pile in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl Extend<Card> for Pile {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}
