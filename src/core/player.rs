//! Players and their hands.

use serde::{Deserialize, Serialize};

use super::ids::PlayerId;
use crate::cards::Card;

/// A participant and the cards in their hand.
///
/// The hand grows through draws and deals; playing cards out of it is left
/// to the surrounding rules layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Hand in the order cards were received.
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Player {
    /// Create a player with an empty hand.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cards: Vec::new(),
        }
    }

    /// Number of cards in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.cards.len()
    }

    /// Index of the first card in hand matching `card`'s color and value.
    ///
    /// ```
    /// use uno_engine::cards::{Card, Color, Value};
    /// use uno_engine::core::{Player, PlayerId};
    ///
    /// let mut player = Player::new(PlayerId::new("p1"), "Player 1");
    /// player.cards.push(Card::new(Color::Red, Value::One));
    ///
    /// assert_eq!(player.card_index(&Card::new(Color::Red, Value::One)), Some(0));
    /// assert_eq!(player.card_index(&Card::new(Color::Blue, Value::One)), None);
    /// ```
    #[must_use]
    pub fn card_index(&self, card: &Card) -> Option<usize> {
        self.cards
            .iter()
            .position(|held| held.color == card.color && held.value == card.value)
    }
}
