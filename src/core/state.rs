//! The game aggregate.
//!
//! A `Game` is the unit of consistency: the engine loads one, mutates it and
//! saves it back whole. It holds:
//! - Players in turn order, each with a hand
//! - The draw pile (face down) and discard pile (face up, top = last played)
//! - The index of the player whose turn it is

use serde::{Deserialize, Serialize};

use super::ids::{GameId, PlayerId};
use super::player::Player;
use crate::cards::Card;
use crate::zones::Pile;

/// A game and all of its cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,

    /// Players in turn order.
    pub players: Vec<Player>,

    pub draw_pile: Pile,

    pub discard_pile: Pile,

    /// Index into `players` of whose turn it is.
    pub current_player: usize,
}

impl Game {
    /// Create a game with no players and empty piles.
    #[must_use]
    pub fn new(id: GameId) -> Self {
        Self {
            id,
            players: Vec::new(),
            draw_pile: Pile::new(),
            discard_pile: Pile::new(),
            current_player: 0,
        }
    }

    /// Position of a participant in turn order.
    #[must_use]
    pub fn player_index(&self, player_id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| &p.id == player_id)
    }

    /// Look up a participant.
    #[must_use]
    pub fn player(&self, player_id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == player_id)
    }

    /// The player whose turn it is, if anyone has joined.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player)
    }

    /// Top of the discard pile.
    #[must_use]
    pub fn top_discard(&self) -> Option<&Card> {
        self.discard_pile.top()
    }

    /// Cards across both piles and every hand.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len()
            + self.discard_pile.len()
            + self.players.iter().map(Player::hand_size).sum::<usize>()
    }
}
