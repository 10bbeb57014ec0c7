//! # uno-engine
//!
//! Deck and turn engine for a turn-based UNO game server.
//!
//! ## Design Principles
//!
//! 1. **Load, mutate, save**: every operation loads the `Game` aggregate from
//!    a `GameStore`, changes it, and saves it back whole.
//!
//! 2. **Validate before mutating**: a rejected request (unknown game, player
//!    not in the game, out of turn) never touches a pile or a hand.
//!
//! 3. **Reproducible shuffles**: all randomness flows through one seedable
//!    `GameRng`.
//!
//! ## Modules
//!
//! - `core`: IDs, players, game state, RNG, configuration
//! - `cards`: card faces and the 108-card deck
//! - `zones`: ordered draw and discard piles
//! - `rules`: `DeckEngine` (draw, deal, reshuffle)
//! - `store`: persistence contract and in-memory store
//! - `error`: engine errors

pub mod cards;
pub mod core;
pub mod error;
pub mod rules;
pub mod store;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    EngineConfig, Game, GameId, GameRng, GameRngState, Player, PlayerId, DEFAULT_HAND_SIZE,
};

pub use crate::cards::{full_deck, generate_shuffled_deck, Card, Color, ParseCardError, Value, DECK_SIZE};

pub use crate::zones::Pile;

pub use crate::rules::{card_from_player, draw_card_helper, DeckEngine, Replenish};

pub use crate::store::{GameStore, MemoryStore, StoreError};

pub use crate::error::{EngineError, NotFoundKind};
