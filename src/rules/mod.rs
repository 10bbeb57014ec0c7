//! Deck and turn rules.
//!
//! `DeckEngine` drives drawing, dealing and reshuffling over a `GameStore`.
//! Playing cards and detecting a winner belong to the surrounding game
//! server; this module only guarantees the deck and turn invariants.

pub mod engine;

pub use engine::{card_from_player, draw_card_helper, DeckEngine, Replenish};
