//! Cards and the standard deck.
//!
//! ## Key Types
//!
//! - `Color`, `Value`: card faces
//! - `Card`: an immutable `{color, value}` pair
//! - `full_deck` / `generate_shuffled_deck`: the 108-card deck

pub mod card;
pub mod deck;

pub use card::{Card, Color, ParseCardError, Value};
pub use deck::{full_deck, generate_shuffled_deck, DECK_SIZE};
