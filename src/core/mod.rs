//! Core engine types: identifiers, players, game state, RNG, configuration.

pub mod config;
pub mod ids;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{EngineConfig, DEFAULT_HAND_SIZE};
pub use ids::{GameId, PlayerId};
pub use player::Player;
pub use rng::{GameRng, GameRngState};
pub use state::Game;
