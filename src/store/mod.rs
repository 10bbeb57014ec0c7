//! Game and player persistence.
//!
//! The engine only talks to storage through `GameStore`. Embedders back it
//! with their own database; `MemoryStore` is the in-process implementation.
//!
//! ## Key Types
//!
//! - `GameStore`: load/save contract consumed by the engine
//! - `MemoryStore`: hash-map store holding encoded game snapshots
//! - `StoreError`: persistence failures

pub mod memory;

pub use memory::MemoryStore;

use thiserror::Error;

use crate::core::{Game, GameId, Player, PlayerId};

/// Persistence failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("game not found: {0}")]
    GameNotFound(GameId),

    #[error("player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("player {player} already joined game {game}")]
    AlreadyJoined { game: GameId, player: PlayerId },

    #[error("snapshot codec: {0}")]
    Codec(#[from] bincode::Error),
}

/// Storage contract for games and players.
///
/// Every method returns owned values; mutating a returned `Game` has no
/// effect until it is passed back to `save_game`.
pub trait GameStore {
    /// Create and persist an empty game.
    fn create_game(&mut self) -> Result<Game, StoreError>;

    /// Create and persist a player with an empty hand.
    fn create_player(&mut self, name: &str) -> Result<Player, StoreError>;

    /// Append a player to a game's turn order and persist the game.
    fn join_game(&mut self, game_id: &GameId, player_id: &PlayerId) -> Result<Game, StoreError>;

    fn lookup_game(&self, game_id: &GameId) -> Result<Game, StoreError>;

    fn lookup_player(&self, player_id: &PlayerId) -> Result<Player, StoreError>;

    /// Overwrite the stored game with the same ID.
    fn save_game(&mut self, game: &Game) -> Result<(), StoreError>;
}
