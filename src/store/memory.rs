//! In-process game store.
//!
//! Games are kept as bincode snapshots, so every lookup decodes a fresh copy
//! and nothing the caller holds aliases stored state.

use rustc_hash::FxHashMap;
use tracing::trace;
use uuid::Uuid;

use super::{GameStore, StoreError};
use crate::core::{Game, GameId, Player, PlayerId};

/// Hash-map backed `GameStore`.
///
/// ```
/// use uno_engine::store::{GameStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// let game = store.create_game().unwrap();
/// let player = store.create_player("Player 1").unwrap();
///
/// let joined = store.join_game(&game.id, &player.id).unwrap();
/// assert_eq!(joined.players.len(), 1);
/// assert_eq!(store.lookup_game(&game.id).unwrap(), joined);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    games: FxHashMap<GameId, Vec<u8>>,
    players: FxHashMap<PlayerId, Player>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored games.
    #[must_use]
    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    fn encode(game: &Game) -> Result<Vec<u8>, StoreError> {
        Ok(bincode::serialize(game)?)
    }

    fn decode(bytes: &[u8]) -> Result<Game, StoreError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl GameStore for MemoryStore {
    fn create_game(&mut self) -> Result<Game, StoreError> {
        let game = Game::new(GameId::new(Uuid::new_v4().to_string()));
        self.save_game(&game)?;
        Ok(game)
    }

    fn create_player(&mut self, name: &str) -> Result<Player, StoreError> {
        let player = Player::new(PlayerId::new(Uuid::new_v4().to_string()), name);
        self.players.insert(player.id.clone(), player.clone());
        trace!(player_id = %player.id, name, "created player");
        Ok(player)
    }

    fn join_game(&mut self, game_id: &GameId, player_id: &PlayerId) -> Result<Game, StoreError> {
        let mut game = self.lookup_game(game_id)?;
        let player = self.lookup_player(player_id)?;

        if game.player_index(player_id).is_some() {
            return Err(StoreError::AlreadyJoined {
                game: game_id.clone(),
                player: player_id.clone(),
            });
        }

        game.players.push(player);
        self.save_game(&game)?;
        Ok(game)
    }

    fn lookup_game(&self, game_id: &GameId) -> Result<Game, StoreError> {
        let bytes = self
            .games
            .get(game_id)
            .ok_or_else(|| StoreError::GameNotFound(game_id.clone()))?;
        Self::decode(bytes)
    }

    fn lookup_player(&self, player_id: &PlayerId) -> Result<Player, StoreError> {
        self.players
            .get(player_id)
            .cloned()
            .ok_or_else(|| StoreError::PlayerNotFound(player_id.clone()))
    }

    fn save_game(&mut self, game: &Game) -> Result<(), StoreError> {
        let bytes = Self::encode(game)?;
        trace!(game_id = %game.id, bytes = bytes.len(), "saved game");
        self.games.insert(game.id.clone(), bytes);
        Ok(())
    }
}
