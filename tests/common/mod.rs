//! Shared fixtures for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use uno_engine::{DeckEngine, EngineConfig, Game, GameStore, MemoryStore, Player};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Initialize test logging once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Seeded engine over an empty in-memory store.
pub fn engine(seed: u64) -> DeckEngine<MemoryStore> {
    init_logging();
    DeckEngine::new(MemoryStore::new(), EngineConfig::default().with_seed(seed))
}

/// A stored game with one joined player and a fresh shuffled draw pile.
pub fn setup_game_with_player(engine: &mut DeckEngine<MemoryStore>) -> (Game, Player) {
    let store = engine.store_mut();
    let game = store.create_game().expect("create game");
    let player = store.create_player("Player 1").expect("create player");
    store.join_game(&game.id, &player.id).expect("join game");

    let game = engine.setup_game(&game.id).expect("setup game");
    (game, player)
}

/// Create a player and append them to the game.
pub fn join_new_player(engine: &mut DeckEngine<MemoryStore>, game: &Game, name: &str) -> Game {
    let store = engine.store_mut();
    let player = store.create_player(name).expect("create player");
    store.join_game(&game.id, &player.id).expect("join game")
}
