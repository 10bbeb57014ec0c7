//! Deck and turn engine.
//!
//! `DeckEngine` owns a `GameStore` and the shuffling RNG. Every turn-aware
//! operation follows the same shape: load the game, validate, mutate, save.
//! Validation happens before any pile is touched, so a rejected request
//! leaves the stored game unchanged.
//!
//! ## Draw pile replenishment
//!
//! When the draw pile is empty:
//! - with two or more discards, every discard except the top one is moved
//!   to the draw pile and shuffled; the top discard stays face up
//! - otherwise the draw pile becomes a fresh full deck and the discard pile
//!   is left alone

use tracing::{debug, info, warn};

use crate::cards::{full_deck, generate_shuffled_deck, Card};
use crate::core::{EngineConfig, Game, GameId, GameRng, GameRngState, Player, PlayerId};
use crate::error::EngineError;
use crate::store::GameStore;
use crate::zones::Pile;

/// What `replenish_draw_pile` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Replenish {
    /// The draw pile still had cards.
    NotNeeded,
    /// Discards under the top card were shuffled into the draw pile.
    Reshuffled { cards: usize },
    /// Nothing to reshuffle; a new full deck was generated.
    FreshDeck,
}

/// Move the top card of the draw pile into a player's hand.
///
/// No turn or membership checks and no persistence. Returns the drawn card,
/// or `None` (touching nothing) when the draw pile is empty or the index is
/// out of range.
pub fn draw_card_helper(game: &mut Game, player_index: usize) -> Option<Card> {
    let player = game.players.get_mut(player_index)?;
    let card = game.draw_pile.pop_top()?;
    player.cards.push(card);
    Some(card)
}

/// Index of the first card in `player`'s hand matching `card`.
#[must_use]
pub fn card_from_player(player: &Player, card: &Card) -> Option<usize> {
    player.card_index(card)
}

/// Turn-aware draw, deal and reshuffle over a `GameStore`.
///
/// ```
/// use uno_engine::core::EngineConfig;
/// use uno_engine::rules::DeckEngine;
/// use uno_engine::store::{GameStore, MemoryStore};
///
/// let mut engine = DeckEngine::new(MemoryStore::new(), EngineConfig::default().with_seed(1));
/// let game = engine.store_mut().create_game().unwrap();
/// let player = engine.store_mut().create_player("Player 1").unwrap();
/// engine.store_mut().join_game(&game.id, &player.id).unwrap();
/// engine.setup_game(&game.id).unwrap();
///
/// let game = engine.draw_card(&game.id, &player.id).unwrap();
/// assert_eq!(game.players[0].cards.len(), 1);
/// assert_eq!(game.draw_pile.len(), 107);
/// ```
#[derive(Debug)]
pub struct DeckEngine<S> {
    store: S,
    rng: GameRng,
    config: EngineConfig,
}

impl<S: GameStore> DeckEngine<S> {
    /// Create an engine over `store`.
    ///
    /// Shuffles are seeded from `config.seed`, or from OS entropy when unset.
    pub fn new(store: S, config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!(seed = rng.seed(), hand_size = config.hand_size, "deck engine ready");
        Self { store, rng, config }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Give the store back, dropping the engine.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Checkpoint of the shuffle RNG.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// A fresh full deck, shuffled with the engine's RNG.
    pub fn generate_shuffled_deck(&mut self) -> Vec<Card> {
        generate_shuffled_deck(&mut self.rng)
    }

    /// Load a game.
    pub fn game(&self, game_id: &GameId) -> Result<Game, EngineError> {
        Ok(self.store.lookup_game(game_id)?)
    }

    /// Put a fresh shuffled deck on the draw pile and clear the discards.
    pub fn setup_game(&mut self, game_id: &GameId) -> Result<Game, EngineError> {
        let mut game = self.store.lookup_game(game_id)?;

        game.draw_pile = Pile::from(self.generate_shuffled_deck());
        game.discard_pile.clear();

        self.store.save_game(&game)?;
        info!(game_id = %game.id, draw_pile = game.draw_pile.len(), "game set up");
        Ok(game)
    }

    /// Refill an empty draw pile. Does nothing if it still has cards.
    pub fn replenish_draw_pile(&mut self, game: &mut Game) -> Replenish {
        if !game.draw_pile.is_empty() {
            return Replenish::NotNeeded;
        }

        let under_top = game.discard_pile.take_all_but_top();
        if under_top.is_empty() {
            game.draw_pile = Pile::from(self.generate_shuffled_deck());
            info!(
                game_id = %game.id,
                discard_pile = game.discard_pile.len(),
                "nothing to reshuffle, fresh deck on draw pile"
            );
            return Replenish::FreshDeck;
        }

        let cards = under_top.len();
        game.draw_pile = Pile::from(under_top);
        game.draw_pile.shuffle(&mut self.rng);
        info!(game_id = %game.id, cards, "reshuffled discards into draw pile");
        Replenish::Reshuffled { cards }
    }

    /// Draw one card for `player_id`, who must be the current player.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the game does not exist
    /// - `NotParticipant` if the player has not joined this game
    /// - `NotYourTurn` if another player is current
    pub fn draw_card(&mut self, game_id: &GameId, player_id: &PlayerId) -> Result<Game, EngineError> {
        let mut game = self.store.lookup_game(game_id)?;

        let Some(index) = game.player_index(player_id) else {
            warn!(%game_id, %player_id, "draw rejected: not a participant");
            return Err(EngineError::NotParticipant);
        };

        if index != game.current_player {
            warn!(%game_id, %player_id, current = game.current_player, "draw rejected: out of turn");
            return Err(EngineError::NotYourTurn);
        }

        self.replenish_draw_pile(&mut game);
        let card = draw_card_helper(&mut game, index);

        debug!(
            %game_id,
            %player_id,
            drawn = ?card,
            hand = game.players[index].hand_size(),
            draw_pile = game.draw_pile.len(),
            "drew card"
        );

        self.store.save_game(&game)?;
        Ok(game)
    }

    /// Deal a fresh starting hand to every player.
    ///
    /// Existing hands are cleared, then cards go out one at a time in turn
    /// order until every player holds `hand_size`. The draw pile is refilled
    /// mid-deal whenever it runs dry. If the discard pile is empty afterwards,
    /// a starting card from a separate shuffled deck is turned face up, so
    /// the draw pile only loses the dealt cards.
    ///
    /// # Errors
    ///
    /// `NotFound` if the game does not exist.
    pub fn deal_cards(&mut self, game_id: &GameId) -> Result<Game, EngineError> {
        let mut game = self.store.lookup_game(game_id)?;
        let hand_size = self.config.hand_size;

        for player in &mut game.players {
            player.cards.clear();
        }

        let mut replenished = 0usize;
        for _ in 0..hand_size {
            for index in 0..game.players.len() {
                if self.replenish_draw_pile(&mut game) != Replenish::NotNeeded {
                    replenished += 1;
                }
                draw_card_helper(&mut game, index);
            }
        }

        if game.discard_pile.is_empty() {
            if let Some(&starter) = self.rng.choose(&full_deck()) {
                game.discard_pile.push(starter);
            }
        }

        self.store.save_game(&game)?;
        info!(
            %game_id,
            players = game.players.len(),
            hand_size,
            replenished,
            draw_pile = game.draw_pile.len(),
            "dealt hands"
        );
        Ok(game)
    }
}
