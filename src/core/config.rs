//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Cards dealt to each player at the start of a game.
pub const DEFAULT_HAND_SIZE: usize = 7;

/// Deck engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cards dealt to each player by `deal_cards`.
    pub hand_size: usize,

    /// Seed for every shuffle the engine performs.
    /// `None` seeds from OS entropy; a fixed seed makes games reproducible.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Set the starting hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
