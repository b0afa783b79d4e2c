//! Session configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a [`FreeCellGame`](crate::game::FreeCellGame).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the first deal. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Run safe auto-play after every successful move.
    pub auto_play: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            auto_play: true,
        }
    }
}

impl GameConfig {
    /// Use a fixed seed for reproducible deals.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable auto-play after each move.
    #[must_use]
    pub fn with_auto_play(mut self, enabled: bool) -> Self {
        self.auto_play = enabled;
        self
    }
}
