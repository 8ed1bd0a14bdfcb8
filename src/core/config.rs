//! Match configuration.
//!
//! The deck composition is fixed by the game; what a table may choose is the
//! number of players, the starting hand size, how many cards a draw takes,
//! and (for reproducible deals) the RNG seed.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::DECK_SIZE;

/// Cards dealt to each player at the start of a match.
pub const DEFAULT_HAND_SIZE: usize = 8;

/// Cards taken by a draw action.
pub const DEFAULT_DRAW_COUNT: usize = 3;

/// Settings for a single match.
///
/// ```
/// use elements_engine::core::MatchConfig;
///
/// let config = MatchConfig::new(4).with_seed(7);
/// assert!(config.validate().is_ok());
/// assert!(MatchConfig::new(10).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of players at the table (at least 2).
    pub player_count: usize,

    /// Cards dealt to each player.
    pub hand_size: usize,

    /// Maximum cards taken by one draw action.
    pub draw_count: usize,

    /// Seed for the deck shuffle and starting seat. `None` draws one from
    /// the operating system.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            hand_size: DEFAULT_HAND_SIZE,
            draw_count: DEFAULT_DRAW_COUNT,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Create a configuration with default rules for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn with_draw_count(mut self, draw_count: usize) -> Self {
        self.draw_count = draw_count;
        self
    }

    /// Fix the seed, making the deal reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cards that leave the deck during setup: every hand plus the start card.
    #[must_use]
    pub fn cards_needed(&self) -> usize {
        self.player_count * self.hand_size + 1
    }

    /// Check the configuration against the fixed deck.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count < 2 {
            return Err(ConfigError::TooFewPlayers(self.player_count));
        }
        if self.hand_size == 0 {
            return Err(ConfigError::EmptyHands);
        }
        if self.draw_count == 0 {
            return Err(ConfigError::NoDraw);
        }

        let needed = self.cards_needed();
        if needed > DECK_SIZE {
            return Err(ConfigError::DeckTooSmall {
                players: self.player_count,
                hand_size: self.hand_size,
                needed,
                available: DECK_SIZE,
            });
        }

        Ok(())
    }
}
