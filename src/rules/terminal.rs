//! End-of-game detection.
//!
//! A match ends in one of two ways:
//! - a player empties their hand (that player wins at once), or
//! - a turn starts with an empty draw pile (everyone tied on the fewest
//!   cards wins).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::state::MatchState;

/// Why the match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    EmptyHand,
    DeckExhausted,
}

/// Result of a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameOutcome {
    pub reason: EndReason,
    /// Winning seats in seat order. Several on a deck-exhaustion tie.
    pub winners: SmallVec<[PlayerId; 4]>,
}

impl GameOutcome {
    /// `player` played their last card.
    #[must_use]
    pub fn empty_hand(player: PlayerId) -> Self {
        let mut winners = SmallVec::new();
        winners.push(player);
        Self {
            reason: EndReason::EmptyHand,
            winners,
        }
    }

    #[must_use]
    pub fn deck_exhausted(winners: SmallVec<[PlayerId; 4]>) -> Self {
        Self {
            reason: EndReason::DeckExhausted,
            winners,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winners.contains(&player)
    }
}

/// Seats holding strictly fewer cards than everyone else, ties included.
#[must_use]
pub fn fewest_cards(hands: &PlayerMap<Vec<Card>>) -> SmallVec<[PlayerId; 4]> {
    let fewest = hands.values().map(Vec::len).min().unwrap_or(0);
    hands
        .iter()
        .filter(|(_, hand)| hand.len() == fewest)
        .map(|(player, _)| player)
        .collect()
}

/// The deck-exhaustion outcome, if the draw pile is empty.
#[must_use]
pub fn deck_exhaustion(state: &MatchState) -> Option<GameOutcome> {
    if !state.deck().is_empty() {
        return None;
    }
    Some(GameOutcome::deck_exhausted(fewest_cards(state.hands())))
}
