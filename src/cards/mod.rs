//! Card model and deck construction.
//!
//! ## Key Types
//!
//! - `Color`, `Shape`: the two matching dimensions
//! - `Card`: identity (`CardId`) plus `Face`
//! - `CardKind`: Regular, Single, or Elements
//! - `build_deck`: the shuffled 80-card deck

pub mod attributes;
pub mod card;
pub mod deck;

pub use attributes::{unique_match, Color, Dimension, Shape};
pub use card::{Card, CardId, CardKind, Face, Single};
pub use deck::{build_deck, unshuffled_deck, DeckCensus, DECK_SIZE, ELEMENTS_COUNT, REGULAR_COPIES};
