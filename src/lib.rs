//! # elements-engine
//!
//! Rule engine for Elements, a pass-and-play card game for two or more
//! players on one device. Players shed cards by matching the color or the
//! shape of the discard top; within a turn, the first ambiguous match locks
//! the turn to one dimension.
//!
//! ## Cards
//!
//! - **Regular**: a color and a shape (64 cards)
//! - **Single**: only a color or only a shape (8 cards); never on another Single
//! - **Elements**: wild (8 cards); must be the only card of its turn, and the
//!   player then picks the color and shape it becomes
//!
//! ## Usage
//!
//! ```
//! use elements_engine::{Command, ElementsGame, MatchConfig};
//!
//! let mut game = ElementsGame::new(MatchConfig::new(3).with_seed(42)).unwrap();
//!
//! // Play the first legal card, or draw if there is none.
//! match game.playable_indices().first() {
//!     Some(&index) => game.apply(Command::Play { index }).unwrap(),
//!     None => game.apply(Command::Draw).unwrap(),
//! }
//! assert!(game.state().verify_integrity().is_ok());
//! ```
//!
//! ## Modules
//!
//! - `cards`: colors, shapes, cards, deck construction
//! - `core`: players, match state, commands, RNG, configuration, errors
//! - `rules`: effective top, move validation, lock inference, turn execution,
//!   end-of-game detection

pub mod cards;
pub mod core;
pub mod rules;

pub use crate::cards::{build_deck, Card, CardId, CardKind, Color, Face, Shape, Single, DECK_SIZE};

pub use crate::core::{
    ActionRecord, Command, ConfigError, Direction, EngineError, EngineResult, GameRng, IllegalCommand,
    MatchConfig, MatchState, MoveRejection, Phase, PlayerId, PlayerMap, TurnLock,
};

pub use crate::rules::{is_valid_move, EffectiveTop, ElementsGame, EndReason, GameOutcome};
