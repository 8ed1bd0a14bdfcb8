//! Engine error taxonomy.
//!
//! - `InvalidMove`: the play broke a rule. Nothing changed; the player may
//!   try another card.
//! - `Configuration`: the match cannot be set up. Fatal at startup.
//! - `IllegalCommand`: the caller broke the command contract (e.g. a play
//!   while an Elements choice is pending). Not a player-facing message.
//!
//! Every rule is checked before the state is touched, so an `Err` never
//! leaves a half-applied command behind.

use thiserror::Error;

use crate::cards::{CardId, Color, Shape};

/// Result alias used by every engine command.
pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveRejection),

    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("illegal command: {0}")]
    IllegalCommand(#[from] IllegalCommand),
}

/// Why a candidate play was refused by the move validator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("no card at hand position {index}")]
    CardNotInHand { index: usize },

    #[error("an Elements card cannot be the last card played")]
    ElementsAsLastCard,

    #[error("playing this card would leave only an Elements card in hand")]
    StrandsElements,

    #[error("an Elements card must be the only card of the turn")]
    ElementsNotAlone,

    #[error("a Single card cannot be placed on another Single card")]
    SingleOnSingle,

    #[error("this turn is locked to {0}")]
    ColorLocked(Color),

    #[error("this turn is locked to {0}")]
    ShapeLocked(Shape),

    #[error("card matches neither the color nor the shape on top")]
    NoMatch,
}

/// Commands issued outside the state they are valid in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IllegalCommand {
    #[error("the game is already over")]
    GameOver,

    #[error("an Elements card is waiting for its color and shape")]
    AwaitingElementsChoice,

    #[error("no Elements card is waiting to be resolved")]
    NoPendingChoice,

    #[error("the turn cannot end before a card has been played")]
    NothingPlayed,

    #[error("card {0} is not an unresolved Elements card")]
    NotResolvable(CardId),
}

/// Match setups the fixed 80-card deck cannot support.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least 2 players are required, got {0}")]
    TooFewPlayers(usize),

    #[error("{players} players with {hand_size} cards each need {needed} cards, the deck has {available}")]
    DeckTooSmall {
        players: usize,
        hand_size: usize,
        needed: usize,
        available: usize,
    },

    #[error("hand size must be at least 1")]
    EmptyHands,

    #[error("draw count must be at least 1")]
    NoDraw,

    #[error("configured for {configured} players, but the table seats {seated}")]
    SeatMismatch { configured: usize, seated: usize },
}

/// Broken card-conservation invariants found by `MatchState::verify_integrity`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IntegrityError {
    #[error("expected {expected} cards in play, found {found}")]
    CardCount { expected: usize, found: usize },

    #[error("card {0} appears more than once")]
    DuplicateCard(CardId),
}
