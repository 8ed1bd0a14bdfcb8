//! Core engine types: players, match state, commands, RNG, configuration,
//! errors.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{ActionRecord, Command};
pub use config::{MatchConfig, DEFAULT_DRAW_COUNT, DEFAULT_HAND_SIZE};
pub use error::{ConfigError, EngineError, EngineResult, IllegalCommand, IntegrityError, MoveRejection};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::{Direction, MatchState, Phase, TurnLock};
