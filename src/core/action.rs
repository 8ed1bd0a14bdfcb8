//! Player commands and the command history.
//!
//! A `Command` is everything a presentation layer can ask the engine to do
//! on the current player's behalf. Accepted commands are appended to the
//! match history as `ActionRecord`s.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::{Color, Shape};

/// A command issued for the current player.
///
/// ```
/// use elements_engine::cards::{Color, Shape};
/// use elements_engine::core::Command;
///
/// let play = Command::Play { index: 2 };
/// let resolve = Command::ResolveElements { color: Color::Green, shape: Shape::Hexagon };
/// assert_ne!(play, resolve);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Play the card at `index` in the current hand.
    Play { index: usize },
    /// Draw cards, reverse direction, and end the turn.
    Draw,
    /// Choose the color and shape of the Elements card just played.
    ResolveElements { color: Color, shape: Shape },
    /// Finish the turn after at least one play.
    EndTurn,
}

/// An accepted command with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who issued the command.
    pub player: PlayerId,

    pub command: Command,

    /// Turn number when the command was accepted.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, command: Command, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            command,
            turn,
            sequence,
        }
    }
}
