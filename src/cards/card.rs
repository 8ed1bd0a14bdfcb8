//! Cards: identity plus face.
//!
//! Every card keeps its `CardId` for the whole match. The face is fixed at
//! deck-build time, with one exception: an Elements card on the discard pile
//! gets its chosen color and shape written onto it exactly once.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::attributes::{Color, Shape};
use crate::core::error::IllegalCommand;

/// Card identity, unique within one deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The three card types of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    /// Color and shape.
    Regular,
    /// Only a color or only a shape.
    Single,
    /// Wild; the player picks a color and shape after playing it.
    Elements,
}

/// The one dimension a Single card shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Single {
    Color(Color),
    Shape(Shape),
}

/// What is printed on a card.
///
/// The variants make the card invariants structural: a Regular card always
/// has both dimensions, a Single card exactly one, an Elements card none
/// until `chosen` is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Face {
    Regular { color: Color, shape: Shape },
    Single { only: Single },
    Elements { chosen: Option<(Color, Shape)> },
}

/// A physical card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    face: Face,
}

impl Card {
    #[must_use]
    pub fn regular(id: CardId, color: Color, shape: Shape) -> Self {
        Self {
            id,
            face: Face::Regular { color, shape },
        }
    }

    /// A Single card showing only a color.
    #[must_use]
    pub fn color_only(id: CardId, color: Color) -> Self {
        Self {
            id,
            face: Face::Single {
                only: Single::Color(color),
            },
        }
    }

    /// A Single card showing only a shape.
    #[must_use]
    pub fn shape_only(id: CardId, shape: Shape) -> Self {
        Self {
            id,
            face: Face::Single {
                only: Single::Shape(shape),
            },
        }
    }

    /// An unresolved Elements card.
    #[must_use]
    pub fn elements(id: CardId) -> Self {
        Self {
            id,
            face: Face::Elements { chosen: None },
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn face(&self) -> Face {
        self.face
    }

    /// The printed card type. An Elements card stays `Elements` even after
    /// it has been resolved.
    #[must_use]
    pub fn kind(&self) -> CardKind {
        match self.face {
            Face::Regular { .. } => CardKind::Regular,
            Face::Single { .. } => CardKind::Single,
            Face::Elements { .. } => CardKind::Elements,
        }
    }

    #[must_use]
    pub fn is_elements(&self) -> bool {
        matches!(self.face, Face::Elements { .. })
    }

    #[must_use]
    pub fn is_single(&self) -> bool {
        matches!(self.face, Face::Single { .. })
    }

    /// The color this card matches on, if any.
    ///
    /// A resolved Elements card reports its chosen color.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        match self.face {
            Face::Regular { color, .. } => Some(color),
            Face::Single {
                only: Single::Color(color),
            } => Some(color),
            Face::Single { .. } => None,
            Face::Elements { chosen } => chosen.map(|(color, _)| color),
        }
    }

    /// The shape this card matches on, if any.
    #[must_use]
    pub fn shape(&self) -> Option<Shape> {
        match self.face {
            Face::Regular { shape, .. } => Some(shape),
            Face::Single {
                only: Single::Shape(shape),
            } => Some(shape),
            Face::Single { .. } => None,
            Face::Elements { chosen } => chosen.map(|(_, shape)| shape),
        }
    }

    /// Both matching dimensions as a pair.
    #[must_use]
    pub fn pips(&self) -> (Option<Color>, Option<Shape>) {
        (self.color(), self.shape())
    }

    /// Color and shape chosen for a resolved Elements card.
    #[must_use]
    pub fn chosen(&self) -> Option<(Color, Shape)> {
        match self.face {
            Face::Elements { chosen } => chosen,
            _ => None,
        }
    }

    /// Write the chosen color and shape onto an Elements card.
    ///
    /// Only an unresolved Elements card accepts this; the override is
    /// written at most once.
    pub(crate) fn resolve(&mut self, color: Color, shape: Shape) -> Result<(), IllegalCommand> {
        match &mut self.face {
            Face::Elements { chosen } if chosen.is_none() => {
                *chosen = Some((color, shape));
                Ok(())
            }
            _ => Err(IllegalCommand::NotResolvable(self.id)),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.face {
            Face::Regular { color, shape } => write!(f, "{color} {shape}"),
            Face::Single {
                only: Single::Color(color),
            } => write!(f, "{color}"),
            Face::Single {
                only: Single::Shape(shape),
            } => write!(f, "{shape}"),
            Face::Elements { chosen: None } => f.write_str("Elements"),
            Face::Elements {
                chosen: Some((color, shape)),
            } => write!(f, "Elements ({color} {shape})"),
        }
    }
}
