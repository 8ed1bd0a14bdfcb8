//! Effective top card.
//!
//! The card a play is matched against is not always the physical top of the
//! discard pile. This module is the single place that derives it; both the
//! validator and the executor call `effective_top` and nothing caches the
//! result.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardKind, Color, Face, Shape, Single};
use crate::core::state::TurnLock;

/// The discard top as the rules see it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EffectiveTop {
    /// A Regular card, or a resolved Elements card standing in for one.
    Regular { color: Color, shape: Shape },
    /// A Single card.
    Single { only: Single },
    /// A constraint forced this turn by an Elements choice. Absent fields
    /// accept anything.
    Forced {
        color: Option<Color>,
        shape: Option<Shape>,
    },
    /// An unresolved Elements card (or an empty pile): anything goes.
    Wild,
}

impl EffectiveTop {
    /// Build the effective view of a single card, ignoring turn state.
    #[must_use]
    pub fn of_card(card: &Card) -> Self {
        match card.face() {
            Face::Regular { color, shape } => EffectiveTop::Regular { color, shape },
            Face::Single { only } => EffectiveTop::Single { only },
            Face::Elements {
                chosen: Some((color, shape)),
            } => EffectiveTop::Regular { color, shape },
            Face::Elements { chosen: None } => EffectiveTop::Wild,
        }
    }

    /// The kind a played card is compared with. `Forced` and `Wild` tops have
    /// no printed kind.
    #[must_use]
    pub fn kind(&self) -> Option<CardKind> {
        match self {
            EffectiveTop::Regular { .. } => Some(CardKind::Regular),
            EffectiveTop::Single { .. } => Some(CardKind::Single),
            EffectiveTop::Forced { .. } => None,
            EffectiveTop::Wild => Some(CardKind::Elements),
        }
    }

    /// Color a candidate can match. For `Forced`, `None` means "any".
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        match *self {
            EffectiveTop::Regular { color, .. } => Some(color),
            EffectiveTop::Single {
                only: Single::Color(color),
            } => Some(color),
            EffectiveTop::Forced { color, .. } => color,
            _ => None,
        }
    }

    /// Shape a candidate can match. For `Forced`, `None` means "any".
    #[must_use]
    pub fn shape(&self) -> Option<Shape> {
        match *self {
            EffectiveTop::Regular { shape, .. } => Some(shape),
            EffectiveTop::Single {
                only: Single::Shape(shape),
            } => Some(shape),
            EffectiveTop::Forced { shape, .. } => shape,
            _ => None,
        }
    }

    #[must_use]
    pub fn is_single(&self) -> bool {
        matches!(self, EffectiveTop::Single { .. })
    }
}

/// Derive the effective top from the discard pile and the turn lock.
///
/// 1. A resolved Elements top counts as a Regular card with its chosen
///    values.
/// 2. Otherwise, a forced color/shape this turn yields a `Forced` top.
/// 3. Otherwise the raw top card is used.
#[must_use]
pub fn effective_top(discard: &[Card], lock: &TurnLock) -> EffectiveTop {
    let Some(top) = discard.last() else {
        return EffectiveTop::Wild;
    };

    if let Some((color, shape)) = top.chosen() {
        return EffectiveTop::Regular { color, shape };
    }

    if lock.is_forced() {
        let (color, shape) = lock.forced();
        return EffectiveTop::Forced { color, shape };
    }

    EffectiveTop::of_card(top)
}
