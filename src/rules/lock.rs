//! Lock inference: which dimension a play commits the rest of the turn to.
//!
//! The first card of a turn is compared with the effective top it was played
//! on. Later cards only refine a lock that is still fully open, and they are
//! compared with the raw card directly beneath them on the discard pile.

use crate::cards::{unique_match, Card, Color, Dimension, Shape, Single};
use crate::core::state::TurnLock;

use super::top::EffectiveTop;

/// Dimensions a non-Elements play locks.
///
/// `lock` must already count the play; `previous_top` is the effective top
/// captured before the card was discarded; `preceding` is the raw discard
/// entry the card landed on.
#[must_use]
pub fn infer_lock(
    lock: &TurnLock,
    previous_top: &EffectiveTop,
    played: &Card,
    preceding: Option<&Card>,
) -> (Option<Color>, Option<Shape>) {
    if lock.cards_played() <= 1 {
        return match *previous_top {
            // A Single top has only one dimension, so the play matched it.
            EffectiveTop::Single {
                only: Single::Color(color),
            } => (Some(color), None),
            EffectiveTop::Single {
                only: Single::Shape(shape),
            } => (None, Some(shape)),
            EffectiveTop::Forced { color, shape } => (color, shape),
            EffectiveTop::Regular { .. } | EffectiveTop::Wild => {
                dimension_lock(played, (previous_top.color(), previous_top.shape()))
            }
        };
    }

    if !lock.is_open() {
        return (None, None);
    }

    match preceding {
        Some(beneath) => dimension_lock(played, beneath.pips()),
        None => (None, None),
    }
}

/// Lock the one dimension `played` shares with `other`, if exactly one.
fn dimension_lock(
    played: &Card,
    other: (Option<Color>, Option<Shape>),
) -> (Option<Color>, Option<Shape>) {
    match unique_match(played.pips(), other) {
        Some(Dimension::Color) => (played.color(), None),
        Some(Dimension::Shape) => (None, played.shape()),
        None => (None, None),
    }
}
