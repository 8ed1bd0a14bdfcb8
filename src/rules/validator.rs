//! Move validation.
//!
//! Pure functions over `&MatchState`; nothing here mutates. Rules are
//! checked in a fixed precedence and the first one that applies decides:
//!
//! 1. Hand-size guards for Elements cards
//! 2. Elements cards must be the sole play of a turn
//! 3. No Single card on a Single top
//! 4. Locked color/shape must be honored
//! 5. The card must match the effective top

use crate::core::error::MoveRejection;
use crate::core::state::MatchState;

use super::top::EffectiveTop;

/// Check whether the current player may play the card at `index`.
///
/// Returns the first rule the play breaks.
pub fn check_move(state: &MatchState, index: usize) -> Result<(), MoveRejection> {
    let hand = state.current_hand();
    let card = hand
        .get(index)
        .ok_or(MoveRejection::CardNotInHand { index })?;

    // An Elements card can never be the last card out, so never leave one
    // stranded as the only card either.
    if card.is_elements() && hand.len() == 1 {
        return Err(MoveRejection::ElementsAsLastCard);
    }
    if hand.len() == 2 && hand[1 - index].is_elements() {
        return Err(MoveRejection::StrandsElements);
    }

    let lock = state.lock();
    if card.is_elements() {
        return if lock.cards_played() == 0 {
            Ok(())
        } else {
            Err(MoveRejection::ElementsNotAlone)
        };
    }

    let top = state.effective_top();
    if card.is_single() && top.is_single() {
        return Err(MoveRejection::SingleOnSingle);
    }

    if let Some(color) = lock.color() {
        if card.color() != Some(color) {
            return Err(MoveRejection::ColorLocked(color));
        }
    }
    if let Some(shape) = lock.shape() {
        if card.shape() != Some(shape) {
            return Err(MoveRejection::ShapeLocked(shape));
        }
    }

    match top {
        EffectiveTop::Wild => Ok(()),
        EffectiveTop::Forced { color, shape } => {
            let color_ok = color.map_or(true, |c| card.color() == Some(c));
            let shape_ok = shape.map_or(true, |s| card.shape() == Some(s));
            if color_ok && shape_ok {
                Ok(())
            } else {
                Err(MoveRejection::NoMatch)
            }
        }
        EffectiveTop::Regular { .. } | EffectiveTop::Single { .. } => {
            let color_match = card.color().is_some() && card.color() == top.color();
            let shape_match = card.shape().is_some() && card.shape() == top.shape();

            let matched = if lock.color().is_some() {
                color_match
            } else if lock.shape().is_some() {
                shape_match
            } else {
                color_match || shape_match
            };

            if matched {
                Ok(())
            } else {
                Err(MoveRejection::NoMatch)
            }
        }
    }
}

/// Whether the current player may play the card at `index`.
#[must_use]
pub fn is_valid_move(state: &MatchState, index: usize) -> bool {
    check_move(state, index).is_ok()
}

/// Hand positions the current player may legally play.
#[must_use]
pub fn playable_indices(state: &MatchState) -> Vec<usize> {
    (0..state.current_hand().len())
        .filter(|&index| is_valid_move(state, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId, Color, Shape};
    use crate::core::player::PlayerId;

    fn id(n: u16) -> CardId {
        CardId::new(n)
    }

    fn state_with(hand: Vec<Card>, top: Card) -> MatchState {
        MatchState::arrange(vec![hand, vec![]], vec![], vec![top], PlayerId::new(0))
    }

    fn blue_circle(n: u16) -> Card {
        Card::regular(id(n), Color::Blue, Shape::Circle)
    }

    #[test]
    fn test_index_out_of_range() {
        let state = state_with(vec![blue_circle(1)], blue_circle(0));
        assert_eq!(
            check_move(&state, 3),
            Err(MoveRejection::CardNotInHand { index: 3 })
        );
    }

    #[test]
    fn test_elements_cannot_be_last_card() {
        let state = state_with(vec![Card::elements(id(1))], blue_circle(0));
        assert_eq!(check_move(&state, 0), Err(MoveRejection::ElementsAsLastCard));
    }

    #[test]
    fn test_cannot_strand_elements() {
        let state = state_with(
            vec![Card::regular(id(1), Color::Blue, Shape::Square), Card::elements(id(2))],
            blue_circle(0),
        );
        assert_eq!(check_move(&state, 0), Err(MoveRejection::StrandsElements));
        // The Elements card itself is fine: it leaves a Regular card behind.
        assert_eq!(check_move(&state, 1), Ok(()));
    }

    #[test]
    fn test_two_elements_strand_each_other() {
        let state = state_with(vec![Card::elements(id(1)), Card::elements(id(2))], blue_circle(0));
        assert_eq!(check_move(&state, 0), Err(MoveRejection::StrandsElements));
        assert_eq!(check_move(&state, 1), Err(MoveRejection::StrandsElements));
    }

    #[test]
    fn test_elements_matches_anything_on_first_play() {
        let state = state_with(
            vec![Card::elements(id(1)), blue_circle(2), blue_circle(3)],
            Card::shape_only(id(0), Shape::Hexagon),
        );
        assert_eq!(check_move(&state, 0), Ok(()));
    }

    #[test]
    fn test_elements_after_a_play_is_rejected() {
        let mut state = state_with(
            vec![Card::elements(id(1)), blue_circle(2), blue_circle(3)],
            blue_circle(0),
        );
        state.lock_mut().record_play();
        assert_eq!(check_move(&state, 0), Err(MoveRejection::ElementsNotAlone));
    }

    #[test]
    fn test_single_on_single() {
        let state = state_with(
            vec![Card::shape_only(id(1), Shape::Circle), blue_circle(2)],
            Card::color_only(id(0), Color::Blue),
        );
        assert_eq!(check_move(&state, 0), Err(MoveRejection::SingleOnSingle));
        assert_eq!(check_move(&state, 1), Ok(()));
    }

    #[test]
    fn test_single_on_regular() {
        let state = state_with(
            vec![
                Card::color_only(id(1), Color::Blue),
                Card::shape_only(id(2), Shape::Circle),
                Card::color_only(id(3), Color::Red),
            ],
            blue_circle(0),
        );
        assert_eq!(check_move(&state, 0), Ok(()));
        assert_eq!(check_move(&state, 1), Ok(()));
        assert_eq!(check_move(&state, 2), Err(MoveRejection::NoMatch));
    }

    #[test]
    fn test_regular_on_single_uses_present_dimension() {
        let state = state_with(
            vec![
                Card::regular(id(1), Color::Red, Shape::Triangle),
                Card::regular(id(2), Color::Blue, Shape::Triangle),
            ],
            Card::shape_only(id(0), Shape::Triangle),
        );
        assert_eq!(check_move(&state, 0), Ok(()));
        assert_eq!(check_move(&state, 1), Ok(()));

        let state = state_with(
            vec![
                Card::regular(id(1), Color::Red, Shape::Circle),
                Card::regular(id(2), Color::Blue, Shape::Square),
            ],
            Card::shape_only(id(0), Shape::Triangle),
        );
        assert_eq!(check_move(&state, 0), Err(MoveRejection::NoMatch));
        assert_eq!(check_move(&state, 1), Err(MoveRejection::NoMatch));
    }

    #[test]
    fn test_color_lock_rejects_shape_only_single() {
        let mut state = state_with(
            vec![
                Card::shape_only(id(1), Shape::Square),
                Card::regular(id(2), Color::Red, Shape::Square),
                Card::regular(id(3), Color::Blue, Shape::Hexagon),
            ],
            Card::regular(id(0), Color::Blue, Shape::Square),
        );
        state.lock_mut().record_play();
        state.lock_mut().lock_color(Color::Blue);

        assert_eq!(check_move(&state, 0), Err(MoveRejection::ColorLocked(Color::Blue)));
        assert_eq!(check_move(&state, 1), Err(MoveRejection::ColorLocked(Color::Blue)));
        assert_eq!(check_move(&state, 2), Ok(()));
    }

    #[test]
    fn test_shape_lock() {
        let mut state = state_with(
            vec![
                Card::color_only(id(1), Color::Blue),
                Card::regular(id(2), Color::Blue, Shape::Square),
                Card::regular(id(3), Color::Red, Shape::Circle),
            ],
            blue_circle(0),
        );
        state.lock_mut().record_play();
        state.lock_mut().lock_shape(Shape::Circle);

        assert_eq!(check_move(&state, 0), Err(MoveRejection::ShapeLocked(Shape::Circle)));
        assert_eq!(check_move(&state, 1), Err(MoveRejection::ShapeLocked(Shape::Circle)));
        assert_eq!(check_move(&state, 2), Ok(()));
    }

    #[test]
    fn test_wild_top_accepts_everything() {
        let state = state_with(
            vec![
                Card::color_only(id(1), Color::Purple),
                Card::shape_only(id(2), Shape::Hexagon),
                Card::regular(id(3), Color::Red, Shape::Square),
            ],
            Card::elements(id(0)),
        );
        assert_eq!(playable_indices(&state), vec![0, 1, 2]);
    }

    #[test]
    fn test_forced_top_requires_every_forced_field() {
        let mut state = state_with(
            vec![
                Card::regular(id(1), Color::Green, Shape::Hexagon),
                Card::regular(id(2), Color::Green, Shape::Circle),
                Card::color_only(id(3), Color::Green),
            ],
            Card::color_only(id(0), Color::Red),
        );
        state.lock_mut().force(Color::Green, Shape::Hexagon);

        assert_eq!(check_move(&state, 0), Ok(()));
        assert_eq!(check_move(&state, 1), Err(MoveRejection::NoMatch));
        assert_eq!(check_move(&state, 2), Err(MoveRejection::NoMatch));
    }

    #[test]
    fn test_validation_does_not_mutate() {
        let state = state_with(vec![blue_circle(1), blue_circle(2)], blue_circle(0));
        let before = state.clone();
        let _ = playable_indices(&state);
        assert_eq!(state, before);
    }
}
