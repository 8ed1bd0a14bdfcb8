//! Match state: the authoritative record of one game.
//!
//! ## MatchState
//!
//! - Hands (one per seat), draw pile, discard pile
//! - Current seat, direction, turn number
//! - `TurnLock`: what this turn has committed to so far
//! - `Phase`: playing, waiting for an Elements choice, or over
//! - History of accepted commands
//!
//! Only the turn executor mutates a `MatchState`; everything public here is
//! a read-only query.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::action::{ActionRecord, Command};
use super::error::IntegrityError;
use super::player::{PlayerId, PlayerMap};
use crate::cards::{Card, Color, Shape, DECK_SIZE};
use crate::rules::{effective_top, EffectiveTop, GameOutcome};

/// Seat order. Drawing cards flips it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Seat offset for the next turn: `+1` or `-1`.
    #[must_use]
    pub fn step(self) -> isize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Constraints accumulated during the current turn.
///
/// `color`/`shape` are the turn's choice: once a dimension is locked it
/// stays locked until the turn ends. `forced_*` are only set by resolving
/// an Elements card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnLock {
    cards_played: u32,
    color: Option<Color>,
    shape: Option<Shape>,
    forced_color: Option<Color>,
    forced_shape: Option<Shape>,
}

impl TurnLock {
    /// Cards played so far this turn.
    #[must_use]
    pub fn cards_played(&self) -> u32 {
        self.cards_played
    }

    /// Locked color, if the turn committed to one.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Locked shape, if the turn committed to one.
    #[must_use]
    pub fn shape(&self) -> Option<Shape> {
        self.shape
    }

    /// Neither dimension is locked.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.color.is_none() && self.shape.is_none()
    }

    /// Color and shape forced by an Elements resolution this turn.
    #[must_use]
    pub fn forced(&self) -> (Option<Color>, Option<Shape>) {
        (self.forced_color, self.forced_shape)
    }

    #[must_use]
    pub fn is_forced(&self) -> bool {
        self.forced_color.is_some() || self.forced_shape.is_some()
    }

    pub(crate) fn record_play(&mut self) {
        self.cards_played += 1;
    }

    /// Lock the color unless one is already locked. Returns whether the lock
    /// changed.
    pub(crate) fn lock_color(&mut self, color: Color) -> bool {
        if self.color.is_some() {
            return false;
        }
        self.color = Some(color);
        true
    }

    /// Lock the shape unless one is already locked. Returns whether the lock
    /// changed.
    pub(crate) fn lock_shape(&mut self, shape: Shape) -> bool {
        if self.shape.is_some() {
            return false;
        }
        self.shape = Some(shape);
        true
    }

    pub(crate) fn force(&mut self, color: Color, shape: Shape) {
        self.forced_color = Some(color);
        self.forced_shape = Some(shape);
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Where the match is in its lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    /// The current player may play, draw, or end the turn.
    #[default]
    Playing,
    /// An Elements card was just played; only its resolution is accepted.
    ChoosingElements,
    /// The match is finished.
    Over { outcome: GameOutcome },
}

/// Complete state of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    hands: PlayerMap<Vec<Card>>,
    deck: Vec<Card>,
    discard: Vec<Card>,
    current: PlayerId,
    direction: Direction,
    lock: TurnLock,
    phase: Phase,
    turn_number: u32,
    action_sequence: u32,
    history: Vec<ActionRecord>,
}

impl MatchState {
    /// Lay out a table directly: hands in seat order, the draw pile (drawn
    /// from the end), the discard pile (top last), and the seat to act.
    ///
    /// The turn starts clean: clockwise, nothing played, turn 1. Meant for
    /// tools and tests that set up a position by hand; a real match is
    /// dealt by `ElementsGame::new`.
    ///
    /// # Panics
    ///
    /// If `hands` is empty or `current` has no seat at the table.
    #[must_use]
    pub fn arrange(
        hands: Vec<Vec<Card>>,
        deck: Vec<Card>,
        discard: Vec<Card>,
        current: PlayerId,
    ) -> Self {
        let hands = PlayerMap::from_vec(hands);
        assert!(
            current.index() < hands.player_count(),
            "{current} is not seated at a {}-player table",
            hands.player_count()
        );

        Self {
            hands,
            deck,
            discard,
            current,
            direction: Direction::Clockwise,
            lock: TurnLock::default(),
            phase: Phase::Playing,
            turn_number: 1,
            action_sequence: 0,
            history: Vec::new(),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.hands.player_count()
    }

    /// Iterate over all seats.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        self.hands.player_ids()
    }

    /// The seat whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[Card] {
        &self.hands[player]
    }

    #[must_use]
    pub fn current_hand(&self) -> &[Card] {
        self.hand(self.current)
    }

    #[must_use]
    pub fn hands(&self) -> &PlayerMap<Vec<Card>> {
        &self.hands
    }

    /// Cards held by each seat.
    #[must_use]
    pub fn hand_counts(&self) -> PlayerMap<usize> {
        self.hands.map(Vec::len)
    }

    /// The draw pile; the next card drawn is the last one.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// The discard pile; the top card is the last one.
    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// The physical top of the discard pile.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.discard.last()
    }

    /// The top card as it is matched against right now.
    #[must_use]
    pub fn effective_top(&self) -> EffectiveTop {
        effective_top(&self.discard, &self.lock)
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn lock(&self) -> &TurnLock {
        &self.lock
    }

    /// Forced color and shape from an Elements resolution this turn.
    #[must_use]
    pub fn forced(&self) -> (Option<Color>, Option<Shape>) {
        self.lock.forced()
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Turn counter, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Accepted commands, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// How the match ended, once it has.
    #[must_use]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        match &self.phase {
            Phase::Over { outcome } => Some(outcome),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over { .. })
    }

    /// Total cards across hands, draw pile, and discard pile.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.deck.len() + self.discard.len() + self.hands.values().map(Vec::len).sum::<usize>()
    }

    /// Check that the full deck is present exactly once.
    pub fn verify_integrity(&self) -> Result<(), IntegrityError> {
        let found = self.cards_in_play();
        if found != DECK_SIZE {
            return Err(IntegrityError::CardCount {
                expected: DECK_SIZE,
                found,
            });
        }

        let mut seen = FxHashSet::default();
        let all_cards = self
            .hands
            .values()
            .flatten()
            .chain(&self.deck)
            .chain(&self.discard);
        for card in all_cards {
            if !seen.insert(card.id()) {
                return Err(IntegrityError::DuplicateCard(card.id()));
            }
        }

        Ok(())
    }

    // === Mutation (turn executor only) ===

    pub(crate) fn lock_mut(&mut self) -> &mut TurnLock {
        &mut self.lock
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// Move the card at `index` of the current hand onto the discard pile.
    pub(crate) fn discard_from_hand(&mut self, index: usize) -> &Card {
        let card = self.hands[self.current].remove(index);
        self.discard.push(card);
        &self.discard[self.discard.len() - 1]
    }

    pub(crate) fn top_mut(&mut self) -> Option<&mut Card> {
        self.discard.last_mut()
    }

    /// Move up to `count` cards from the draw pile into the current hand.
    /// Returns how many were drawn.
    pub(crate) fn draw_into_hand(&mut self, count: usize) -> usize {
        let take = count.min(self.deck.len());
        let drawn = self.deck.split_off(self.deck.len() - take);
        // Pop order: the last card of the pile is drawn first.
        self.hands[self.current].extend(drawn.into_iter().rev());
        take
    }

    pub(crate) fn reverse_direction(&mut self) {
        self.direction = self.direction.reversed();
    }

    /// Pass the turn to the next seat in the current direction and clear the
    /// turn lock.
    pub(crate) fn advance_turn(&mut self) {
        self.current = self.current.offset(self.direction.step(), self.player_count());
        self.lock.reset();
        self.turn_number += 1;
        self.action_sequence = 0;
    }

    pub(crate) fn record(&mut self, player: PlayerId, command: Command) {
        let record = ActionRecord::new(player, command, self.turn_number, self.action_sequence);
        self.action_sequence += 1;
        self.history.push(record);
    }
}
