//! The game engine: owns one match and answers queries about it.
//!
//! `ElementsGame` is the only owner of a `MatchState`. Presentation code
//! reads through the query methods (or `state()`), issues commands (see
//! `executor`), and re-queries after each one; the engine never calls back.

use tracing::info;

use crate::cards::{build_deck, Card, Color, Shape};
use crate::core::action::Command;
use crate::core::config::MatchConfig;
use crate::core::error::{ConfigError, EngineResult};
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::GameRng;
use crate::core::state::{Direction, MatchState, Phase};

use super::terminal::{deck_exhaustion, GameOutcome};
use super::top::EffectiveTop;
use super::validator;

/// A running match of Elements.
#[derive(Clone, Debug)]
pub struct ElementsGame {
    config: MatchConfig,
    state: MatchState,
}

impl ElementsGame {
    /// Start a match: shuffle, deal, flip the start card, pick the first
    /// seat.
    ///
    /// Uses `config.seed` when set, otherwise a seed from the operating
    /// system.
    ///
    /// ```
    /// use elements_engine::{ElementsGame, MatchConfig};
    ///
    /// let game = ElementsGame::new(MatchConfig::new(3).with_seed(1)).unwrap();
    /// assert_eq!(game.hand_counts().values().copied().collect::<Vec<_>>(), vec![8, 8, 8]);
    /// assert_eq!(game.state().deck().len(), 80 - 3 * 8 - 1);
    /// ```
    pub fn new(config: MatchConfig) -> EngineResult<Self> {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_rng(config, &rng)
    }

    /// Start a match drawing all randomness from `rng`.
    ///
    /// The shuffle and the seat draw use separate streams of `rng`.
    pub fn with_rng(config: MatchConfig, rng: &GameRng) -> EngineResult<Self> {
        config.validate()?;

        let player_count = config.player_count;
        let mut deck = build_deck(&mut rng.for_context("shuffle"));

        // Deal in pop order: each player takes `hand_size` cards off the end.
        let hands: Vec<Vec<Card>> = (0..player_count)
            .map(|_| {
                let dealt = deck.split_off(deck.len() - config.hand_size);
                dealt.into_iter().rev().collect()
            })
            .collect();

        // An Elements start card stays unresolved and accepts any first play.
        let discard: Vec<Card> = deck.pop().into_iter().collect();

        let seat = rng.for_context("seat").gen_range_usize(0..player_count);
        let state = MatchState::arrange(hands, deck, discard, PlayerId::new(seat as u8));

        info!(
            players = player_count,
            seed = rng.seed(),
            first = %state.current_player(),
            start_card = ?state.top().map(ToString::to_string),
            "match started"
        );

        let mut game = Self { config, state };
        if let Some(outcome) = deck_exhaustion(&game.state) {
            game.finish(outcome);
        }
        Ok(game)
    }

    /// Resume play on an arranged table.
    ///
    /// Only the rule settings of `config` apply (draw count); the table
    /// itself comes from `state`. `config` must pass `validate` and name the
    /// same number of seats as the table.
    pub fn from_state(config: MatchConfig, state: MatchState) -> EngineResult<Self> {
        config.validate()?;
        if config.player_count != state.player_count() {
            return Err(ConfigError::SeatMismatch {
                configured: config.player_count,
                seated: state.player_count(),
            }
            .into());
        }
        Ok(Self { config, state })
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Read-only view of the whole match.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    // === Queries ===

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player()
    }

    #[must_use]
    pub fn current_hand(&self) -> &[Card] {
        self.state.current_hand()
    }

    #[must_use]
    pub fn effective_top(&self) -> EffectiveTop {
        self.state.effective_top()
    }

    /// Color and shape forced this turn, for a "must play" hint.
    #[must_use]
    pub fn forced(&self) -> (Option<Color>, Option<Shape>) {
        self.state.forced()
    }

    #[must_use]
    pub fn hand_counts(&self) -> PlayerMap<usize> {
        self.state.hand_counts()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.state.direction()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.state.outcome()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// An Elements card is waiting for its color and shape.
    #[must_use]
    pub fn awaiting_choice(&self) -> bool {
        matches!(self.state.phase(), Phase::ChoosingElements)
    }

    #[must_use]
    pub fn is_valid_move(&self, index: usize) -> bool {
        matches!(self.state.phase(), Phase::Playing) && validator::is_valid_move(&self.state, index)
    }

    /// Hand positions the current player may play right now.
    #[must_use]
    pub fn playable_indices(&self) -> Vec<usize> {
        match self.state.phase() {
            Phase::Playing => validator::playable_indices(&self.state),
            _ => Vec::new(),
        }
    }

    /// Every command the engine would accept right now.
    #[must_use]
    pub fn legal_commands(&self) -> Vec<Command> {
        match self.state.phase() {
            Phase::Over { .. } => Vec::new(),
            Phase::ChoosingElements => Color::ALL
                .into_iter()
                .flat_map(|color| {
                    Shape::ALL
                        .into_iter()
                        .map(move |shape| Command::ResolveElements { color, shape })
                })
                .collect(),
            Phase::Playing => {
                let mut commands: Vec<Command> = validator::playable_indices(&self.state)
                    .into_iter()
                    .map(|index| Command::Play { index })
                    .collect();
                commands.push(Command::Draw);
                if self.state.lock().cards_played() > 0 {
                    commands.push(Command::EndTurn);
                }
                commands
            }
        }
    }

    pub(crate) fn finish(&mut self, outcome: GameOutcome) {
        info!(
            reason = ?outcome.reason,
            winners = ?outcome.winners.iter().map(ToString::to_string).collect::<Vec<_>>(),
            turn = self.state.turn_number(),
            "match over"
        );
        self.state.set_phase(Phase::Over { outcome });
    }
}
