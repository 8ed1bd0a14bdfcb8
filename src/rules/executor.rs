//! Turn executor: the commands that change a match.
//!
//! Each command checks everything it needs before touching the state, so a
//! rejected command leaves the match exactly as it was.

use tracing::{debug, info};

use crate::cards::{Color, Shape};
use crate::core::action::Command;
use crate::core::error::{EngineResult, IllegalCommand};
use crate::core::state::Phase;

use super::engine::ElementsGame;
use super::lock::infer_lock;
use super::terminal::{deck_exhaustion, GameOutcome};
use super::validator::check_move;

impl ElementsGame {
    /// Dispatch any player command.
    pub fn apply(&mut self, command: Command) -> EngineResult<()> {
        match command {
            Command::Play { index } => self.play_card(index),
            Command::Draw => self.draw_cards(),
            Command::ResolveElements { color, shape } => self.resolve_elements(color, shape),
            Command::EndTurn => self.end_turn(),
        }
    }

    /// Play the card at `index` of the current hand.
    ///
    /// An Elements card puts the match into the choosing phase. Any other
    /// card may lock the turn's color or shape. Playing the last card wins.
    pub fn play_card(&mut self, index: usize) -> EngineResult<()> {
        self.ensure_playing()?;

        let player = self.current_player();
        let previous_top = self.effective_top();
        if let Err(reason) = check_move(self.state(), index) {
            debug!(%player, index, %reason, "move rejected");
            return Err(reason.into());
        }

        let state = self.state_mut();
        let played = state.discard_from_hand(index).clone();
        state.lock_mut().record_play();
        state.record(player, Command::Play { index });
        debug!(%player, card = %played, "card played");

        if played.is_elements() {
            state.set_phase(Phase::ChoosingElements);
            return Ok(());
        }

        let discard = state.discard();
        let beneath = discard.len().checked_sub(2).and_then(|i| discard.get(i));
        let (color, shape) = infer_lock(state.lock(), &previous_top, &played, beneath);

        let lock = state.lock_mut();
        if let Some(color) = color {
            if lock.lock_color(color) {
                debug!(%player, %color, "turn locked to color");
            }
        }
        if let Some(shape) = shape {
            if lock.lock_shape(shape) {
                debug!(%player, %shape, "turn locked to shape");
            }
        }

        if state.current_hand().is_empty() {
            self.finish(GameOutcome::empty_hand(player));
        }
        Ok(())
    }

    /// Choose the color and shape of the Elements card just played, then end
    /// the turn.
    pub fn resolve_elements(&mut self, color: Color, shape: Shape) -> EngineResult<()> {
        match self.state().phase() {
            Phase::ChoosingElements => {}
            Phase::Playing => return Err(IllegalCommand::NoPendingChoice.into()),
            Phase::Over { .. } => return Err(IllegalCommand::GameOver.into()),
        }

        let player = self.current_player();
        let state = self.state_mut();
        state
            .top_mut()
            .ok_or(IllegalCommand::NoPendingChoice)?
            .resolve(color, shape)?;

        let lock = state.lock_mut();
        lock.force(color, shape);
        lock.lock_color(color);
        lock.lock_shape(shape);

        state.record(player, Command::ResolveElements { color, shape });
        state.set_phase(Phase::Playing);
        debug!(%player, %color, %shape, "elements resolved");

        self.pass_turn();
        Ok(())
    }

    /// Draw up to the configured number of cards, reverse the direction, and
    /// end the turn. A short deck just yields fewer cards.
    pub fn draw_cards(&mut self) -> EngineResult<()> {
        self.ensure_playing()?;

        let player = self.current_player();
        let count = self.config().draw_count;
        let state = self.state_mut();
        let drawn = state.draw_into_hand(count);
        state.reverse_direction();
        state.record(player, Command::Draw);
        debug!(%player, drawn, direction = ?state.direction(), "cards drawn");

        self.pass_turn();
        Ok(())
    }

    /// End the turn after at least one card has been played.
    pub fn end_turn(&mut self) -> EngineResult<()> {
        self.ensure_playing()?;
        if self.state().lock().cards_played() == 0 {
            return Err(IllegalCommand::NothingPlayed.into());
        }

        let player = self.current_player();
        self.state_mut().record(player, Command::EndTurn);
        self.pass_turn();
        Ok(())
    }

    fn ensure_playing(&self) -> Result<(), IllegalCommand> {
        match self.state().phase() {
            Phase::Playing => Ok(()),
            Phase::ChoosingElements => Err(IllegalCommand::AwaitingElementsChoice),
            Phase::Over { .. } => Err(IllegalCommand::GameOver),
        }
    }

    /// Hand the turn to the next seat; an empty deck at that point ends the
    /// match.
    fn pass_turn(&mut self) {
        self.state_mut().advance_turn();

        if let Some(outcome) = deck_exhaustion(self.state()) {
            self.finish(outcome);
            return;
        }

        info!(
            player = %self.current_player(),
            turn = self.state().turn_number(),
            "turn started"
        );
    }
}
