//! Shared helpers for integration tests: table arrangement and random
//! playouts.

#![allow(dead_code)]

use elements_engine::cards::unshuffled_deck;
use elements_engine::{Card, Color, Command, ElementsGame, GameRng, MatchConfig, MatchState, PlayerId, Shape};

/// Route engine logs to the test harness output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// A card to pull out of the deck when arranging a table.
#[derive(Clone, Copy, Debug)]
pub enum Pick {
    Regular(Color, Shape),
    ColorOnly(Color),
    ShapeOnly(Shape),
    Elements,
}

impl Pick {
    fn matches(self, card: &Card) -> bool {
        match self {
            Pick::Regular(color, shape) => {
                card.kind() == elements_engine::CardKind::Regular && card.pips() == (Some(color), Some(shape))
            }
            Pick::ColorOnly(color) => card.is_single() && card.pips() == (Some(color), None),
            Pick::ShapeOnly(shape) => card.is_single() && card.pips() == (None, Some(shape)),
            Pick::Elements => card.is_elements(),
        }
    }
}

/// Arrange a table that still holds all 80 cards.
///
/// Hands and the discard top are pulled from a fresh deck; `deck_len` cards
/// of what remains form the draw pile and the rest sits beneath the top card.
pub fn arrange(hands: &[&[Pick]], top: Pick, deck_len: usize, current: u8) -> MatchState {
    let mut pool = unshuffled_deck();
    let mut take = |pick: Pick| -> Card {
        let pos = pool
            .iter()
            .position(|card| pick.matches(card))
            .unwrap_or_else(|| panic!("no {pick:?} left in the deck"));
        pool.remove(pos)
    };

    let hands: Vec<Vec<Card>> = hands
        .iter()
        .map(|picks| picks.iter().map(|&pick| take(pick)).collect())
        .collect();
    let top_card = take(top);

    assert!(deck_len <= pool.len(), "only {} cards left for the deck", pool.len());
    let deck = pool.split_off(pool.len() - deck_len);
    let mut discard = pool;
    discard.push(top_card);

    MatchState::arrange(hands, deck, discard, PlayerId::new(current))
}

/// Wrap an arranged table in a two-or-more player game with default rules.
pub fn game_on(state: MatchState) -> ElementsGame {
    let config = MatchConfig::new(state.player_count());
    ElementsGame::from_state(config, state).unwrap_or_else(|err| panic!("bad table: {err}"))
}

/// Pick a uniformly random legal command.
pub fn random_command(game: &ElementsGame, rng: &mut GameRng) -> Option<Command> {
    let commands = game.legal_commands();
    if commands.is_empty() {
        return None;
    }
    Some(commands[rng.gen_range_usize(0..commands.len())])
}

/// Play random legal commands until the game ends or `max_steps` is reached,
/// calling `observe` after every command.
pub fn play_out(
    game: &mut ElementsGame,
    rng: &mut GameRng,
    max_steps: usize,
    mut observe: impl FnMut(&ElementsGame),
) -> usize {
    let mut steps = 0;
    while steps < max_steps {
        let Some(command) = random_command(game, rng) else {
            break;
        };
        game.apply(command)
            .unwrap_or_else(|err| panic!("legal command {command:?} was refused: {err}"));
        observe(game);
        steps += 1;
    }
    steps
}
