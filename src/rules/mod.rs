//! Rules of Elements.
//!
//! - `top`: derives the effective top card (shared by validator and executor)
//! - `validator`: pure legality checks
//! - `lock`: which color/shape a play commits the turn to
//! - `executor`: commands that mutate the match
//! - `terminal`: win by empty hand, win by empty deck
//! - `engine`: `ElementsGame`, the owner of a match

pub mod engine;
pub mod executor;
pub mod lock;
pub mod terminal;
pub mod top;
pub mod validator;

pub use engine::ElementsGame;
pub use lock::infer_lock;
pub use terminal::{deck_exhaustion, fewest_cards, EndReason, GameOutcome};
pub use top::{effective_top, EffectiveTop};
pub use validator::{check_move, is_valid_move, playable_indices};
