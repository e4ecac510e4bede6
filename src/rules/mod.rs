//! Turn sequencing and game results.
//!
//! Legality itself lives on `Worker` and `GameState`; this module strings
//! the checks together in turn order and decides when the game is over.

pub mod engine;

pub use engine::{
    apply_action, begin_turn, legal_actions, settle_move, GameResult, GameStatus, TurnOutcome,
    WinReason,
};
