//! # santorini
//!
//! Rules engine for the two-player building game Santorini, with scripted
//! opponents and a line-oriented driver.
//!
//! ## Design Principles
//!
//! 1. **Single owner**: `GameState` owns the `Board`. Workers and players
//!    never hold it; every mutation goes through `GameState`.
//!
//! 2. **Probe vs. mutate**: legality checks (`can_move`, `can_build`,
//!    `check_loss`) return booleans. Mutators return `RuleError` when asked
//!    to do something illegal.
//!
//! 3. **Copies for history**: the board is a small `Copy` value, so every
//!    undo snapshot is independent of the live game.
//!
//! ## Modules
//!
//! - `core`: positions, directions, players, workers, board, state, RNG
//! - `rules`: turn sequencing, win/loss results
//! - `policy`: heuristic and random move selection
//! - `history`: undo/redo snapshot log
//! - `cli`: prompt-driven game loop
//! - `config`, `error`, `logging`: ambient plumbing

pub mod core;
pub mod rules;
pub mod policy;
pub mod history;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use crate::core::{
    Action, Board, Direction, GameRng, GameState, Player, PlayerId, PlayerKind, PlayerMap,
    Position, Worker, WorkerId, WorkerPositions,
};

pub use crate::rules::{GameResult, GameStatus, TurnOutcome, WinReason};

pub use crate::policy::{HeuristicPolicy, MovePolicy, RandomPolicy, ScoreBreakdown};

pub use crate::history::{History, Snapshot};

pub use crate::config::AppConfig;

pub use crate::error::{ConfigError, DriverError, HistoryError, RuleError};
