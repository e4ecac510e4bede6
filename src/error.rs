//! Error types.
//!
//! Rule violations are ordinary values: the driver prints them and asks
//! again, the scripted players simply skip the candidate that produced one.

use std::path::PathBuf;

use crate::core::Direction;

/// A rejected selection, move or build.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// The token does not name any worker.
    #[error("Not a valid worker")]
    InvalidWorker,

    /// The worker belongs to the player who is not acting.
    #[error("That is not your worker")]
    OpponentPiece,

    /// The worker has no legal move in any direction.
    #[error("That worker cannot move")]
    TrappedWorker,

    /// The token is not one of `n, ne, e, se, s, sw, w, nw`.
    #[error("Not a valid direction")]
    InvalidDirError,

    /// Target cell is off the board, occupied, or domed.
    #[error("Cannot move {direction}")]
    MoveError { direction: Direction },

    /// Target cell is off the board, occupied, or domed.
    #[error("Cannot build {direction}")]
    BuildError { direction: Direction },

    #[error("position ({row}, {col}) is off the board")]
    OutOfRange { row: i8, col: i8 },

    /// A move that does not win must be followed by a build.
    #[error("A build direction is required")]
    MissingBuild,

    #[error("The game is already over")]
    GameOver,
}

/// Undo/redo requested before anything was recorded.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("no moves have been recorded")]
    Empty,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("unknown player kind '{0}' (expected human, heuristic, or random)")]
    UnknownPlayerKind(String),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that end a driver session.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("history error: {0}")]
    History(#[from] HistoryError),

    /// A scripted player produced an illegal action.
    #[error("rule error: {0}")]
    Rule(#[from] RuleError),
}
