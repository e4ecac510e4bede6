//! Core game types: positions, players, workers, board, state, actions, RNG.
//!
//! Everything the rules need to decide legality lives here. Turn sequencing
//! and results are in `rules`; move selection for scripted players is in
//! `policy`.

pub mod position;
pub mod player;
pub mod board;
pub mod worker;
pub mod action;
pub mod rng;
pub mod state;

pub use position::{Direction, Position, BOARD_SIZE};
pub use player::{Player, PlayerId, PlayerKind, PlayerMap, WorkerId};
pub use board::{Board, WorkerPositions, DOME, WINNING_HEIGHT};
pub use worker::{Directions, Worker};
pub use action::Action;
pub use rng::GameRng;
pub use state::GameState;
