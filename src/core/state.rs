//! Game state: the board, both players, and whose turn it is.
//!
//! `GameState` is the only owner of the `Board`. Workers live inside their
//! `Player` and are moved through `GameState` so the board's position map
//! and each worker's cached position change together.
//!
//! ## Validation vs. mutation
//!
//! - `check_worker` validates a selection and never mutates.
//! - `check_move` / `check_build` parse a direction token and then perform
//!   the move or build, failing with the worker's error if it is illegal.
//! - `possible_moves` / `possible_builds` / `check_loss` are pure probes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::board::{Board, WorkerPositions, WINNING_HEIGHT};
use super::player::{Player, PlayerId, PlayerKind, PlayerMap, WorkerId};
use super::position::{Direction, Position};
use super::worker::{Directions, Worker};
use crate::error::RuleError;
use crate::rules::{GameResult, GameStatus};

/// Complete Santorini game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    players: PlayerMap<Player>,
    current: PlayerId,
    /// Turn number (starts at 1).
    turn: u32,
    status: GameStatus,
}

impl GameState {
    /// Start a new game. White moves first.
    #[must_use]
    pub fn new(white: PlayerKind, blue: PlayerKind) -> Self {
        let kinds = PlayerMap::new(|p| match p {
            PlayerId::White => white,
            PlayerId::Blue => blue,
        });
        Self {
            board: Board::new(),
            players: PlayerMap::new(|p| Player::new(p, kinds[p])),
            current: PlayerId::White,
            turn: 1,
            status: GameStatus::InProgress,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn worker_positions(&self) -> WorkerPositions {
        self.board.worker_positions()
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current]
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Won(_))
    }

    /// Any worker, regardless of owner.
    #[must_use]
    pub fn worker(&self, worker: WorkerId) -> &Worker {
        self.players[worker.owner()].piece(worker)
    }

    #[must_use]
    pub fn possible_moves(&self, worker: WorkerId) -> Directions {
        self.worker(worker).possible_moves(&self.board)
    }

    #[must_use]
    pub fn possible_builds(&self, worker: WorkerId) -> Directions {
        self.worker(worker).possible_builds(&self.board)
    }

    // === Rehydration ===

    /// Replace the board, including worker positions.
    pub fn set_board(&mut self, board: Board) {
        debug_assert!(board.worker_positions().is_valid(), "workers off board or stacked");
        self.board = board;
        self.sync_workers();
    }

    /// Replace the worker positions, keeping building heights.
    pub fn set_worker_positions(&mut self, positions: WorkerPositions) {
        debug_assert!(positions.is_valid(), "workers off board or stacked");
        self.board.set_worker_positions(positions);
        self.sync_workers();
    }

    /// Set whose turn it is and the turn number, reopening a finished game.
    pub fn resume_at(&mut self, current: PlayerId, turn: u32) {
        self.current = current;
        self.turn = turn;
        self.status = GameStatus::InProgress;
    }

    fn sync_workers(&mut self) {
        let board = &self.board;
        for (_, player) in self.players.iter_mut() {
            for worker in player.workers_mut() {
                worker.sync(board);
            }
        }
    }

    // === Turn order ===

    /// Hand the turn to the other player. Does not touch the board.
    pub fn switch_player(&mut self) {
        self.current = self.current.opponent();
        debug!(player = %self.current, "switched player");
    }

    /// Increment the turn counter and switch player.
    pub fn advance_turn(&mut self) {
        self.turn += 1;
        self.switch_player();
    }

    /// Record the end of the game.
    pub fn finish(&mut self, result: GameResult) {
        self.status = GameStatus::Won(result);
    }

    // === Win / loss ===

    /// The player with a worker standing on level 3, if any.
    ///
    /// Both players are scanned. Domes (level 4) never win.
    #[must_use]
    pub fn check_win(&self) -> Option<PlayerId> {
        PlayerId::ALL.into_iter().find(|&p| {
            self.players[p]
                .workers()
                .any(|w| self.board.get_height(w.position()) == Ok(WINNING_HEIGHT))
        })
    }

    /// True if the current player has no legal move and no legal build with
    /// either worker. The opponent wins.
    #[must_use]
    pub fn check_loss(&self) -> bool {
        self.current().workers().all(|w| {
            w.possible_moves(&self.board).is_empty() && w.possible_builds(&self.board).is_empty()
        })
    }

    // === Validation and mutation ===

    /// Validate a worker token typed by the acting player.
    pub fn check_worker(&self, token: &str) -> Result<WorkerId, RuleError> {
        let worker: WorkerId = token.parse()?;
        self.select_worker(worker)?;
        Ok(worker)
    }

    /// Ownership and trapped checks for an already-parsed worker id.
    pub fn select_worker(&self, worker: WorkerId) -> Result<(), RuleError> {
        if !self.current().owns(worker) {
            return Err(RuleError::OpponentPiece);
        }
        if self.worker(worker).is_trapped(&self.board) {
            return Err(RuleError::TrappedWorker);
        }
        Ok(())
    }

    /// Parse a direction token and move `worker` that way.
    pub fn check_move(&mut self, worker: WorkerId, token: &str) -> Result<Direction, RuleError> {
        let direction: Direction = token.parse()?;
        self.move_worker(worker, direction)?;
        Ok(direction)
    }

    /// Parse a direction token and build with `worker` that way.
    pub fn check_build(&mut self, worker: WorkerId, token: &str) -> Result<Direction, RuleError> {
        let direction: Direction = token.parse()?;
        self.build(worker, direction)?;
        Ok(direction)
    }

    /// Move one of the current player's workers.
    pub fn move_worker(
        &mut self,
        worker: WorkerId,
        direction: Direction,
    ) -> Result<Position, RuleError> {
        let player = &mut self.players[self.current];
        let piece = player.worker_mut(worker).ok_or(RuleError::OpponentPiece)?;
        piece.move_in(&mut self.board, direction)
    }

    /// Build with one of the current player's workers.
    pub fn build(&mut self, worker: WorkerId, direction: Direction) -> Result<Position, RuleError> {
        let player = &self.players[self.current];
        let piece = player.worker(worker).ok_or(RuleError::OpponentPiece)?;
        piece.build(&mut self.board, direction)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(PlayerKind::Human, PlayerKind::Human)
    }
}
