//! Worker pieces: direction-relative legality and the move/build mutators.
//!
//! Legality depends only on the board, the worker's position and the
//! direction. Probing (`can_move`, `can_build`) never fails; the mutators
//! return `RuleError` when asked to do something illegal.
//!
//! A cell is a legal target for either action when it is on the board,
//! unoccupied, and below dome height.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::board::{Board, DOME};
use super::player::WorkerId;
use super::position::{Direction, Position};
use crate::error::RuleError;

/// Directions that are currently legal for a worker. Never more than eight.
pub type Directions = SmallVec<[Direction; 8]>;

/// A worker and its cached position.
///
/// The board's position map is authoritative; `move_in` updates both in the
/// same call so neither can be observed out of step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Worker {
    id: WorkerId,
    position: Position,
}

impl Worker {
    #[must_use]
    pub const fn new(id: WorkerId, position: Position) -> Self {
        Self { id, position }
    }

    #[must_use]
    pub fn id(&self) -> WorkerId {
        self.id
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// The legal target cell in `direction`, if there is one.
    fn target(&self, board: &Board, direction: Direction) -> Option<Position> {
        let target = self.position.step(direction)?;
        let open = !board.is_occupied(target)
            && board.get_height(target).map_or(false, |h| h < DOME);
        open.then_some(target)
    }

    /// True if the worker may step in `direction`.
    #[must_use]
    pub fn can_move(&self, board: &Board, direction: Direction) -> bool {
        self.target(board, direction).is_some()
    }

    /// True if the worker may build in `direction`.
    #[must_use]
    pub fn can_build(&self, board: &Board, direction: Direction) -> bool {
        self.target(board, direction).is_some()
    }

    #[must_use]
    pub fn possible_moves(&self, board: &Board) -> Directions {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.can_move(board, d))
            .collect()
    }

    #[must_use]
    pub fn possible_builds(&self, board: &Board) -> Directions {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.can_build(board, d))
            .collect()
    }

    /// True if the worker has no legal move in any direction.
    #[must_use]
    pub fn is_trapped(&self, board: &Board) -> bool {
        !Direction::ALL.into_iter().any(|d| self.can_move(board, d))
    }

    /// Step one cell in `direction`, updating the board's position map.
    ///
    /// Fails with `TrappedWorker` if no direction is legal, otherwise with
    /// `MoveError` if this one is not.
    pub fn move_in(
        &mut self,
        board: &mut Board,
        direction: Direction,
    ) -> Result<Position, RuleError> {
        if self.is_trapped(board) {
            return Err(RuleError::TrappedWorker);
        }
        let target = self
            .target(board, direction)
            .ok_or(RuleError::MoveError { direction })?;

        board.update_worker_position(self.id, target);
        self.position = target;
        debug!(worker = %self.id, %direction, to = %target, "worker moved");
        Ok(target)
    }

    /// Add a level to the neighbouring cell in `direction`.
    pub fn build(&self, board: &mut Board, direction: Direction) -> Result<Position, RuleError> {
        let target = self
            .target(board, direction)
            .ok_or(RuleError::BuildError { direction })?;

        board.build(target);
        debug!(worker = %self.id, %direction, at = %target, "worker built");
        Ok(target)
    }

    /// Re-read the cached position from the board after a bulk restore.
    pub(crate) fn sync(&mut self, board: &Board) {
        self.position = board.worker_position(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worker_on(board: &Board, id: WorkerId) -> Worker {
        Worker::new(id, board.worker_position(id))
    }

    #[test]
    fn test_can_move_open_neighbours() {
        let board = Board::new();
        let a = worker_on(&board, WorkerId::A);
        assert_eq!(a.possible_moves(&board).len(), 8);
    }

    #[test]
    fn test_can_move_rejects_edge() {
        let mut board = Board::new();
        board.update_worker_position(WorkerId::A, Position::new(0, 0));
        let a = worker_on(&board, WorkerId::A);

        assert!(!a.can_move(&board, Direction::N));
        assert!(!a.can_move(&board, Direction::NW));
        assert!(!a.can_move(&board, Direction::W));
        assert!(!a.can_move(&board, Direction::NE));
        assert!(!a.can_move(&board, Direction::SW));
        assert!(a.can_move(&board, Direction::E));
        assert!(a.can_move(&board, Direction::SE));
        assert!(a.can_move(&board, Direction::S));
    }

    #[test]
    fn test_can_move_rejects_occupied() {
        let mut board = Board::new();
        board.update_worker_position(WorkerId::A, Position::new(2, 1));
        let a = worker_on(&board, WorkerId::A);
        // Y sits at (1, 1)
        assert!(!a.can_move(&board, Direction::N));
        assert!(!a.can_build(&board, Direction::N));
    }

    #[test]
    fn test_can_move_rejects_dome() {
        let mut board = Board::new();
        let target = Position::new(2, 1);
        for _ in 0..4 {
            board.build(target);
        }
        let a = worker_on(&board, WorkerId::A);
        assert!(!a.can_move(&board, Direction::N));
        assert!(!a.can_build(&board, Direction::N));
    }

    #[test]
    fn test_can_move_allows_tall_climb() {
        let mut board = Board::new();
        let target = Position::new(2, 1);
        for _ in 0..3 {
            board.build(target);
        }
        let a = worker_on(&board, WorkerId::A);
        assert!(a.can_move(&board, Direction::N));
    }

    #[test]
    fn test_move_updates_board_and_cache() {
        let mut board = Board::new();
        let mut a = worker_on(&board, WorkerId::A);

        let to = a.move_in(&mut board, Direction::S).unwrap();

        assert_eq!(to, Position::new(4, 1));
        assert_eq!(a.position(), to);
        assert_eq!(board.worker_position(WorkerId::A), to);
        assert!(!board.is_occupied(Position::new(3, 1)));
    }

    #[test]
    fn test_move_error_names_direction() {
        let mut board = Board::new();
        board.update_worker_position(WorkerId::A, Position::new(4, 0));
        let mut a = worker_on(&board, WorkerId::A);

        assert_eq!(
            a.move_in(&mut board, Direction::S),
            Err(RuleError::MoveError { direction: Direction::S })
        );
        assert_eq!(a.position(), Position::new(4, 0));
    }

    #[test]
    fn test_move_trapped_worker() {
        let mut board = Board::new();
        board.update_worker_position(WorkerId::A, Position::new(0, 0));
        for pos in [Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)] {
            if !board.is_occupied(pos) {
                for _ in 0..4 {
                    board.build(pos);
                }
            }
        }
        let mut a = worker_on(&board, WorkerId::A);

        assert!(a.is_trapped(&board));
        assert_eq!(a.move_in(&mut board, Direction::E), Err(RuleError::TrappedWorker));
    }

    #[test]
    fn test_build_on_vacated_cell() {
        let mut board = Board::new();
        let mut a = worker_on(&board, WorkerId::A);
        a.move_in(&mut board, Direction::N).unwrap();

        let at = a.build(&mut board, Direction::S).unwrap();

        assert_eq!(at, Position::new(3, 1));
        assert_eq!(board.get_height(at), Ok(1));
    }

    #[test]
    fn test_build_error() {
        let mut board = Board::new();
        let a = worker_on(&board, WorkerId::A);
        board.update_worker_position(WorkerId::Z, Position::new(3, 2));

        assert_eq!(
            a.build(&mut board, Direction::E),
            Err(RuleError::BuildError { direction: Direction::E })
        );
        assert_eq!(board.get_height(Position::new(3, 2)), Ok(0));
    }

    #[test]
    fn test_move_then_opposite_restores() {
        let mut board = Board::new();
        let mut a = worker_on(&board, WorkerId::A);
        let start = a.position();

        let moves = a.possible_moves(&board);
        for d in moves {
            a.move_in(&mut board, d).unwrap();
            a.move_in(&mut board, d.opposite()).unwrap();
            assert_eq!(a.position(), start);
            assert_eq!(board.worker_position(WorkerId::A), start);
        }
    }

    #[test]
    fn test_sync_reads_board() {
        let mut board = Board::new();
        let mut a = worker_on(&board, WorkerId::A);
        board.update_worker_position(WorkerId::A, Position::new(0, 4));
        a.sync(&board);
        assert_eq!(a.position(), Position::new(0, 4));
    }
}
