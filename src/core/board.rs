//! The 5x5 building grid and the authoritative worker positions.
//!
//! The board performs no legality checks of its own. `Worker` decides what
//! is legal and then asks the board to record the result.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::player::WorkerId;
use super::position::{Position, BOARD_SIZE};
use crate::error::RuleError;

/// Height of a domed cell. Nothing moves onto or builds on it.
pub const DOME: u8 = 4;

/// Height a worker must stand on to win.
pub const WINNING_HEIGHT: u8 = 3;

const SIZE: usize = BOARD_SIZE as usize;

/// Where each of the four workers stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkerPositions([Position; 4]);

impl WorkerPositions {
    /// The opening layout: A (3,1), B (1,3), Y (1,1), Z (3,3).
    #[must_use]
    pub fn initial() -> Self {
        Self(WorkerId::ALL.map(WorkerId::start_position))
    }

    /// Build from an explicit placement.
    #[must_use]
    pub fn from_fn(placement: impl Fn(WorkerId) -> Position) -> Self {
        Self(WorkerId::ALL.map(placement))
    }

    pub fn set(&mut self, worker: WorkerId, position: Position) {
        self.0[worker.index()] = position;
    }

    /// Iterate over (WorkerId, Position) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (WorkerId, Position)> + '_ {
        WorkerId::ALL.into_iter().zip(self.0.iter().copied())
    }

    /// True if every worker is on the board and no two share a cell.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0.iter().enumerate().all(|(i, p)| {
            p.in_bounds() && self.0[i + 1..].iter().all(|other| other != p)
        })
    }

    /// The worker standing on `position`, if any.
    #[must_use]
    pub fn occupant(&self, position: Position) -> Option<WorkerId> {
        self.iter().find(|&(_, p)| p == position).map(|(w, _)| w)
    }
}

impl Default for WorkerPositions {
    fn default() -> Self {
        Self::initial()
    }
}

impl Index<WorkerId> for WorkerPositions {
    type Output = Position;

    fn index(&self, worker: WorkerId) -> &Self::Output {
        &self.0[worker.index()]
    }
}

/// Building heights plus worker positions.
///
/// Small and `Copy`, so snapshots for undo are plain copies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    heights: [[u8; SIZE]; SIZE],
    workers: WorkerPositions,
}

impl Board {
    /// An empty board with the workers on their starting cells.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heights: [[0; SIZE]; SIZE],
            workers: WorkerPositions::initial(),
        }
    }

    /// Height at `position`.
    pub fn get_height(&self, position: Position) -> Result<u8, RuleError> {
        if !position.in_bounds() {
            return Err(RuleError::OutOfRange {
                row: position.row,
                col: position.col,
            });
        }
        Ok(self.heights[position.row as usize][position.col as usize])
    }

    /// True if some worker's recorded position equals `position`.
    #[must_use]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.workers.occupant(position).is_some()
    }

    #[must_use]
    pub fn occupant(&self, position: Position) -> Option<WorkerId> {
        self.workers.occupant(position)
    }

    /// Add one level at `position`. Off-board positions are ignored.
    ///
    /// Legality (occupancy, dome) is the caller's responsibility.
    pub fn build(&mut self, position: Position) {
        if position.in_bounds() {
            let cell = &mut self.heights[position.row as usize][position.col as usize];
            *cell = cell.saturating_add(1);
        }
    }

    /// Record a worker's new position. Legality is the caller's responsibility.
    pub fn update_worker_position(&mut self, worker: WorkerId, position: Position) {
        self.workers.set(worker, position);
    }

    #[must_use]
    pub fn worker_position(&self, worker: WorkerId) -> Position {
        self.workers[worker]
    }

    #[must_use]
    pub fn worker_positions(&self) -> WorkerPositions {
        self.workers
    }

    pub fn set_worker_positions(&mut self, workers: WorkerPositions) {
        self.workers = workers;
    }

    /// Manhattan distance between two cells. Used for scoring only.
    #[must_use]
    pub fn manhattan_distance(a: Position, b: Position) -> u8 {
        a.manhattan_distance(b)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "+--+--+--+--+--+";
        writeln!(f, "{rule}")?;
        for row in 0..BOARD_SIZE {
            write!(f, "|")?;
            for col in 0..BOARD_SIZE {
                let pos = Position::new(row, col);
                let height = self.heights[row as usize][col as usize];
                match self.occupant(pos) {
                    Some(worker) => write!(f, "{height}{worker}|")?,
                    None => write!(f, "{height} |")?,
                }
            }
            writeln!(f)?;
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_positions_validity() {
        assert!(WorkerPositions::initial().is_valid());

        let mut shared = WorkerPositions::initial();
        shared.set(WorkerId::Z, WorkerId::A.start_position());
        assert!(!shared.is_valid());

        let mut off_board = WorkerPositions::initial();
        off_board.set(WorkerId::B, Position::new(5, 2));
        assert!(!off_board.is_valid());
    }

    #[test]
    fn test_new_board_is_flat() {
        let board = Board::new();
        for pos in Position::all() {
            assert_eq!(board.get_height(pos), Ok(0));
        }
    }

    #[test]
    fn test_get_height_out_of_range() {
        let board = Board::new();
        assert_eq!(
            board.get_height(Position::new(5, 0)),
            Err(RuleError::OutOfRange { row: 5, col: 0 })
        );
        assert_eq!(
            board.get_height(Position::new(0, -1)),
            Err(RuleError::OutOfRange { row: 0, col: -1 })
        );
    }

    #[test]
    fn test_build_increments() {
        let mut board = Board::new();
        let pos = Position::new(2, 1);
        board.build(pos);
        board.build(pos);
        assert_eq!(board.get_height(pos), Ok(2));
        assert_eq!(board.get_height(Position::new(2, 2)), Ok(0));
    }

    #[test]
    fn test_build_off_board_is_ignored() {
        let mut board = Board::new();
        let before = board;
        board.build(Position::new(-1, 2));
        assert_eq!(board, before);
    }

    #[test]
    fn test_initial_occupancy() {
        let board = Board::new();
        assert!(board.is_occupied(Position::new(3, 1)));
        assert!(board.is_occupied(Position::new(1, 3)));
        assert!(board.is_occupied(Position::new(1, 1)));
        assert!(board.is_occupied(Position::new(3, 3)));
        assert!(!board.is_occupied(Position::new(2, 2)));
        assert_eq!(board.occupant(Position::new(1, 1)), Some(WorkerId::Y));
    }

    #[test]
    fn test_update_worker_position() {
        let mut board = Board::new();
        board.update_worker_position(WorkerId::A, Position::new(2, 1));
        assert!(!board.is_occupied(Position::new(3, 1)));
        assert_eq!(board.occupant(Position::new(2, 1)), Some(WorkerId::A));
        assert_eq!(board.worker_position(WorkerId::A), Position::new(2, 1));
    }

    #[test]
    fn test_copy_is_independent() {
        let mut board = Board::new();
        let snapshot = board;
        board.build(Position::new(0, 0));
        board.update_worker_position(WorkerId::Z, Position::new(4, 4));
        assert_eq!(snapshot.get_height(Position::new(0, 0)), Ok(0));
        assert_eq!(snapshot.worker_position(WorkerId::Z), Position::new(3, 3));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.build(Position::new(0, 0));
        let text = board.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "+--+--+--+--+--+");
        assert_eq!(lines[1], "|1 |0 |0 |0 |0 |");
        assert_eq!(lines[3], "|0 |0Y|0 |0B|0 |");
        assert_eq!(lines[7], "|0 |0A|0 |0Z|0 |");
    }

    #[test]
    fn test_board_serde() {
        let mut board = Board::new();
        board.build(Position::new(4, 4));
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }
}
