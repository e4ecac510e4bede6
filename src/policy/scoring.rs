//! Board evaluation for the heuristic player.
//!
//! `total = 3 * height + 2 * center + distance`, always from one player's
//! point of view.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Board, PlayerId, Position};

/// Weight of each component in `total`.
const HEIGHT_WEIGHT: i32 = 3;
const CENTER_WEIGHT: i32 = 2;
const DISTANCE_WEIGHT: i32 = 1;

/// Largest possible sum of two minimum distances on a 5x5 board.
const MAX_DISTANCE_SUM: i32 = 8;

/// Center cell scores 2, the ring around it 1, the edge 0.
const CENTER_WEIGHTS: [[i32; 5]; 5] = [
    [0, 0, 0, 0, 0],
    [0, 1, 1, 1, 0],
    [0, 1, 2, 1, 0],
    [0, 1, 1, 1, 0],
    [0, 0, 0, 0, 0],
];

/// The three components of a player's score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub height: i32,
    pub center: i32,
    pub distance: i32,
}

impl ScoreBreakdown {
    /// Evaluate `board` for `player`.
    #[must_use]
    pub fn evaluate(board: &Board, player: PlayerId) -> Self {
        Self {
            height: height_score(board, player),
            center: center_score(board, player),
            distance: distance_score(board, player),
        }
    }

    #[must_use]
    pub fn total(&self) -> i32 {
        HEIGHT_WEIGHT * self.height + CENTER_WEIGHT * self.center + DISTANCE_WEIGHT * self.distance
    }
}

impl fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.height, self.center, self.distance)
    }
}

fn positions(board: &Board, player: PlayerId) -> impl Iterator<Item = Position> + '_ {
    player
        .workers()
        .into_iter()
        .map(move |w| board.worker_position(w))
}

/// Sum of building heights under the player's workers.
#[must_use]
pub fn height_score(board: &Board, player: PlayerId) -> i32 {
    positions(board, player)
        .map(|p| board.get_height(p).map_or(0, i32::from))
        .sum()
}

/// Sum of center weights at the player's worker positions.
#[must_use]
pub fn center_score(board: &Board, player: PlayerId) -> i32 {
    positions(board, player)
        .filter(|p| p.in_bounds())
        .map(|p| CENTER_WEIGHTS[p.row as usize][p.col as usize])
        .sum()
}

/// `8 - sum over own workers of the distance to the nearest opponent worker`.
#[must_use]
pub fn distance_score(board: &Board, player: PlayerId) -> i32 {
    let nearest: i32 = positions(board, player)
        .map(|own| {
            positions(board, player.opponent())
                .map(|theirs| i32::from(Board::manhattan_distance(own, theirs)))
                .min()
                .unwrap_or(0)
        })
        .sum();
    MAX_DISTANCE_SUM - nearest
}
