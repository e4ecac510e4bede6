//! A complete turn: which worker, where it steps, where it builds.
//!
//! The build is optional only because a move onto level 3 ends the game
//! before the build happens.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::player::WorkerId;
use super::position::Direction;

/// One player's turn.
///
/// ## Example
///
/// ```
/// use santorini::core::{Action, Direction, WorkerId};
///
/// let action = Action::new(WorkerId::A, Direction::N, Direction::S);
/// assert_eq!(action.to_string(), "A,n,s");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub worker: WorkerId,
    pub move_dir: Direction,
    pub build_dir: Option<Direction>,
}

impl Action {
    /// A move followed by a build.
    #[must_use]
    pub fn new(worker: WorkerId, move_dir: Direction, build_dir: Direction) -> Self {
        Self {
            worker,
            move_dir,
            build_dir: Some(build_dir),
        }
    }

    /// A move with no build. Only valid when the move wins.
    #[must_use]
    pub fn move_only(worker: WorkerId, move_dir: Direction) -> Self {
        Self {
            worker,
            move_dir,
            build_dir: None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.worker, self.move_dir)?;
        if let Some(build) = self.build_dir {
            write!(f, ",{build}")?;
        }
        Ok(())
    }
}
