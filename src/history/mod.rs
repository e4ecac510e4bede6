//! Undo/redo log of whole-game snapshots.
//!
//! An append-only arena indexed by a cursor. Snapshots are plain copies of
//! the `Copy` board plus turn bookkeeping, so later play can never reach
//! back into a stored entry. Recording after an undo discards the redo
//! future first.
//!
//! ```
//! use santorini::core::{Action, Direction, GameState, WorkerId};
//! use santorini::history::History;
//! use santorini::rules::apply_action;
//!
//! let mut state = GameState::default();
//! let mut history = History::new();
//! history.record(&state);
//!
//! apply_action(&mut state, &Action::new(WorkerId::A, Direction::N, Direction::S)).unwrap();
//! history.record(&state);
//!
//! let previous = history.undo().unwrap();
//! previous.restore(&mut state);
//! assert_eq!(state.turn(), 1);
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Board, GameState, PlayerId};
use crate::error::HistoryError;

/// Everything needed to put a game back where it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub current: PlayerId,
    pub turn: u32,
}

impl Snapshot {
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        Self {
            board: *state.board(),
            current: state.current_player(),
            turn: state.turn(),
        }
    }

    /// Rehydrate `state` from this snapshot. Players are kept.
    pub fn restore(&self, state: &mut GameState) {
        state.set_board(self.board);
        state.resume_at(self.current, self.turn);
    }
}

/// Snapshot log with an undo/redo cursor.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct History {
    entries: Vector<Snapshot>,
    /// Index of the snapshot matching the live game.
    cursor: usize,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot of `state`, dropping anything that could be redone.
    pub fn record(&mut self, state: &GameState) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push_back(Snapshot::capture(state));
        self.cursor = self.entries.len() - 1;
        debug!(turn = state.turn(), entries = self.entries.len(), "recorded snapshot");
    }

    /// Step back one snapshot. Stays on the first one if already there.
    pub fn undo(&mut self) -> Result<Snapshot, HistoryError> {
        let _ = self.current()?;
        self.cursor = self.cursor.saturating_sub(1);
        self.current()
    }

    /// Step forward one snapshot. Stays on the last one if already there.
    pub fn redo(&mut self) -> Result<Snapshot, HistoryError> {
        let _ = self.current()?;
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
        self.current()
    }

    /// Discard every snapshot after the cursor and return the current one.
    pub fn truncate_future(&mut self) -> Result<Snapshot, HistoryError> {
        let current = self.current()?;
        self.entries.truncate(self.cursor + 1);
        Ok(current)
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> Result<Snapshot, HistoryError> {
        self.entries.get(self.cursor).copied().ok_or(HistoryError::Empty)
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }
}
