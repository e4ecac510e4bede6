//! Results and turn application.
//!
//! A turn runs in a fixed order:
//! 1. `begin_turn`: if the acting player cannot move or build at all, the
//!    opponent wins before anything else happens.
//! 2. `apply_action`: validate the worker, move it, and check for a win.
//!    Standing on level 3 ends the game before the build.
//! 3. Build, advance the turn counter, switch players.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{Action, Direction, GameState, PlayerId};
use crate::error::RuleError;

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// A worker moved onto level 3.
    ReachedTop,
    /// The loser began a turn with no legal move or build.
    OpponentTrapped,
}

/// Result of a completed game. There are no draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    pub reason: WinReason,
}

impl GameResult {
    #[must_use]
    pub fn reached_top(winner: PlayerId) -> Self {
        Self {
            winner,
            reason: WinReason::ReachedTop,
        }
    }

    #[must_use]
    pub fn trapped(loser: PlayerId) -> Self {
        Self {
            winner: loser.opponent(),
            reason: WinReason::OpponentTrapped,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// `InProgress` until someone wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won(GameResult),
}

/// Outcome of a successfully applied action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Move and build done, turn passed to the opponent.
    Continue,
    /// The move reached level 3; no build was made.
    Won(GameResult),
}

/// Loss check for the player about to act.
///
/// Returns the result (and marks the game finished) if that player is
/// trapped. Does nothing on a finished game.
pub fn begin_turn(state: &mut GameState) -> Option<GameResult> {
    if state.is_over() {
        return None;
    }
    if state.check_loss() {
        let result = GameResult::trapped(state.current_player());
        info!(loser = %state.current_player(), winner = %result.winner, "player trapped");
        state.finish(result);
        return Some(result);
    }
    None
}

/// Validate and apply a whole turn.
///
/// On error the state may already reflect the move if only the build was
/// rejected; scripted players never produce such actions, and the human
/// driver uses the step-wise `check_*` methods instead.
pub fn apply_action(state: &mut GameState, action: &Action) -> Result<TurnOutcome, RuleError> {
    if state.is_over() {
        return Err(RuleError::GameOver);
    }
    let player = state.current_player();
    state.select_worker(action.worker)?;
    state.move_worker(action.worker, action.move_dir)?;

    if let Some(outcome) = settle_move(state) {
        return Ok(outcome);
    }

    let build = action.build_dir.ok_or(RuleError::MissingBuild)?;
    state.build(action.worker, build)?;
    info!(%player, turn = state.turn(), %action, "turn played");
    state.advance_turn();
    Ok(TurnOutcome::Continue)
}

/// Win check right after a move. Finishes the game if someone stands on
/// level 3.
pub fn settle_move(state: &mut GameState) -> Option<TurnOutcome> {
    let winner = state.check_win()?;
    let result = GameResult::reached_top(winner);
    info!(%winner, turn = state.turn(), "reached level 3");
    state.finish(result);
    Some(TurnOutcome::Won(result))
}

/// Every complete action available to the current player.
///
/// Winning moves appear once, without a build.
#[must_use]
pub fn legal_actions(state: &GameState) -> Vec<Action> {
    let mut actions = Vec::new();
    if state.is_over() {
        return actions;
    }

    for worker in state.current_player().workers() {
        for move_dir in state.possible_moves(worker) {
            let mut scratch = state.clone();
            if scratch.move_worker(worker, move_dir).is_err() {
                continue;
            }
            if scratch.check_win().is_some() {
                actions.push(Action::move_only(worker, move_dir));
                continue;
            }
            actions.extend(
                scratch
                    .possible_builds(worker)
                    .into_iter()
                    .map(|build: Direction| Action::new(worker, move_dir, build)),
            );
        }
    }
    actions
}
