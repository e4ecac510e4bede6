//! Text shown between prompts.

use crate::core::GameState;
use crate::policy::ScoreBreakdown;
use crate::rules::GameResult;

/// `Turn: 3, blue (YZ)`, with the score components appended when enabled.
#[must_use]
pub fn banner(state: &GameState, show_score: bool) -> String {
    let player = state.current();
    let mut line = format!("Turn: {}, {} ({})", state.turn(), player.id(), player.worker_label());
    if show_score {
        let score = ScoreBreakdown::evaluate(state.board(), player.id());
        line.push_str(&format!(", {score}"));
    }
    line
}

#[must_use]
pub fn announcement(result: &GameResult) -> String {
    format!("{} has won", result.winner)
}
