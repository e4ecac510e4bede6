//! Move selection for scripted players.
//!
//! Policies are trait-based so the driver can hold either kind behind one
//! interface:
//! - `HeuristicPolicy`: greedy one-ply search over moves, scored by
//!   `ScoreBreakdown`
//! - `RandomPolicy`: uniform over complete legal actions
//!
//! Human players have no policy; the driver prompts for them.

pub mod scoring;
pub mod heuristic;
pub mod random;

pub use heuristic::HeuristicPolicy;
pub use random::RandomPolicy;
pub use scoring::ScoreBreakdown;

use crate::core::{Action, GameRng, GameState, PlayerKind};

/// Chooses the next action for the current player.
pub trait MovePolicy: Send + Sync {
    /// Pick an action without mutating `state`.
    ///
    /// Returns `None` if the current player has no legal move.
    fn select_action(&mut self, state: &GameState) -> Option<Action>;
}

/// The policy for a scripted kind, or `None` for a human.
#[must_use]
pub fn for_kind(kind: PlayerKind, rng: GameRng) -> Option<Box<dyn MovePolicy>> {
    match kind {
        PlayerKind::Human => None,
        PlayerKind::Heuristic => Some(Box::new(HeuristicPolicy::new(rng))),
        PlayerKind::Random => Some(Box::new(RandomPolicy::new(rng))),
    }
}
