//! Greedy one-ply heuristic player.
//!
//! Every legal (worker, direction) move is tried on a scratch copy of the
//! state, scored with `ScoreBreakdown::total`, and undone by stepping in the
//! opposite direction. The best move wins with ties going to the first one
//! seen (workers in id order, directions clockwise from north). The build is
//! not scored: directions are shuffled and the first legal one is used.

use tracing::{debug, trace};

use super::scoring::ScoreBreakdown;
use super::MovePolicy;
use crate::core::{Action, Direction, GameRng, GameState, WorkerId};

/// Best move found so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub worker: WorkerId,
    pub direction: Direction,
    pub score: i32,
}

#[derive(Clone, Debug)]
pub struct HeuristicPolicy {
    rng: GameRng,
}

impl HeuristicPolicy {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Score every legal move for the current player and return the best.
    ///
    /// Candidates that fail to apply are skipped. Returns `None` if the
    /// current player cannot move at all.
    #[must_use]
    pub fn best_move(state: &GameState) -> Option<ScoredMove> {
        let player = state.current_player();
        let mut scratch = state.clone();
        let mut best: Option<ScoredMove> = None;

        for worker in player.workers() {
            for direction in Direction::ALL {
                if !scratch.worker(worker).can_move(scratch.board(), direction) {
                    continue;
                }
                if scratch.move_worker(worker, direction).is_err() {
                    continue;
                }
                let score = ScoreBreakdown::evaluate(scratch.board(), player).total();
                trace!(%worker, %direction, score, "scored candidate");

                if scratch.move_worker(worker, direction.opposite()).is_err() {
                    scratch = state.clone();
                }

                if best.map_or(true, |b| score > b.score) {
                    best = Some(ScoredMove {
                        worker,
                        direction,
                        score,
                    });
                }
            }
        }
        best
    }
}

impl MovePolicy for HeuristicPolicy {
    fn select_action(&mut self, state: &GameState) -> Option<Action> {
        if state.is_over() {
            return None;
        }
        let best = Self::best_move(state)?;

        let mut scratch = state.clone();
        scratch.move_worker(best.worker, best.direction).ok()?;
        if scratch.check_win().is_some() {
            debug!(worker = %best.worker, direction = %best.direction, "heuristic winning move");
            return Some(Action::move_only(best.worker, best.direction));
        }

        let mut order = Direction::ALL;
        self.rng.shuffle(&mut order);
        let build = order
            .into_iter()
            .find(|&d| scratch.worker(best.worker).can_build(scratch.board(), d))?;

        debug!(
            worker = %best.worker,
            direction = %best.direction,
            %build,
            score = best.score,
            "heuristic choice"
        );
        Some(Action::new(best.worker, best.direction, build))
    }
}
