//! Uniform random player.
//!
//! Two draws per turn: a (worker, move) pair uniformly among the legal
//! pairs, then a build uniformly among the builds legal after that move.
//! A pair that allows many builds is no more likely than one that allows
//! few.

use tracing::debug;

use super::MovePolicy;
use crate::core::{Action, Direction, GameRng, GameState, WorkerId};

/// Picks a legal move, then a legal build, each uniformly.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

/// Every legal (worker, move) pair for the current player.
fn legal_moves(state: &GameState) -> Vec<(WorkerId, Direction)> {
    state
        .current_player()
        .workers()
        .into_iter()
        .flat_map(|w| state.possible_moves(w).into_iter().map(move |d| (w, d)))
        .collect()
}

impl MovePolicy for RandomPolicy {
    fn select_action(&mut self, state: &GameState) -> Option<Action> {
        if state.is_over() {
            return None;
        }
        let moves = legal_moves(state);
        let &(worker, move_dir) = self.rng.choose(&moves)?;

        let mut scratch = state.clone();
        scratch.move_worker(worker, move_dir).ok()?;
        if scratch.check_win().is_some() {
            debug!(%worker, %move_dir, "random winning move");
            return Some(Action::move_only(worker, move_dir));
        }

        let builds = scratch.possible_builds(worker);
        let &build = self.rng.choose(&builds)?;
        let action = Action::new(worker, move_dir, build);
        debug!(
            player = %state.current_player(),
            candidates = moves.len(),
            %action,
            "random choice"
        );
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_choice() {
        let state = GameState::default();
        let mut p1 = RandomPolicy::new(GameRng::new(99));
        let mut p2 = RandomPolicy::new(GameRng::new(99));

        for _ in 0..5 {
            assert_eq!(p1.select_action(&state), p2.select_action(&state));
        }
    }

    #[test]
    fn test_choice_is_legal() {
        let state = GameState::default();
        let legal = crate::rules::legal_actions(&state);
        let mut policy = RandomPolicy::new(GameRng::new(5));
        for _ in 0..50 {
            let action = policy.select_action(&state).unwrap();
            assert!(legal.contains(&action));
        }
    }

    #[test]
    fn test_takes_winning_move_without_build() {
        let mut state = GameState::default();
        let mut board = *state.board();
        for _ in 0..3 {
            board.build(crate::core::Position::new(2, 1));
        }
        state.set_board(board);

        let mut policy = RandomPolicy::new(GameRng::new(8));
        for _ in 0..200 {
            let action = policy.select_action(&state).unwrap();
            if action.worker == WorkerId::A && action.move_dir == Direction::N {
                assert_eq!(action.build_dir, None);
                return;
            }
        }
        panic!("the winning move was never drawn");
    }

    #[test]
    fn test_finished_game_has_no_action() {
        let mut state = GameState::default();
        state.finish(crate::rules::GameResult::trapped(crate::core::PlayerId::Blue));
        let mut policy = RandomPolicy::new(GameRng::new(1));
        assert_eq!(policy.select_action(&state), None);
    }
}
