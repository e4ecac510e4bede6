//! Line-oriented driver: prompts, rendering, undo/redo and play-again.
//!
//! Generic over its input and output streams so whole sessions can be
//! scripted in tests.

pub mod render;

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::config::AppConfig;
use crate::core::{Action, GameRng, GameState, PlayerId, PlayerMap};
use crate::error::{DriverError, RuleError};
use crate::history::History;
use crate::policy::{self, MovePolicy};
use crate::rules::{self, GameResult, TurnOutcome};

const WORKER_PROMPT: &str = "Select a worker to move";
const MOVE_PROMPT: &str = "Select a direction to move (n, ne, e, se, s, sw, w, nw)";
const BUILD_PROMPT: &str = "Select a direction to build (n, ne, e, se, s, sw, w, nw)";
const HISTORY_PROMPT: &str = "undo, redo, or next";
const AGAIN_PROMPT: &str = "Play again?";

/// Runs games until the user declines another or input ends.
pub struct Driver<R, W> {
    input: R,
    output: W,
    config: AppConfig,
    rng: GameRng,
    games_played: u32,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    #[must_use]
    pub fn new(input: R, output: W, config: AppConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self {
            input,
            output,
            config,
            rng: GameRng::new(seed),
            games_played: 0,
        }
    }

    /// Play until the user answers anything but `yes` to "Play again?".
    pub fn run(&mut self) -> Result<(), DriverError> {
        loop {
            if self.play_game()?.is_none() {
                return Ok(());
            }
            match self.prompt(AGAIN_PROMPT)? {
                Some(answer) if answer == "yes" => continue,
                _ => return Ok(()),
            }
        }
    }

    /// Play one game from the opening. `None` means input ended first.
    pub fn play_game(&mut self) -> Result<Option<GameResult>, DriverError> {
        let state = GameState::new(self.config.white, self.config.blue);
        self.play_from(state)
    }

    /// Play one game starting from `state`, with the player kinds it carries.
    pub fn play_from(&mut self, mut state: GameState) -> Result<Option<GameResult>, DriverError> {
        self.games_played += 1;
        let mut policies: PlayerMap<Option<Box<dyn MovePolicy>>> = PlayerMap::new(|p| {
            let stream = self.rng.for_context(&format!("{p}-{}", self.games_played));
            policy::for_kind(state.player(p).kind(), stream)
        });
        let mut history = History::new();
        history.record(&state);
        info!(
            white = %state.player(PlayerId::White).kind(),
            blue = %state.player(PlayerId::Blue).kind(),
            seed = self.rng.seed(),
            game = self.games_played,
            "new game"
        );

        loop {
            self.show(&state)?;

            if self.config.undo {
                let Some(command) = self.prompt(HISTORY_PROMPT)? else {
                    return Ok(None);
                };
                match command.as_str() {
                    "undo" => {
                        history.undo()?.restore(&mut state);
                        continue;
                    }
                    "redo" => {
                        history.redo()?.restore(&mut state);
                        continue;
                    }
                    "next" => {
                        history.truncate_future()?;
                    }
                    _ => continue,
                }
            }

            if let Some(result) = rules::begin_turn(&mut state) {
                self.finish(&state, &result)?;
                return Ok(Some(result));
            }

            let outcome = match policies[state.current_player()].as_mut() {
                Some(policy) => self.scripted_turn(&mut state, &mut **policy)?,
                None => match self.human_turn(&mut state)? {
                    Some(outcome) => outcome,
                    None => return Ok(None),
                },
            };

            match outcome {
                TurnOutcome::Won(result) => {
                    self.show(&state)?;
                    self.finish(&state, &result)?;
                    return Ok(Some(result));
                }
                TurnOutcome::Continue => history.record(&state),
            }
        }
    }

    fn scripted_turn(
        &mut self,
        state: &mut GameState,
        policy: &mut dyn MovePolicy,
    ) -> Result<TurnOutcome, DriverError> {
        let Some(action) = policy.select_action(state) else {
            // check_loss already ruled this out; treat it the same way
            let result = GameResult::trapped(state.current_player());
            state.finish(result);
            return Ok(TurnOutcome::Won(result));
        };
        let outcome = rules::apply_action(state, &action)?;
        writeln!(self.output, "{action}")?;
        Ok(outcome)
    }

    /// Prompt for worker, move and build in that order, re-asking after
    /// every rejected answer. `None` means input ended.
    fn human_turn(&mut self, state: &mut GameState) -> Result<Option<TurnOutcome>, DriverError> {
        let worker = loop {
            let Some(token) = self.prompt(WORKER_PROMPT)? else {
                return Ok(None);
            };
            match state.check_worker(&token) {
                Ok(worker) => break worker,
                Err(err) => self.reject(&err)?,
            }
        };

        let move_dir = loop {
            let Some(token) = self.prompt(MOVE_PROMPT)? else {
                return Ok(None);
            };
            match state.check_move(worker, &token) {
                Ok(direction) => break direction,
                Err(err) => self.reject(&err)?,
            }
        };

        if let Some(outcome) = rules::settle_move(state) {
            writeln!(self.output, "{}", Action::move_only(worker, move_dir))?;
            return Ok(Some(outcome));
        }

        let build_dir = loop {
            let Some(token) = self.prompt(BUILD_PROMPT)? else {
                return Ok(None);
            };
            match state.check_build(worker, &token) {
                Ok(direction) => break direction,
                Err(err) => self.reject(&err)?,
            }
        };

        let action = Action::new(worker, move_dir, build_dir);
        self.echo_human(state, &action)?;
        state.advance_turn();
        Ok(Some(TurnOutcome::Continue))
    }

    fn echo_human(&mut self, state: &GameState, action: &Action) -> Result<(), DriverError> {
        info!(player = %state.current_player(), turn = state.turn(), %action, "turn played");
        writeln!(self.output, "{action}")?;
        Ok(())
    }

    fn reject(&mut self, err: &RuleError) -> Result<(), DriverError> {
        warn!(%err, "rejected input");
        writeln!(self.output, "{err}")?;
        Ok(())
    }

    fn show(&mut self, state: &GameState) -> Result<(), DriverError> {
        write!(self.output, "{}", state.board())?;
        writeln!(self.output, "{}", render::banner(state, self.config.score))?;
        Ok(())
    }

    fn finish(&mut self, state: &GameState, result: &GameResult) -> Result<(), DriverError> {
        info!(winner = %result.winner, reason = ?result.reason, turn = state.turn(), "game over");
        writeln!(self.output, "{}", render::announcement(result))?;
        Ok(())
    }

    /// Print `message`, read one line. `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>, DriverError> {
        writeln!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Consume the driver and return its output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
