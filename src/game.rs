//! One game session: a board, the process RNG and the rules for what
//! happens after each command.

use crate::engine::{Board, EngineError, Move};
use crate::input::Command;
use log::debug;
use rand::Rng;

/// Knobs for the move/spawn cycle. Defaults reproduce the classic loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameConfig {
    /// Skip the spawn after a move that changed nothing.
    pub skip_idle_spawn: bool,
}

/// Outcome of a single [`Game::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
    GameOver,
}

impl Step {
    /// Text shown on the final screen, if this step ends the game.
    pub fn farewell(self) -> Option<&'static str> {
        match self {
            Step::Continue => None,
            Step::Quit => Some("quit..."),
            Step::GameOver => Some("game over."),
        }
    }
}

pub struct Game<R: Rng> {
    board: Board,
    rng: R,
    config: GameConfig,
    moves: u64,
}

impl<R: Rng> Game<R> {
    /// Fresh board with two random tiles, drawn from `rng`.
    pub fn new(mut rng: R, config: GameConfig) -> Self {
        let board = Board::new(&mut rng);
        Self::with_board(board, rng, config)
    }

    pub fn with_board(board: Board, rng: R, config: GameConfig) -> Self {
        Self { board, rng, config, moves: 0 }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of directional moves applied so far.
    #[inline]
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Apply one command.
    ///
    /// A move is followed by the fullness check and then a spawn. The board
    /// being full ends the game even if a merge would still be possible.
    pub fn step(&mut self, command: Command) -> Result<Step, EngineError> {
        debug!("command {command:?}");
        match command {
            Command::Ignore => Ok(Step::Continue),
            Command::Quit => Ok(Step::Quit),
            Command::Move(dir) => self.apply_move(dir),
        }
    }

    fn apply_move(&mut self, dir: Move) -> Result<Step, EngineError> {
        let summary = self.board.shift(dir);
        self.moves += 1;
        debug!("shift {dir}: {} merge(s), changed={}", summary.merges, summary.changed);
        if self.board.is_full() {
            return Ok(Step::GameOver);
        }
        if self.config.skip_idle_spawn && !summary.changed {
            return Ok(Step::Continue);
        }
        self.board.spawn(&mut self.rng)?;
        Ok(Step::Continue)
    }
}
