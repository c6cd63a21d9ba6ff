use std::path::PathBuf;
use sudoku_solver::playback::error::PlaybackError;
use sudoku_solver::sudoku::error::{PuzzleError, SolveError};
use thiserror::Error;

/// Everything that can end a command early.
#[derive(Error, Debug)]
pub(crate) enum CliError {
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),

    #[error(transparent)]
    Unsolved(#[from] SolveError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),

    #[error("failed to start the async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("provided path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("no example named '{0}' (see the `list` command)")]
    UnknownExample(String),

    #[error("solution breaks the rules or changes a given")]
    VerificationFailed,

    #[error("{unsolved} of {total} puzzles were not solved")]
    Unfinished { unsolved: usize, total: usize },

    #[error("no command provided. Use --help for more information.")]
    NoCommand,
}

impl CliError {
    /// 1 for bad input, 2 for puzzles the engine could not finish.
    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Unsolved(SolveError::Invalid(_)) => 1,
            Self::Unsolved(_) | Self::Unfinished { .. } => 2,
            _ => 1,
        }
    }
}
