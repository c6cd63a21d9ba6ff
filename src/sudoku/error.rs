use crate::sudoku::layout::HouseKind;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Problems with the puzzle itself: reading it, parsing it, or givens that
/// break the rules before solving starts.
#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: unexpected token '{token}'")]
    InvalidToken { line: usize, token: String },

    #[error("unsupported puzzle size: {0} cells (expected 16, 81, 256 or 625)")]
    InvalidCellCount(usize),

    #[error("unsupported board size {0} (expected 4, 9, 16 or 25)")]
    InvalidSize(usize),

    #[error("value {value} at row {row}, column {col} is larger than the board size {size}")]
    ValueOutOfRange {
        row: usize,
        col: usize,
        value: usize,
        size: usize,
    },

    #[error("digit {digit} appears more than once in {kind} {number}")]
    DuplicateDigit {
        digit: u8,
        kind: HouseKind,
        number: usize,
    },
}

/// Reasons the deduction engine stopped before filling the grid.
///
/// Rows and columns are 1-based, as in [`PuzzleError`].
#[derive(Error, Debug, Clone)]
pub enum SolveError {
    #[error("no candidates left for row {row}, column {col}; the puzzle has no solution")]
    Contradiction { index: usize, row: usize, col: usize },

    #[error("no strategy makes progress; {remaining} cells remain unsolved")]
    Stalled { remaining: usize },

    #[error(transparent)]
    Invalid(Arc<PuzzleError>),
}

impl From<PuzzleError> for SolveError {
    fn from(err: PuzzleError) -> Self {
        Self::Invalid(Arc::new(err))
    }
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
