#![warn(missing_docs)]
//! This crate provides a candidate-elimination Sudoku solver for boards of
//! order 4, 9, 16 and 25, together with a paced, step-by-step playback of
//! the solve.

/// The `playback` module animates a solve one placement at a time, driven by
/// an async frame clock.
pub mod playback;

/// The `sudoku` module implements the board, the parser, the elimination
/// strategies and the solver itself.
pub mod sudoku;
