#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! This module provides functionality for solving Sudoku puzzles by
//! candidate elimination.

/// The grid and its size.
pub mod board;

/// Bitsets of candidate digits.
pub mod candidates;

/// Puzzle and solve errors.
pub mod error;

/// Precomputed houses and peers for each board size.
pub mod layout;

/// Plain-text puzzle parsing.
pub mod parse;

/// Built-in example puzzles.
pub mod puzzles;

/// The deduction engine and its lazy step iterator.
pub mod solver;

/// Elimination strategies run when no naked single is left.
pub mod strategy;
