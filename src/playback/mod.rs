#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Step-by-step playback of a solve.
//!
//! The solver hands out placements one at a time; this module paces them
//! with a frame clock and a timer, and draws each new board state.

/// Async frame clock with an fps estimate.
pub mod clock;

/// Errors raised by the timer and the playback loop.
pub mod error;

/// The producer loop and the render task it feeds.
pub mod player;

/// The `Renderer` trait and a terminal implementation.
pub mod render;

/// Named events fired at fixed intervals of tick time.
pub mod timer;
