//! Drawing the board while it is being solved.

use crate::sudoku::board::Board;
use crate::sudoku::error::SolveError;
use crate::sudoku::solver::Placement;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use std::fmt::Write as _;
use std::io::{self, Stdout, Write};

/// What the playback is doing when a frame is drawn.
#[derive(Debug, Clone)]
pub enum Status {
    Running,
    Finished,
    Failed(SolveError),
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub board: &'a Board,
    /// The newest placement, highlighted while the solve runs.
    pub last: Option<&'a Placement>,
    pub steps: usize,
    pub fps: f64,
    pub status: &'a Status,
}

impl Frame<'_> {
    /// Index of the cell to highlight, if any.
    #[must_use]
    pub fn highlight(&self) -> Option<usize> {
        match self.status {
            Status::Running => self.last.map(|p| p.index),
            Status::Finished | Status::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn status_line(&self) -> String {
        match (self.status, self.last) {
            (Status::Running, Some(p)) => {
                format!("step {}: {p}  [{:.0} fps]", self.steps, self.fps)
            }
            (Status::Running, None) => format!("waiting  [{:.0} fps]", self.fps),
            (Status::Finished, _) => format!("solved in {} steps", self.steps),
            (Status::Failed(e), _) => format!("stopped after {} steps: {e}", self.steps),
        }
    }
}

pub trait Renderer {
    /// Draws one frame.
    ///
    /// # Errors
    ///
    /// If writing to the output fails.
    fn draw(&mut self, frame: &Frame<'_>) -> io::Result<()>;
}

/// Draws frames as text. With ANSI enabled the screen is cleared before
/// each frame and the highlighted cell is shown in bold red; without it
/// frames are appended and the cell is wrapped in brackets.
#[derive(Debug)]
pub struct TerminalRenderer<W: Write> {
    out: W,
    ansi: bool,
}

impl TerminalRenderer<Stdout> {
    #[must_use]
    pub fn stdout(ansi: bool) -> Self {
        Self::new(io::stdout(), ansi)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub const fn new(out: W, ansi: bool) -> Self {
        Self { out, ansi }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn grid(&self, frame: &Frame<'_>) -> io::Result<String> {
        let highlight = frame.highlight();
        let board = frame.board;
        let mut text = String::new();
        board.write_grid(&mut text, |out, index, value| {
            if Some(index) != highlight {
                return board.write_cell(out, value);
            }
            let mut cell = String::new();
            board.write_cell(&mut cell, value)?;
            if self.ansi {
                write!(out, "{}", cell.red().bold())
            } else {
                write!(out, "[{cell}]")
            }
        })
        .map_err(|_| io::Error::other("failed to format the grid"))?;
        Ok(text)
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        let grid = self.grid(frame)?;
        if self.ansi {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        writeln!(self.out, "{grid}")?;
        writeln!(self.out, "{}", frame.status_line())?;
        if !self.ansi {
            writeln!(self.out)?;
        }
        self.out.flush()
    }
}
