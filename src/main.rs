//! # sudoku_solver
//!
//! A command-line Sudoku solver that works the way a person does: it keeps
//! candidates for every blank cell, places naked singles, and falls back to
//! hidden singles, naked subsets, X-Wings and XY-Wings when it gets stuck.
//! It never guesses, so a puzzle beyond those strategies is reported as
//! stalled rather than searched.
//!
//! ## Usage
//!
//! ```sh
//! sudoku_solver [OPTIONS] [PATH] [COMMAND]
//! ```
//!
//! -   `PATH` on its own solves that puzzle file.
//! -   `solve --path <file>`: solve a puzzle file.
//! -   `text --input <puzzle>`: solve a puzzle given inline, e.g. an
//!     81-character line with `.` for blanks.
//! -   `dir --path <dir>`: solve every `.sudoku` file below a directory.
//! -   `watch --path <file> | --example <name>`: animate the solve in the
//!     terminal (`--interval-ms`, `--fps`, `--plain`).
//! -   `demo [--name <name>] [--seed <n>]`: solve a built-in example.
//! -   `list`: list the built-in examples.
//! -   `completions <shell>`: print a shell completion script.
//!
//! ### Common Options
//!
//! -   `-d, --debug`: Log every placement and strategy round.
//! -   `--verify <bool>`: Check the solution (default: `true`).
//! -   `--stats <bool>`: Print statistics (default: `true`).
//! -   `-p, --print-steps`: Print each placement.
//! -   `--strategies <list>`: Comma-separated strategies, in order
//!     (default: `hidden-single,naked-subset,x-wing,xy-wing`).
//!
//! Exit status is 1 for unreadable or invalid puzzles and 2 for puzzles the
//! solver could not finish.

use crate::command_line::cli::{Cli, run};
use crate::command_line::logging::init_logger;
use clap::Parser;

mod command_line;

/// Global allocator using `tikv-jemallocator` for performance and memory
/// usage tracking.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    let cli = Cli::parse();

    let debug = cli.common.debug
        || cli
            .command
            .as_ref()
            .and_then(|c| c.common())
            .is_some_and(|c| c.debug);
    init_logger(debug);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
