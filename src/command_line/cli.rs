#![allow(clippy::cast_precision_loss)]

use crate::command_line::error::CliError;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use sudoku_solver::playback::player::{Outcome, PlaybackConfig, play};
use sudoku_solver::playback::render::TerminalRenderer;
use sudoku_solver::sudoku::board::Board;
use sudoku_solver::sudoku::error::SolveError;
use sudoku_solver::sudoku::parse::{parse_sudoku, parse_sudoku_file};
use sudoku_solver::sudoku::puzzles::{self, EXAMPLES, Example};
use sudoku_solver::sudoku::solver::{SolveStats, Solver};
use sudoku_solver::sudoku::strategy::StrategyType;
use tikv_jemalloc_ctl::{epoch, stats};
use tracing::{info, warn};

/// Defines the command-line interface for the sudoku solver application.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(
    name = "sudoku_solver",
    version,
    about = "A step-by-step Sudoku solver"
)]
pub(crate) struct Cli {
    /// An optional path argument. If provided without a subcommand, it's
    /// treated as a puzzle file to solve.
    pub path: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `solve`, `watch`, `demo`).
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Solve a puzzle file.
    Solve {
        /// Path to the puzzle file. See `sudoku::parse` for the format.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve a puzzle given as text, e.g. an 81-character line.
    /// A literal `\n` in the input is read as a line break.
    Text {
        #[arg(short, long)]
        input: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve every `.sudoku` file below a directory.
    Dir {
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Watch the solver fill the grid one cell at a time.
    Watch {
        /// Puzzle file to play back.
        #[arg(long, conflicts_with = "example", required_unless_present = "example")]
        path: Option<PathBuf>,

        /// Name of a built-in example instead of a file.
        #[arg(short, long)]
        example: Option<String>,

        /// Milliseconds between placements.
        #[arg(long, default_value_t = 400)]
        interval_ms: u64,

        /// Frame rate limit of the display.
        #[arg(long, default_value_t = 48, value_parser = clap::value_parser!(u32).range(1..))]
        fps: u32,

        /// Disable colours and screen clearing.
        #[arg(long, default_value_t = false)]
        plain: bool,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve a built-in example, chosen at random unless named.
    Demo {
        /// Seed for the random choice.
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long)]
        name: Option<String>,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// List the built-in examples.
    List,

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Commands {
    pub(crate) const fn common(&self) -> Option<&CommonOptions> {
        match self {
            Self::Solve { common, .. }
            | Self::Text { common, .. }
            | Self::Dir { common, .. }
            | Self::Watch { common, .. }
            | Self::Demo { common, .. } => Some(common),
            Self::List | Self::Completions { .. } => None,
        }
    }
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub(crate) struct CommonOptions {
    /// Enable debug logging of every placement and strategy round.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,

    /// Check that the solution obeys the rules and keeps every given.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub(crate) verify: bool,

    /// Enable printing of performance and problem statistics after solving.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub(crate) stats: bool,

    /// Print every placement as it is made.
    #[arg(short, long, default_value_t = false)]
    pub(crate) print_steps: bool,

    /// Strategies tried when no naked single is left, in order.
    #[arg(long, value_delimiter = ',', default_values_t = StrategyType::ALL)]
    pub(crate) strategies: Vec<StrategyType>,
}

/// Dispatches a parsed command line.
///
/// # Errors
///
/// Whatever the chosen command fails with; see `CliError::exit_code`.
pub(crate) fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        None => {
            let path = cli.path.ok_or(CliError::NoCommand)?;
            solve_sudoku(&path, &cli.common)
        }
        Some(Commands::Solve { path, common }) => solve_sudoku(&path, &common),
        Some(Commands::Text { input, common }) => {
            let time = Instant::now();
            let board = parse_sudoku(&input.replace("\\n", "\n"))?;
            solve_and_report(board, &common, None, time.elapsed())
        }
        Some(Commands::Dir { path, common }) => solve_dir(&path, &common),
        Some(Commands::Watch {
            path,
            example,
            interval_ms,
            fps,
            plain,
            common,
        }) => {
            let board = match (path, example) {
                (Some(path), _) => parse_sudoku_file(path)?,
                (None, Some(name)) => find_example(&name)?.board()?,
                (None, None) => return Err(CliError::NoCommand),
            };
            let config = PlaybackConfig {
                step_interval: Duration::from_millis(interval_ms),
                fps,
            };
            watch(board, config, plain, &common)
        }
        Some(Commands::Demo { seed, name, common }) => {
            let example = match name {
                Some(name) => find_example(&name)?,
                None => puzzles::random(seed),
            };
            println!("Example: {} ({})", example.name, example.description);
            let time = Instant::now();
            let board = example.board()?;
            solve_and_report(board, &common, None, time.elapsed())
        }
        Some(Commands::List) => {
            list_examples();
            Ok(())
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "sudoku_solver", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn find_example(name: &str) -> Result<&'static Example, CliError> {
    puzzles::by_name(name).ok_or_else(|| CliError::UnknownExample(name.to_string()))
}

fn list_examples() {
    for example in EXAMPLES {
        let size = example
            .board()
            .map_or_else(|_| "?".to_string(), |b| format!("{0}x{0}", b.n()));
        println!("{:<14} {size:<7} {}", example.name, example.description);
    }
}

/// Solves a directory of puzzle files.
/// Every `.sudoku` file below `path` is parsed, solved and reported, in
/// file name order.
///
/// # Errors
///
/// If `path` is not a directory or a file fails to parse. Unsolved puzzles
/// do not stop the walk; they are counted and reported at the end.
pub(crate) fn solve_dir(path: &Path, common: &CommonOptions) -> Result<(), CliError> {
    if !path.is_dir() {
        return Err(CliError::NotADirectory(path.to_path_buf()));
    }

    let mut total = 0;
    let mut unsolved = 0;
    for entry in walkdir::WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        let file_path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        if file_path.extension().is_none_or(|ext| ext != "sudoku") {
            eprintln!("Skipping non-sudoku file: {}", file_path.display());
            continue;
        }

        total += 1;
        match solve_sudoku(file_path, common) {
            Ok(()) => {}
            Err(CliError::Unsolved(e @ (SolveError::Stalled { .. } | SolveError::Contradiction { .. }))) => {
                warn!(file = %file_path.display(), "{e}");
                unsolved += 1;
            }
            Err(e) => return Err(e),
        }
    }

    println!("\nSolved {} of {total} puzzles", total - unsolved);
    if unsolved > 0 {
        return Err(CliError::Unfinished { unsolved, total });
    }
    Ok(())
}

/// Solve a puzzle file.
///
/// # Errors
///
/// If the file cannot be read or parsed, or the puzzle is not solved.
pub(crate) fn solve_sudoku(path: &Path, common: &CommonOptions) -> Result<(), CliError> {
    let time = Instant::now();
    let board = parse_sudoku_file(path)?;
    let parse_time = time.elapsed();
    solve_and_report(board, common, Some(path), parse_time)
}

/// Memory in use and resident, in MiB, as jemalloc reports it.
fn memory_usage() -> (f64, f64) {
    let mib = |bytes: usize| bytes as f64 / (1024.0 * 1024.0);
    if epoch::advance().is_err() {
        return (0.0, 0.0);
    }
    let allocated = stats::allocated::read().map_or(0.0, mib);
    let resident = stats::resident::read().map_or(0.0, mib);
    (allocated, resident)
}

/// Checks a finished grid against the puzzle it came from.
///
/// # Errors
///
/// `CliError::VerificationFailed` if a rule is broken or a given changed.
pub(crate) fn verify_solution(puzzle: &Board, solved: &Board) -> Result<(), CliError> {
    let ok = solved.is_complete() && solved.agrees_with(puzzle);
    println!("Verified: {ok:?}");
    if ok {
        Ok(())
    } else {
        Err(CliError::VerificationFailed)
    }
}

/// Solves `board`, then prints the verification, statistics and solution.
///
/// # Errors
///
/// If the givens are invalid, verification fails, or the engine stops
/// before the grid is full.
pub(crate) fn solve_and_report(
    board: Board,
    common: &CommonOptions,
    label: Option<&Path>,
    parse_time: Duration,
) -> Result<(), CliError> {
    if let Some(name) = label {
        println!("Solving: {}", name.display());
    }
    println!("Parsed Sudoku:\n{board}");

    let mut steps = Solver::new(board.clone())?
        .with_strategies(common.strategies.clone())
        .steps();
    let failure = steps.by_ref().find_map(|step| match step {
        Ok(placement) => {
            if common.print_steps {
                println!("{placement}");
            }
            None
        }
        Err(e) => Some(e),
    });
    let (solved, solve_stats) = steps.into_parts();
    let (allocated, resident) = memory_usage();

    if common.verify && failure.is_none() {
        verify_solution(&board, &solved)?;
    }

    if common.stats {
        print_stats(parse_time, &board, &solved, &solve_stats, allocated, resident);
    }

    match failure {
        None => {
            println!("Solution:\n{solved}");
            println!("\nSOLVED");
            Ok(())
        }
        Some(e) => {
            println!("Stopped at:\n{solved}");
            match e {
                SolveError::Contradiction { .. } => println!("\nCONTRADICTION"),
                _ => println!("\nSTALLED"),
            }
            Err(e.into())
        }
    }
}

/// Plays the solve back in the terminal until it ends or Ctrl-C is pressed.
///
/// # Errors
///
/// If the runtime cannot start, drawing fails, or the puzzle is not solved.
pub(crate) fn watch(
    board: Board,
    config: PlaybackConfig,
    plain: bool,
    common: &CommonOptions,
) -> Result<(), CliError> {
    let steps = Solver::new(board)?
        .with_strategies(common.strategies.clone())
        .steps();
    let ansi = !plain && std::io::stdout().is_terminal();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };
    let summary = runtime.block_on(play(steps, TerminalRenderer::stdout(ansi), config, shutdown))?;

    info!(steps = summary.steps, "watch finished");
    match summary.outcome {
        Outcome::Solved => {
            println!("\nSOLVED in {} steps", summary.steps);
            Ok(())
        }
        Outcome::Interrupted => {
            println!("\nInterrupted after {} steps", summary.steps);
            Ok(())
        }
        Outcome::Failed(e) => {
            match e {
                SolveError::Contradiction { .. } => println!("\nCONTRADICTION"),
                _ => println!("\nSTALLED"),
            }
            Err(e.into())
        }
    }
}

/// Helper function to print a single statistic line in a formatted table row.
pub(crate) fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate (value/second).
pub(crate) fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of problem and search statistics.
pub(crate) fn print_stats(
    parse_time: Duration,
    puzzle: &Board,
    solved: &Board,
    s: &SolveStats,
    allocated: f64,
    resident: f64,
) {
    let elapsed_secs = s.elapsed.as_secs_f64();

    println!("\n=======================[ Problem Statistics ]=========================");
    stat_line("Parse time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line("Size", format!("{0}x{0}", puzzle.n()));
    stat_line("Givens", s.givens);
    stat_line("Blanks", puzzle.missing().len());

    println!("========================[ Search Statistics ]========================");
    stat_line_with_rate("Placements", s.placements, elapsed_secs);
    stat_line_with_rate("Requeues", s.requeues, elapsed_secs);
    stat_line("Strategy rounds", s.strategy_rounds);
    for kind in StrategyType::ALL {
        let struck = s.eliminations.get(&kind).copied().unwrap_or_default();
        stat_line_with_rate(&format!("Elim. {kind}"), struck, elapsed_secs);
    }
    stat_line("Cells left", solved.missing().len());
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}
