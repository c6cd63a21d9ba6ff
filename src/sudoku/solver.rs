#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The deduction engine.
//!
//! Every blank cell starts with the digits its row, column and box allow.
//! Blank cells wait in a FIFO queue. A cell down to one candidate is placed
//! and its digit is removed from all of its peers; any other cell goes to
//! the back of the queue. Once a full pass over the queue places nothing, a
//! round of elimination strategies runs. A round that changes nothing means
//! the puzzle is beyond the engine, and a cell that runs out of candidates
//! means the puzzle has no solution.
//!
//! Placements are produced lazily by [`Steps`], so callers can watch the
//! solve one cell at a time.

use crate::sudoku::board::Board;
use crate::sudoku::candidates::Candidates;
use crate::sudoku::error::{PuzzleError, SolveError};
use crate::sudoku::layout::Layout;
use crate::sudoku::strategy::{Strategy, StrategyImpls, StrategyType};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::fmt::Display;
use std::iter::FusedIterator;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Why a cell received its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    /// Peers ruled out every other digit.
    NakedSingle,
    /// The last candidate eliminated from the cell was struck by this strategy.
    Strategy(StrategyType),
}

impl Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NakedSingle => write!(f, "naked-single"),
            Self::Strategy(kind) => write!(f, "{kind}"),
        }
    }
}

/// One digit written into the grid. `row` and `col` are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub value: u8,
    pub reason: Reason,
}

impl Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "r{}c{} = {} ({})",
            self.row + 1,
            self.col + 1,
            self.value,
            self.reason
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveStats {
    pub givens: usize,
    pub placements: usize,
    /// Times a cell with several candidates went back to the queue.
    pub requeues: usize,
    pub strategy_rounds: usize,
    /// Candidates struck, per strategy.
    pub eliminations: FxHashMap<StrategyType, usize>,
    pub elapsed: Duration,
}

impl SolveStats {
    #[must_use]
    pub fn total_eliminations(&self) -> usize {
        self.eliminations.values().sum()
    }
}

#[derive(Debug, Clone)]
pub struct Solver {
    board: Board,
    strategies: Vec<StrategyImpls>,
}

impl Solver {
    /// Prepares a solve of `board` with every strategy enabled.
    ///
    /// # Errors
    ///
    /// `PuzzleError::DuplicateDigit` if the givens already break a house.
    pub fn new(board: Board) -> Result<Self, PuzzleError> {
        board.validate()?;
        Ok(Self {
            board,
            strategies: StrategyType::ALL.iter().map(|s| s.to_impl()).collect(),
        })
    }

    /// Restricts the strategy rounds to `kinds`, applied in the given order.
    #[must_use]
    pub fn with_strategies(mut self, kinds: Vec<StrategyType>) -> Self {
        self.strategies = kinds.into_iter().map(StrategyType::to_impl).collect();
        self
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn steps(self) -> Steps {
        Steps::new(self.board, self.strategies)
    }
}

/// A solve in progress, yielding one [`Placement`] per step.
///
/// Ends with `None` once the grid is full, or after yielding a single
/// `SolveError`.
#[derive(Debug, Clone)]
pub struct Steps {
    board: Board,
    layout: Layout,
    possible: Vec<Option<Candidates>>,
    struck_by: Vec<Option<StrategyType>>,
    queue: VecDeque<usize>,
    left: usize,
    strategies: Vec<StrategyImpls>,
    stats: SolveStats,
    started: Instant,
    done: bool,
}

impl Steps {
    fn new(board: Board, strategies: Vec<StrategyImpls>) -> Self {
        let layout = Layout::new(board.size());
        let possible = (0..layout.cell_count())
            .map(|i| {
                (board.value(i) == 0).then(|| {
                    let (row, col) = layout.to_grid(i);
                    board.candidates_at(row, col)
                })
            })
            .collect::<Vec<_>>();
        let queue: VecDeque<usize> = board.missing().into();

        let stats = SolveStats {
            givens: board.givens(),
            ..SolveStats::default()
        };
        info!(size = board.n(), givens = stats.givens, blanks = queue.len(), "starting solve");

        Self {
            struck_by: vec![None; possible.len()],
            left: queue.len(),
            layout,
            possible,
            queue,
            strategies,
            stats,
            board,
            started: Instant::now(),
            done: false,
        }
    }

    /// The grid with every placement made so far.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn stats(&self) -> &SolveStats {
        &self.stats
    }

    /// Current candidates per cell, `None` for filled cells.
    #[must_use]
    pub fn possibilities(&self) -> &[Option<Candidates>] {
        &self.possible
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn into_parts(self) -> (Board, SolveStats) {
        (self.board, self.stats)
    }

    fn contradiction(layout: &Layout, index: usize) -> SolveError {
        let (row, col) = layout.to_grid(index);
        SolveError::Contradiction {
            index,
            row: row + 1,
            col: col + 1,
        }
    }

    fn place(&mut self, index: usize, value: u8) -> Result<Placement, SolveError> {
        let (row, col) = self.layout.to_grid(index);
        self.board.set_value(index, value);
        self.possible[index] = None;
        self.stats.placements += 1;
        self.left = self.queue.len();

        let reason = self.struck_by[index].map_or(Reason::NakedSingle, Reason::Strategy);
        debug!(row, col, value, %reason, "placed");

        for &peer in self.layout.peers(index) {
            if let Some(cands) = self.possible[peer].as_mut() {
                if cands.remove(value) && cands.is_empty() {
                    return Err(Self::contradiction(&self.layout, peer));
                }
            }
        }

        Ok(Placement {
            index,
            row,
            col,
            value,
            reason,
        })
    }

    /// Runs every strategy once, each seeing the eliminations of the ones
    /// before it. Returns whether any candidate was struck.
    fn strategy_round(&mut self) -> Result<bool, SolveError> {
        self.stats.strategy_rounds += 1;
        let mut changed = false;

        for strategy in &self.strategies {
            let kind = strategy.kind();
            let mut struck = 0;
            for elim in strategy.eliminations(&self.layout, &self.possible) {
                let Some(cands) = self.possible[elim.index].as_mut() else {
                    continue;
                };
                let hit = *cands & elim.digits;
                if hit.is_empty() {
                    continue;
                }
                *cands -= hit;
                struck += hit.len();
                self.struck_by[elim.index] = Some(kind);
                if cands.is_empty() {
                    return Err(Self::contradiction(&self.layout, elim.index));
                }
            }
            if struck > 0 {
                debug!(strategy = %kind, struck, round = self.stats.strategy_rounds, "eliminated");
                *self.stats.eliminations.entry(kind).or_default() += struck;
                changed = true;
            }
        }
        Ok(changed)
    }

    fn advance(&mut self) -> Option<Result<Placement, SolveError>> {
        while let Some(index) = self.queue.pop_front() {
            let Some(cands) = self.possible[index] else {
                continue;
            };
            if cands.is_empty() {
                return Some(Err(Self::contradiction(&self.layout, index)));
            }
            if let Some(value) = cands.single_value() {
                return Some(self.place(index, value));
            }

            self.queue.push_back(index);
            self.stats.requeues += 1;
            self.left = self.left.saturating_sub(1);
            if self.left > 0 {
                continue;
            }

            match self.strategy_round() {
                Ok(true) => self.left = self.queue.len(),
                Ok(false) => {
                    let remaining = self.queue.len();
                    warn!(remaining, "no strategy makes progress");
                    return Some(Err(SolveError::Stalled { remaining }));
                }
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }
}

impl Iterator for Steps {
    type Item = Result<Placement, SolveError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.advance();
        if !matches!(item, Some(Ok(_))) {
            self.done = true;
            self.stats.elapsed = self.started.elapsed();
            if item.is_none() {
                info!(
                    placements = self.stats.placements,
                    rounds = self.stats.strategy_rounds,
                    "solved"
                );
            }
        }
        item
    }
}

impl FusedIterator for Steps {}

/// Solves `board` to completion.
///
/// # Errors
///
/// `SolveError::Invalid` if the givens break a house, otherwise the error
/// that stopped the engine.
pub fn solve(board: Board) -> Result<(Board, SolveStats), SolveError> {
    let mut steps = Solver::new(board)?.steps();
    steps.by_ref().try_for_each(|step| step.map(drop))?;
    Ok(steps.into_parts())
}

impl Board {
    /// Solves the board in place. On failure the board keeps every
    /// placement made before the engine stopped.
    ///
    /// # Errors
    ///
    /// As [`solve`].
    pub fn solve(&mut self) -> Result<SolveStats, SolveError> {
        let mut steps = Solver::new(self.clone())?.steps();
        let outcome = steps.by_ref().try_for_each(|step| step.map(drop));
        let (board, stats) = steps.into_parts();
        *self = board;
        outcome.map(|()| stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sudoku::board::Size;
    use crate::sudoku::parse::parse_sudoku;
    use crate::sudoku::puzzles::{by_name, CLASSIC, CLASSIC_SOLUTION, SIXTEEN};

    fn example(name: &str) -> Board {
        by_name(name).unwrap().board().unwrap()
    }

    #[test]
    fn test_classic_by_singles() {
        let (solved, stats) = solve(Board::try_from(&CLASSIC).unwrap()).unwrap();
        assert_eq!(solved, Board::try_from(&CLASSIC_SOLUTION).unwrap());
        assert_eq!(stats.givens, 30);
        assert_eq!(stats.placements, 51);
        assert_eq!(stats.strategy_rounds, 0);
        assert_eq!(stats.total_eliminations(), 0);
    }

    #[test]
    fn test_four() {
        let (solved, _) = solve(example("four")).unwrap();
        assert_eq!(solved.to_line(), "1234341221434321");
    }

    #[test]
    fn test_sixteen() {
        let puzzle = Board::try_from(&SIXTEEN).unwrap();
        let (solved, _) = solve(puzzle.clone()).unwrap();
        assert!(solved.is_complete());
        assert!(solved.agrees_with(&puzzle));
    }

    #[test]
    fn test_examples_needing_strategies() {
        for name in ["window", "bottom-heavy", "sparse"] {
            let puzzle = example(name);
            let (solved, stats) = solve(puzzle.clone()).unwrap();
            assert!(solved.is_complete(), "{name}");
            assert!(solved.agrees_with(&puzzle), "{name}");
            assert!(stats.strategy_rounds >= 1, "{name}");
            assert!(stats.total_eliminations() > 0, "{name}");
        }
    }

    #[test]
    fn test_without_strategies_stalls() {
        let mut steps = Solver::new(example("window"))
            .unwrap()
            .with_strategies(vec![])
            .steps();
        let last = steps.by_ref().last().unwrap();
        assert!(matches!(last, Err(SolveError::Stalled { remaining }) if remaining > 0));
        assert_eq!(steps.stats().strategy_rounds, 1);
    }

    #[test]
    fn test_hard_puzzle_stalls_in_place() {
        let mut board = example("arto");
        let original = board.clone();
        let err = board.solve().unwrap_err();
        match err {
            SolveError::Stalled { remaining } => {
                assert_eq!(remaining, board.missing().len());
                assert!(remaining > 0);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(board.agrees_with(&original));
        board.validate().unwrap();
    }

    #[test]
    fn test_contradiction() {
        let line = format!("12345678.........9{}", ".".repeat(63));
        let board = parse_sudoku(&line).unwrap();
        let err = solve(board).unwrap_err();
        assert!(matches!(
            err,
            SolveError::Contradiction {
                index: 8,
                row: 1,
                col: 9
            }
        ));
    }

    #[test]
    fn test_contradiction_from_placement() {
        // r1c3 and r1c4 can both only take 3
        let board = parse_sudoku("12..\n..4.\n....\n....").unwrap();
        let mut steps = Solver::new(board).unwrap().steps();
        assert!(matches!(
            steps.next(),
            Some(Err(SolveError::Contradiction {
                index: 3,
                row: 1,
                col: 4
            }))
        ));
        assert_eq!(steps.board().get(0, 2), 3);
        assert!(steps.next().is_none());
    }

    #[test]
    fn test_contradiction_from_strategy() {
        let mut steps = Solver::new(Board::empty(Size::Four))
            .unwrap()
            .with_strategies(vec![StrategyType::NakedSubset])
            .steps();
        // three cells of row 1 share two digits
        for index in 0..3 {
            steps.possible[index] = Some([1, 2].into_iter().collect());
        }
        assert!(matches!(
            steps.next(),
            Some(Err(SolveError::Contradiction {
                index: 2,
                row: 1,
                col: 3
            }))
        ));
        assert_eq!(steps.stats().strategy_rounds, 1);
        assert_eq!(steps.stats().placements, 0);
    }

    #[test]
    fn test_twenty_five() {
        let puzzle = example("twenty-five");
        assert_eq!(puzzle.size(), Size::TwentyFive);
        let (solved, stats) = solve(puzzle.clone()).unwrap();
        assert!(solved.is_complete());
        assert!(solved.agrees_with(&puzzle));
        solved.validate().unwrap();
        assert_eq!(stats.placements, puzzle.missing().len());
    }

    #[test]
    fn test_invalid_givens_rejected() {
        let board = Board::new(Size::Four, vec![1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0])
            .unwrap();
        assert!(Solver::new(board.clone()).is_err());
        assert!(matches!(solve(board), Err(SolveError::Invalid(_))));
    }

    #[test]
    fn test_steps_are_lazy_and_fused() {
        let puzzle = Board::try_from(&CLASSIC).unwrap();
        let mut steps = Solver::new(puzzle.clone()).unwrap().steps();
        let first = steps.next().unwrap().unwrap();
        assert_eq!(steps.board().givens(), 31);
        assert_eq!(steps.possibilities()[first.index], None);
        assert_eq!(first.reason, Reason::NakedSingle);
        assert_eq!(CLASSIC_SOLUTION[first.row][first.col], first.value);

        let rest: Vec<_> = steps.by_ref().collect::<Result<_, _>>().unwrap();
        assert_eq!(rest.len() + 1, puzzle.missing().len());
        assert!(steps.next().is_none());
        assert_eq!(steps.remaining(), 0);
    }

    #[test]
    fn test_strategy_reasons_reported() {
        let steps = Solver::new(example("sparse")).unwrap().steps();
        let placements: Vec<Placement> = steps.collect::<Result<_, _>>().unwrap();
        assert!(placements
            .iter()
            .any(|p| matches!(p.reason, Reason::Strategy(_))));
    }
}
