#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Candidate elimination strategies.
//!
//! When no unsolved cell is down to a single candidate, the solver runs a
//! round of strategies. Each strategy inspects the current candidates and
//! reports digits that can be struck from pending cells. Strategies only
//! report; the solver applies the eliminations, so a strategy sees the
//! results of the ones run before it in the same round.
//!
//! Provided strategies, in the order a round applies them:
//! - `HiddenSingle`: a digit with only one place left in a house.
//! - `NakedSubset`: `k` cells of a house sharing exactly `k` candidates
//!   (pairs, triples and quads).
//! - `XWing`: a digit confined to the same two columns in two rows, or the
//!   same two rows in two columns.
//! - `XyWing`: a bivalue pivot and two bivalue wings that force a digit out
//!   of every cell seeing both wings.

use crate::sudoku::candidates::Candidates;
use crate::sudoku::layout::Layout;
use clap::ValueEnum;
use itertools::Itertools;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::fmt::Display;

/// Candidates of every cell, `None` once the cell is solved.
pub type Possibilities = [Option<Candidates>];

/// Digits to strike from one pending cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Elimination {
    pub index: usize,
    pub digits: Candidates,
}

/// Largest subset size tried by `NakedSubset`.
const MAX_SUBSET: usize = 4;

pub trait Strategy {
    fn kind(&self) -> StrategyType;

    /// Eliminations justified by the current candidates. May contain
    /// duplicates and digits already gone; applying them is idempotent.
    fn eliminations(&self, layout: &Layout, possible: &Possibilities) -> Vec<Elimination>;
}

fn has(possible: &Possibilities, index: usize, digit: u8) -> bool {
    possible[index].is_some_and(|c| c.contains(digit))
}

#[allow(clippy::cast_possible_truncation)]
fn digits(layout: &Layout) -> impl Iterator<Item = u8> {
    1..=layout.n() as u8
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HiddenSingle;

impl Strategy for HiddenSingle {
    fn kind(&self) -> StrategyType {
        StrategyType::HiddenSingle
    }

    fn eliminations(&self, layout: &Layout, possible: &Possibilities) -> Vec<Elimination> {
        let mut out = Vec::new();
        for house in layout.houses() {
            for digit in digits(layout) {
                let mut spots = house.iter().copied().filter(|&i| has(possible, i, digit));
                let (Some(only), None) = (spots.next(), spots.next()) else {
                    continue;
                };
                if let Some(cands) = possible[only] {
                    let others = cands - Candidates::single(digit);
                    if !others.is_empty() {
                        out.push(Elimination {
                            index: only,
                            digits: others,
                        });
                    }
                }
            }
        }
        out
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NakedSubset;

impl Strategy for NakedSubset {
    fn kind(&self) -> StrategyType {
        StrategyType::NakedSubset
    }

    fn eliminations(&self, layout: &Layout, possible: &Possibilities) -> Vec<Elimination> {
        let mut out = Vec::new();
        for house in layout.houses() {
            let pending = house
                .iter()
                .copied()
                .filter(|&i| possible[i].is_some())
                .collect_vec();

            for k in 2..=MAX_SUBSET {
                // a subset covering every pending cell eliminates nothing
                if pending.len() <= k {
                    break;
                }
                let small = pending
                    .iter()
                    .copied()
                    .filter(|&i| (2..=k).contains(&possible[i].map_or(0, Candidates::len)))
                    .collect_vec();

                for subset in small.iter().copied().combinations(k) {
                    let union = subset
                        .iter()
                        .fold(Candidates::empty(), |acc, &i| acc | possible[i].unwrap_or_default());
                    if union.len() != k {
                        continue;
                    }
                    for &other in &pending {
                        if subset.contains(&other) {
                            continue;
                        }
                        if let Some(cands) = possible[other] {
                            let hit = cands & union;
                            if !hit.is_empty() {
                                out.push(Elimination {
                                    index: other,
                                    digits: hit,
                                });
                            }
                        }
                    }
                }
            }
        }
        out
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XWing;

impl XWing {
    /// Base lines are the houses starting at `base`, cover lines start at
    /// `cover`: rows/columns or columns/rows.
    fn scan(
        layout: &Layout,
        possible: &Possibilities,
        digit: u8,
        base: usize,
        cover: usize,
        out: &mut Vec<Elimination>,
    ) {
        let n = layout.n();
        let mut by_positions: FxHashMap<(usize, usize), SmallVec<[usize; 4]>> =
            FxHashMap::default();

        for line in 0..n {
            let spots: SmallVec<[usize; 3]> = layout
                .house(base + line)
                .iter()
                .enumerate()
                .filter(|&(_, &i)| has(possible, i, digit))
                .map(|(pos, _)| pos)
                .take(3)
                .collect();
            if let [a, b] = spots[..] {
                by_positions.entry((a, b)).or_default().push(line);
            }
        }

        for (&(a, b), lines) in &by_positions {
            for (&first, &second) in lines.iter().tuple_combinations() {
                for pos in [a, b] {
                    for (line, &i) in layout.house(cover + pos).iter().enumerate() {
                        if line == first || line == second {
                            continue;
                        }
                        if has(possible, i, digit) {
                            out.push(Elimination {
                                index: i,
                                digits: Candidates::single(digit),
                            });
                        }
                    }
                }
            }
        }
    }
}

impl Strategy for XWing {
    fn kind(&self) -> StrategyType {
        StrategyType::XWing
    }

    fn eliminations(&self, layout: &Layout, possible: &Possibilities) -> Vec<Elimination> {
        let n = layout.n();
        let mut out = Vec::new();
        for digit in digits(layout) {
            Self::scan(layout, possible, digit, 0, n, &mut out);
            Self::scan(layout, possible, digit, n, 0, &mut out);
        }
        out
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XyWing;

impl Strategy for XyWing {
    fn kind(&self) -> StrategyType {
        StrategyType::XyWing
    }

    fn eliminations(&self, layout: &Layout, possible: &Possibilities) -> Vec<Elimination> {
        let bivalue = |i: usize| possible[i].filter(|c| c.len() == 2);
        let mut out = Vec::new();

        for pivot in 0..layout.cell_count() {
            let Some(pivot_cands) = bivalue(pivot) else {
                continue;
            };
            let Some((a, b)) = pivot_cands.iter().collect_tuple() else {
                continue;
            };

            for &x in layout.peers(pivot) {
                let Some(x_cands) = bivalue(x) else {
                    continue;
                };
                if !x_cands.contains(a) || x_cands.contains(b) {
                    continue;
                }
                let Some(c) = (x_cands - Candidates::single(a)).single_value() else {
                    continue;
                };
                let y_cands = Candidates::single(b) | Candidates::single(c);

                for &y in layout.peers(pivot) {
                    if y == x || possible[y] != Some(y_cands) {
                        continue;
                    }
                    // whichever of a or b the pivot takes, x or y becomes c
                    for &z in layout.peers(x) {
                        if z == pivot || z == y || !layout.sees(z, y) {
                            continue;
                        }
                        if has(possible, z, c) {
                            out.push(Elimination {
                                index: z,
                                digits: Candidates::single(c),
                            });
                        }
                    }
                }
            }
        }
        out
    }
}

/// Possible strategy implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyImpls {
    HiddenSingle(HiddenSingle),
    NakedSubset(NakedSubset),
    XWing(XWing),
    XyWing(XyWing),
}

impl Strategy for StrategyImpls {
    fn kind(&self) -> StrategyType {
        match self {
            Self::HiddenSingle(s) => s.kind(),
            Self::NakedSubset(s) => s.kind(),
            Self::XWing(s) => s.kind(),
            Self::XyWing(s) => s.kind(),
        }
    }

    fn eliminations(&self, layout: &Layout, possible: &Possibilities) -> Vec<Elimination> {
        match self {
            Self::HiddenSingle(s) => s.eliminations(layout, possible),
            Self::NakedSubset(s) => s.eliminations(layout, possible),
            Self::XWing(s) => s.eliminations(layout, possible),
            Self::XyWing(s) => s.eliminations(layout, possible),
        }
    }
}

/// Enum naming each strategy, selectable from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash, PartialOrd, Ord, ValueEnum)]
pub enum StrategyType {
    HiddenSingle,
    NakedSubset,
    XWing,
    XyWing,
}

impl StrategyType {
    /// Every strategy, in the order a round applies them.
    pub const ALL: [Self; 4] = [Self::HiddenSingle, Self::NakedSubset, Self::XWing, Self::XyWing];

    /// Converts the `StrategyType` to a concrete `StrategyImpls`.
    #[must_use]
    pub const fn to_impl(self) -> StrategyImpls {
        match self {
            Self::HiddenSingle => StrategyImpls::HiddenSingle(HiddenSingle),
            Self::NakedSubset => StrategyImpls::NakedSubset(NakedSubset),
            Self::XWing => StrategyImpls::XWing(XWing),
            Self::XyWing => StrategyImpls::XyWing(XyWing),
        }
    }
}

impl Display for StrategyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HiddenSingle => write!(f, "hidden-single"),
            Self::NakedSubset => write!(f, "naked-subset"),
            Self::XWing => write!(f, "x-wing"),
            Self::XyWing => write!(f, "xy-wing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sudoku::board::Size;

    fn open_grid(layout: &Layout) -> Vec<Option<Candidates>> {
        vec![Some(Candidates::full(layout.n())); layout.cell_count()]
    }

    fn set(grid: &mut [Option<Candidates>], index: usize, digits: &[u8]) {
        grid[index] = Some(digits.iter().copied().collect());
    }

    fn indexes(elims: &[Elimination]) -> Vec<usize> {
        elims.iter().map(|e| e.index).sorted().dedup().collect()
    }

    #[test]
    fn test_hidden_single() {
        let layout = Layout::new(Size::Nine);
        let mut grid = open_grid(&layout);
        for i in layout.row_house(0).to_vec() {
            if i != 3 {
                grid[i].as_mut().unwrap().remove(5);
            }
        }

        let elims = HiddenSingle.eliminations(&layout, &grid);
        assert_eq!(
            elims,
            vec![Elimination {
                index: 3,
                digits: Candidates::full(9) - Candidates::single(5),
            }]
        );
    }

    #[test]
    fn test_hidden_single_ignores_solved_cells() {
        let layout = Layout::new(Size::Four);
        let mut grid = open_grid(&layout);
        grid[0] = None;
        assert!(HiddenSingle.eliminations(&layout, &grid).is_empty());
    }

    #[test]
    fn test_naked_pair() {
        let layout = Layout::new(Size::Nine);
        let mut grid = open_grid(&layout);
        set(&mut grid, 0, &[1, 2]);
        set(&mut grid, 1, &[1, 2]);

        let elims = NakedSubset.eliminations(&layout, &grid);
        assert!(elims.iter().all(|e| e.digits == [1, 2].into_iter().collect()));
        assert_eq!(
            indexes(&elims),
            vec![2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 18, 19, 20]
        );
    }

    #[test]
    fn test_naked_triple_with_partial_cells() {
        let layout = Layout::new(Size::Nine);
        let mut grid = open_grid(&layout);
        // {1,2} {2,3} {1,3} in column 0, rows 0, 4 and 8
        set(&mut grid, 0, &[1, 2]);
        set(&mut grid, 36, &[2, 3]);
        set(&mut grid, 72, &[1, 3]);

        let elims = NakedSubset.eliminations(&layout, &grid);
        let column: Vec<usize> = layout
            .column_house(0)
            .iter()
            .copied()
            .filter(|i| ![0, 36, 72].contains(i))
            .collect();
        let found = indexes(&elims);
        for i in column {
            assert!(found.contains(&i), "cell {i} not cleared");
        }
        assert!(elims.iter().all(|e| e.digits.is_subset([1, 2, 3].into_iter().collect())));
        assert!(!found.contains(&0));
    }

    #[test]
    fn test_x_wing_rows() {
        let layout = Layout::new(Size::Nine);
        let mut grid = open_grid(&layout);
        for row in [1, 5] {
            for col in 0..9 {
                if col != 2 && col != 6 {
                    grid[layout.to_index(row, col)].as_mut().unwrap().remove(7);
                }
            }
        }

        let elims = XWing.eliminations(&layout, &grid);
        assert!(elims.iter().all(|e| e.digits == Candidates::single(7)));
        let expected: Vec<usize> = (0..9)
            .filter(|r| *r != 1 && *r != 5)
            .flat_map(|r| [layout.to_index(r, 2), layout.to_index(r, 6)])
            .sorted()
            .collect();
        assert_eq!(indexes(&elims), expected);
        assert_eq!(elims.len(), 14);
    }

    #[test]
    fn test_x_wing_columns() {
        let layout = Layout::new(Size::Nine);
        let mut grid = open_grid(&layout);
        for col in [1, 5] {
            for row in 0..9 {
                if row != 2 && row != 6 {
                    grid[layout.to_index(row, col)].as_mut().unwrap().remove(4);
                }
            }
        }

        let elims = XWing.eliminations(&layout, &grid);
        assert!(elims.iter().all(|e| e.digits == Candidates::single(4)));
        let expected: Vec<usize> = (0..9)
            .filter(|c| *c != 1 && *c != 5)
            .flat_map(|c| [layout.to_index(2, c), layout.to_index(6, c)])
            .sorted()
            .collect();
        assert_eq!(indexes(&elims), expected);
        assert_eq!(elims.len(), 14);
    }

    #[test]
    fn test_x_wing_needs_matching_columns() {
        let layout = Layout::new(Size::Nine);
        let mut grid = open_grid(&layout);
        for (row, keep) in [(1, [2, 6]), (5, [2, 7])] {
            for col in 0..9 {
                if !keep.contains(&col) {
                    grid[layout.to_index(row, col)].as_mut().unwrap().remove(7);
                }
            }
        }
        assert!(XWing.eliminations(&layout, &grid).is_empty());
    }

    #[test]
    fn test_xy_wing() {
        let layout = Layout::new(Size::Nine);
        let mut grid = open_grid(&layout);
        set(&mut grid, 0, &[1, 2]);
        set(&mut grid, 4, &[1, 3]);
        set(&mut grid, 36, &[2, 3]);

        let elims = XyWing.eliminations(&layout, &grid);
        assert_eq!(
            elims,
            vec![Elimination {
                index: 40,
                digits: Candidates::single(3),
            }]
        );
    }

    #[test]
    fn test_type_round_trip() {
        for kind in StrategyType::ALL {
            assert_eq!(kind.to_impl().kind(), kind);
            assert_eq!(StrategyType::from_str(&kind.to_string(), false), Ok(kind));
        }
    }
}
