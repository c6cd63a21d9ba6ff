#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The Sudoku grid itself.
//!
//! A [`Board`] stores one value per cell in row-major order, `0` meaning
//! blank. Boards of order 4, 9, 16 and 25 are supported; the box side is the
//! square root of the order.

use crate::sudoku::candidates::Candidates;
use crate::sudoku::error::{PuzzleError, Result};
use crate::sudoku::layout::Layout;
use bit_vec::BitVec;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Copy, PartialOrd, Ord, Hash)]
pub enum Size {
    Four = 4,
    Nine = 9,
    Sixteen = 16,
    TwentyFive = 25,
}

impl TryFrom<usize> for Size {
    type Error = PuzzleError;

    fn try_from(value: usize) -> Result<Self> {
        match value {
            4 => Ok(Self::Four),
            9 => Ok(Self::Nine),
            16 => Ok(Self::Sixteen),
            25 => Ok(Self::TwentyFive),
            _ => Err(PuzzleError::InvalidSize(value)),
        }
    }
}

impl From<Size> for usize {
    fn from(size: Size) -> Self {
        match size {
            Size::Four => 4,
            Size::Nine => 9,
            Size::Sixteen => 16,
            Size::TwentyFive => 25,
        }
    }
}

impl Size {
    #[must_use]
    pub const fn block_size(self) -> usize {
        match self {
            Self::Four => 2,
            Self::Nine => 3,
            Self::Sixteen => 4,
            Self::TwentyFive => 5,
        }
    }

    /// Infers the size from the total number of cells.
    ///
    /// # Errors
    ///
    /// If `count` is not the square of a supported order.
    pub const fn from_cell_count(count: usize) -> Result<Self> {
        match count {
            16 => Ok(Self::Four),
            81 => Ok(Self::Nine),
            256 => Ok(Self::Sixteen),
            625 => Ok(Self::TwentyFive),
            _ => Err(PuzzleError::InvalidCellCount(count)),
        }
    }

    /// Width of one cell when printed.
    #[must_use]
    pub const fn cell_width(self) -> usize {
        match self {
            Self::Four | Self::Nine => 1,
            Self::Sixteen | Self::TwentyFive => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: Size,
    cells: Vec<u8>,
}

impl Board {
    #[must_use]
    pub fn empty(size: Size) -> Self {
        let n = usize::from(size);
        Self {
            size,
            cells: vec![0; n * n],
        }
    }

    /// Builds a board from row-major cell values.
    ///
    /// # Errors
    ///
    /// If the cell count does not match `size`, or a value is larger than
    /// the board order.
    pub fn new(size: Size, cells: Vec<u8>) -> Result<Self> {
        let n = usize::from(size);
        if cells.len() != n * n {
            return Err(PuzzleError::InvalidCellCount(cells.len()));
        }
        if let Some(i) = cells.iter().position(|&v| usize::from(v) > n) {
            return Err(PuzzleError::ValueOutOfRange {
                row: i / n + 1,
                col: i % n + 1,
                value: usize::from(cells[i]),
                size: n,
            });
        }
        Ok(Self { size, cells })
    }

    /// Builds a board from nested rows, inferring the size.
    ///
    /// # Errors
    ///
    /// If the rows do not form a supported square, or a value is out of range.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let size = Size::try_from(rows.len())?;
        let cells: Vec<u8> = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        Self::new(size, cells)
    }

    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn n(&self) -> usize {
        usize::from(self.size)
    }

    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.n() + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        let n = self.n();
        self.cells[row * n + col] = value;
    }

    #[must_use]
    pub fn value(&self, index: usize) -> u8 {
        self.cells[index]
    }

    pub fn set_value(&mut self, index: usize, value: u8) {
        self.cells[index] = value;
    }

    /// Flat indexes of the blank cells, ascending.
    #[must_use]
    pub fn missing(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, &v)| (v == 0).then_some(i))
            .collect()
    }

    #[must_use]
    pub fn givens(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    pub fn row(&self, row: usize) -> impl Iterator<Item = u8> + '_ {
        let n = self.n();
        self.cells[row * n..(row + 1) * n].iter().copied()
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().skip(col).step_by(self.n()).copied()
    }

    /// Values of the box at box coordinates `(box_row, box_col)`.
    pub fn block(&self, box_row: usize, box_col: usize) -> impl Iterator<Item = u8> + '_ {
        let b = self.size.block_size();
        let n = self.n();
        (box_row * b..(box_row + 1) * b).flat_map(move |r| {
            self.cells[r * n + box_col * b..r * n + (box_col + 1) * b]
                .iter()
                .copied()
        })
    }

    /// Digits that could go at `(row, col)` given the row, column and box.
    /// A filled cell only allows its own value.
    #[must_use]
    pub fn candidates_at(&self, row: usize, col: usize) -> Candidates {
        let value = self.get(row, col);
        if value != 0 {
            return Candidates::single(value);
        }
        let b = self.size.block_size();
        let used: Candidates = self
            .row(row)
            .chain(self.column(col))
            .chain(self.block(row / b, col / b))
            .filter(|&v| v != 0)
            .collect();
        Candidates::full(self.n()) - used
    }

    /// Checks that no digit repeats inside a row, column or box.
    ///
    /// # Errors
    ///
    /// `PuzzleError::DuplicateDigit` naming the first offending house.
    pub fn validate(&self) -> Result<()> {
        let layout = Layout::new(self.size);
        let n = self.n();
        for (id, house) in layout.houses().iter().enumerate() {
            let mut seen = BitVec::from_elem(n + 1, false);
            for &i in house {
                let v = self.cells[i];
                if v == 0 {
                    continue;
                }
                if seen.get(usize::from(v)).unwrap_or(false) {
                    let house = layout.describe(id);
                    return Err(PuzzleError::DuplicateDigit {
                        digit: v,
                        kind: house.kind,
                        number: house.number,
                    });
                }
                seen.set(usize::from(v), true);
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.cells.contains(&0) && self.validate().is_ok()
    }

    /// Whether every given of `puzzle` is still present here.
    #[must_use]
    pub fn agrees_with(&self, puzzle: &Self) -> bool {
        self.size == puzzle.size
            && self
                .cells
                .iter()
                .zip(&puzzle.cells)
                .all(|(&mine, &given)| given == 0 || mine == given)
    }

    /// One-line form: a character per cell for small boards, numbers
    /// separated by spaces otherwise.
    #[must_use]
    pub fn to_line(&self) -> String {
        if self.size.cell_width() == 1 {
            self.cells
                .iter()
                .map(|&v| if v == 0 { '.' } else { char::from(b'0' + v) })
                .collect()
        } else {
            self.cells
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.n())
    }

    /// Renders the grid, calling `cell` to format each value. Used by
    /// `Display` and by the playback renderer.
    ///
    /// # Errors
    ///
    /// If the formatter fails.
    pub fn write_grid<W, F>(&self, out: &mut W, mut cell: F) -> std::fmt::Result
    where
        W: std::fmt::Write,
        F: FnMut(&mut W, usize, u8) -> std::fmt::Result,
    {
        let n = self.n();
        let b = self.size.block_size();
        let segment = b * self.size.cell_width() + (b - 1);

        for row in 0..n {
            if row > 0 && row % b == 0 {
                let rule = (0..b)
                    .map(|k| {
                        let width = if k == 0 || k == b - 1 { segment + 1 } else { segment + 2 };
                        "-".repeat(width)
                    })
                    .collect::<Vec<_>>()
                    .join("+");
                writeln!(out, "{rule}")?;
            }
            for col in 0..n {
                if col > 0 {
                    if col % b == 0 {
                        write!(out, " | ")?;
                    } else {
                        write!(out, " ")?;
                    }
                }
                cell(out, row * n + col, self.get(row, col))?;
            }
            if row + 1 < n {
                writeln!(out)?;
            }
        }
        Ok(())
    }

    /// Plain formatting of a single cell value.
    ///
    /// # Errors
    ///
    /// If the formatter fails.
    pub fn write_cell<W: std::fmt::Write>(&self, out: &mut W, value: u8) -> std::fmt::Result {
        let width = self.size.cell_width();
        if value == 0 {
            write!(out, "{:>width$}", "_")
        } else {
            write!(out, "{value:>width$}")
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut text = String::new();
        self.write_grid(&mut text, |out, _, v| self.write_cell(out, v))?;
        f.write_str(&text)
    }
}

impl<const N: usize> TryFrom<&[[u8; N]; N]> for Board {
    type Error = PuzzleError;

    fn try_from(rows: &[[u8; N]; N]) -> Result<Self> {
        Self::from_rows(rows.as_slice())
    }
}

impl From<Board> for Vec<Vec<u8>> {
    fn from(board: Board) -> Self {
        board.iter().map(<[u8]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sudoku::puzzles::{CLASSIC, CLASSIC_SOLUTION, TWENTY_FIVE};
    use itertools::Itertools;

    #[test]
    fn test_size_conversions() {
        assert_eq!(Size::try_from(9).unwrap(), Size::Nine);
        assert!(Size::try_from(10).is_err());
        assert_eq!(usize::from(Size::Sixteen), 16);
        assert_eq!(Size::from_cell_count(625).unwrap(), Size::TwentyFive);
        assert!(matches!(
            Size::from_cell_count(80),
            Err(PuzzleError::InvalidCellCount(80))
        ));
    }

    #[test]
    fn test_new_rejects_bad_input() {
        assert!(Board::new(Size::Four, vec![0; 15]).is_err());
        let mut cells = vec![0; 16];
        cells[5] = 5;
        match Board::new(Size::Four, cells) {
            Err(PuzzleError::ValueOutOfRange { row, col, value, size }) => {
                assert_eq!((row, col, value, size), (2, 2, 5, 4));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_from_array_checks_values() {
        let board = Board::try_from(&CLASSIC).unwrap();
        assert_eq!(board.size(), Size::Nine);
        assert_eq!(board.get(0, 1), 3);

        let mut rows = [[0u8; 4]; 4];
        rows[1][2] = 7;
        assert!(matches!(
            Board::try_from(&rows),
            Err(PuzzleError::ValueOutOfRange { row: 2, col: 3, value: 7, size: 4 })
        ));
        assert!(matches!(
            Board::try_from(&[[0u8; 5]; 5]),
            Err(PuzzleError::InvalidSize(5))
        ));
    }

    #[test]
    fn test_missing_and_givens() {
        let board = Board::try_from(&CLASSIC).unwrap();
        assert_eq!(board.givens(), 30);
        assert_eq!(board.missing().len(), 51);
        assert_eq!(board.missing()[..3], [2, 3, 5]);
    }

    #[test]
    fn test_lines() {
        let board = Board::try_from(&CLASSIC).unwrap();
        assert_eq!(board.row(0).collect_vec(), vec![5, 3, 0, 0, 7, 0, 0, 0, 0]);
        assert_eq!(board.column(0).collect_vec(), vec![5, 6, 0, 8, 4, 7, 0, 0, 0]);
        assert_eq!(board.block(0, 0).collect_vec(), vec![5, 3, 0, 6, 0, 0, 0, 9, 8]);
        assert_eq!(board.block(2, 2).collect_vec(), vec![2, 8, 0, 0, 0, 5, 0, 7, 9]);
    }

    #[test]
    fn test_candidates_at() {
        let board = Board::try_from(&CLASSIC).unwrap();
        assert_eq!(board.candidates_at(0, 2).iter().collect_vec(), vec![1, 2, 4]);
        assert_eq!(board.candidates_at(0, 0).single_value(), Some(5));
        // row 4 column 4 is only a 5
        assert_eq!(board.candidates_at(4, 4).single_value(), Some(5));
    }

    #[test]
    fn test_validate_reports_duplicate() {
        let mut board = Board::try_from(&CLASSIC).unwrap();
        board.set(0, 2, 5);
        match board.validate() {
            Err(PuzzleError::DuplicateDigit { digit, kind, number }) => {
                assert_eq!(digit, 5);
                assert_eq!(kind, crate::sudoku::layout::HouseKind::Row);
                assert_eq!(number, 1);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_complete_and_agrees() {
        let puzzle = Board::try_from(&CLASSIC).unwrap();
        let solution = Board::try_from(&CLASSIC_SOLUTION).unwrap();
        assert!(solution.is_complete());
        assert!(!puzzle.is_complete());
        assert!(solution.agrees_with(&puzzle));

        let mut wrong = solution;
        wrong.set(0, 0, 4);
        assert!(!wrong.agrees_with(&puzzle));
    }

    #[test]
    fn test_display_nine() {
        let board = Board::try_from(&CLASSIC).unwrap();
        let text = board.to_string();
        let lines = text.lines().collect_vec();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "5 3 _ | _ 7 _ | _ _ _");
        assert_eq!(lines[3], "------+-------+------");
        assert_eq!(lines[10], "_ _ _ | _ 8 _ | _ 7 9");
    }

    #[test]
    fn test_display_sixteen_is_aligned() {
        let board = Board::empty(Size::Sixteen);
        let text = board.to_string();
        let first = text.lines().next().unwrap();
        assert_eq!(first, " _  _  _  _ |  _  _  _  _ |  _  _  _  _ |  _  _  _  _");
        let rule = text.lines().nth(4).unwrap();
        assert_eq!(rule.len(), first.len());
    }

    #[test]
    fn test_display_twenty_five_round_trips() {
        let board = Board::try_from(&TWENTY_FIVE).unwrap();
        let text = board.to_string();
        assert_eq!(text.lines().count(), 25 + 4);
        let first = text.lines().next().unwrap();
        assert!(first.starts_with(" _  2  _  _  _ |  3 14  _  8  _ |"), "{first}");
        assert_eq!(text.lines().nth(5).unwrap().len(), first.len());
        assert_eq!(crate::sudoku::parse::parse_sudoku(&text).unwrap(), board);
    }

    #[test]
    fn test_to_line() {
        let board = Board::try_from(&CLASSIC).unwrap();
        assert!(board.to_line().starts_with("53..7...."));
        assert_eq!(board.to_line().len(), 81);
        let big = Board::empty(Size::Sixteen);
        assert_eq!(big.to_line().split(' ').count(), 256);
    }
}
