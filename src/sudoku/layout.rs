#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Board geometry: which cells belong to which rows, columns and boxes.
//!
//! Everything here depends only on the board size, so it is computed once
//! per solve and shared by the strategies.

use crate::sudoku::board::Size;
use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt::{Display, Formatter};

/// Peers of a cell. 20 for a 9x9 board, larger boards spill to the heap.
pub type Peers = SmallVec<[usize; 20]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HouseKind {
    Row,
    Column,
    Box,
}

impl Display for HouseKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Row => write!(f, "row"),
            Self::Column => write!(f, "column"),
            Self::Box => write!(f, "box"),
        }
    }
}

/// A house id split into its kind and its 1-based number, for messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct House {
    pub kind: HouseKind,
    pub number: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    size: Size,
    houses: Vec<Vec<usize>>,
    cell_houses: Vec<[usize; 3]>,
    peers: Vec<Peers>,
}

impl Layout {
    #[must_use]
    pub fn new(size: Size) -> Self {
        let n = usize::from(size);
        let b = size.block_size();

        let rows = (0..n).map(|r| (0..n).map(|c| r * n + c).collect_vec());
        let cols = (0..n).map(|c| (0..n).map(|r| r * n + c).collect_vec());
        let boxes = (0..n).map(|k| {
            let (br, bc) = (k / b * b, k % b * b);
            (0..b)
                .cartesian_product(0..b)
                .map(|(r, c)| (br + r) * n + bc + c)
                .collect_vec()
        });
        let houses = rows.chain(cols).chain(boxes).collect_vec();

        let cell_houses = (0..n * n)
            .map(|i| {
                let (r, c) = (i / n, i % n);
                [r, n + c, 2 * n + (r / b) * b + c / b]
            })
            .collect_vec();

        let peers = cell_houses
            .iter()
            .enumerate()
            .map(|(i, hs)| {
                hs.iter()
                    .flat_map(|&h| houses[h].iter().copied())
                    .filter(|&p| p != i)
                    .sorted_unstable()
                    .dedup()
                    .collect::<Peers>()
            })
            .collect_vec();

        Self {
            size,
            houses,
            cell_houses,
            peers,
        }
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
    pub fn cell_count(&self) -> usize {
        self.n() * self.n()
    }

    #[must_use]
    pub fn to_grid(&self, index: usize) -> (usize, usize) {
        (index / self.n(), index % self.n())
    }

    #[must_use]
    pub fn to_index(&self, row: usize, col: usize) -> usize {
        row * self.n() + col
    }

    /// Box coordinates `(box_row, box_col)` of a cell.
    #[must_use]
    pub const fn block_of(&self, row: usize, col: usize) -> (usize, usize) {
        let b = self.size.block_size();
        (row / b, col / b)
    }

    /// All `3n` houses: rows first, then columns, then boxes.
    #[must_use]
    pub fn houses(&self) -> &[Vec<usize>] {
        &self.houses
    }

    #[must_use]
    pub fn house(&self, id: usize) -> &[usize] {
        &self.houses[id]
    }

    #[must_use]
    pub fn row_house(&self, row: usize) -> &[usize] {
        &self.houses[row]
    }

    #[must_use]
    pub fn column_house(&self, col: usize) -> &[usize] {
        &self.houses[self.n() + col]
    }

    /// Row, column and box house ids of a cell.
    #[must_use]
    pub fn houses_of(&self, index: usize) -> [usize; 3] {
        self.cell_houses[index]
    }

    #[must_use]
    pub fn describe(&self, id: usize) -> House {
        let n = self.n();
        let kind = match id / n {
            0 => HouseKind::Row,
            1 => HouseKind::Column,
            _ => HouseKind::Box,
        };
        House {
            kind,
            number: id % n + 1,
        }
    }

    #[must_use]
    pub fn peers(&self, index: usize) -> &[usize] {
        &self.peers[index]
    }

    #[must_use]
    pub fn sees(&self, a: usize, b: usize) -> bool {
        a != b && self.peers[a].binary_search(&b).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peer_counts() {
        let layout = Layout::new(Size::Nine);
        for i in 0..81 {
            assert_eq!(layout.peers(i).len(), 20, "cell {i}");
            assert!(!layout.peers(i).contains(&i));
        }
        let four = Layout::new(Size::Four);
        assert_eq!(four.peers(0).len(), 7);
        let sixteen = Layout::new(Size::Sixteen);
        assert_eq!(sixteen.peers(0).len(), 39);
    }

    #[test]
    fn test_twenty_five() {
        let layout = Layout::new(Size::TwentyFive);
        assert_eq!(layout.cell_count(), 625);
        assert_eq!(layout.houses().len(), 75);
        // 24 in the row, 24 in the column, 16 more in the box
        assert!((0..625).all(|i| layout.peers(i).len() == 64));
        assert_eq!(layout.to_grid(624), (24, 24));
        assert_eq!(layout.block_of(24, 24), (4, 4));
        assert!(layout.sees(0, 4 * 25 + 4));
        assert!(!layout.sees(0, 5 * 25 + 5));
    }

    #[test]
    fn test_houses() {
        let layout = Layout::new(Size::Nine);
        assert_eq!(layout.houses().len(), 27);
        assert_eq!(layout.row_house(1), &[9, 10, 11, 12, 13, 14, 15, 16, 17]);
        assert_eq!(layout.column_house(2), &[2, 11, 20, 29, 38, 47, 56, 65, 74]);
        // box 5 is the middle-right box
        assert_eq!(layout.house(18 + 5), &[33, 34, 35, 42, 43, 44, 51, 52, 53]);
    }

    #[test]
    fn test_houses_of_and_describe() {
        let layout = Layout::new(Size::Nine);
        // row 7, column 5
        let hs = layout.houses_of(68);
        assert_eq!(hs, [7, 9 + 5, 18 + 7]);
        assert_eq!(
            layout.describe(hs[2]),
            House {
                kind: HouseKind::Box,
                number: 8
            }
        );
        assert_eq!(layout.block_of(7, 5), (2, 1));
    }

    #[test]
    fn test_sees() {
        let layout = Layout::new(Size::Nine);
        assert!(layout.sees(0, 8));
        assert!(layout.sees(0, 72));
        assert!(layout.sees(0, 20));
        assert!(!layout.sees(0, 21));
        assert!(!layout.sees(0, 0));
    }

    #[test]
    fn test_grid_roundtrip() {
        let layout = Layout::new(Size::Sixteen);
        assert_eq!(layout.to_grid(17), (1, 1));
        assert_eq!(layout.to_index(1, 1), 17);
    }
}
