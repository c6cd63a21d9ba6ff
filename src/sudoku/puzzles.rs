//! Built-in example puzzles, used by the `demo`, `list` and `watch`
//! commands and by the tests and benchmarks.

use crate::sudoku::board::Board;
use crate::sudoku::error::Result;
use crate::sudoku::parse::parse_sudoku;

pub const FOUR: [[u8; 4]; 4] = [[1, 0, 0, 4], [0, 4, 0, 0], [2, 0, 0, 3], [0, 0, 2, 0]];

pub const CLASSIC: [[u8; 9]; 9] = [
    [5, 3, 0, 0, 7, 0, 0, 0, 0],
    [6, 0, 0, 1, 9, 5, 0, 0, 0],
    [0, 9, 8, 0, 0, 0, 0, 6, 0],
    [8, 0, 0, 0, 6, 0, 0, 0, 3],
    [4, 0, 0, 8, 0, 3, 0, 0, 1],
    [7, 0, 0, 0, 2, 0, 0, 0, 6],
    [0, 6, 0, 0, 0, 0, 2, 8, 0],
    [0, 0, 0, 4, 1, 9, 0, 0, 5],
    [0, 0, 0, 0, 8, 0, 0, 7, 9],
];

pub const CLASSIC_SOLUTION: [[u8; 9]; 9] = [
    [5, 3, 4, 6, 7, 8, 9, 1, 2],
    [6, 7, 2, 1, 9, 5, 3, 4, 8],
    [1, 9, 8, 3, 4, 2, 5, 6, 7],
    [8, 5, 9, 7, 6, 1, 4, 2, 3],
    [4, 2, 6, 8, 5, 3, 7, 9, 1],
    [7, 1, 3, 9, 2, 4, 8, 5, 6],
    [9, 6, 1, 5, 3, 7, 2, 8, 4],
    [2, 8, 7, 4, 1, 9, 6, 3, 5],
    [3, 4, 5, 2, 8, 6, 1, 7, 9],
];

pub const SIXTEEN: [[u8; 16]; 16] = [
    [0, 11, 0, 0, 0, 2, 3, 14, 0, 0, 9, 12, 0, 0, 0, 16],
    [15, 12, 0, 0, 0, 11, 0, 1, 13, 10, 0, 0, 0, 0, 7, 2],
    [0, 0, 10, 0, 0, 0, 0, 0, 16, 11, 0, 1, 6, 4, 12, 3],
    [0, 16, 14, 1, 0, 4, 0, 6, 0, 3, 0, 15, 0, 8, 0, 0],
    [1, 6, 5, 12, 0, 0, 11, 0, 0, 9, 8, 0, 0, 0, 0, 0],
    [0, 0, 0, 7, 14, 1, 8, 0, 0, 15, 6, 0, 13, 5, 0, 4],
    [4, 15, 8, 0, 9, 13, 0, 0, 0, 0, 7, 16, 3, 0, 0, 0],
    [0, 9, 13, 0, 0, 0, 0, 15, 10, 0, 0, 0, 7, 6, 0, 11],
    [14, 0, 6, 11, 0, 0, 0, 12, 7, 0, 0, 0, 0, 3, 13, 0],
    [0, 0, 0, 5, 8, 14, 0, 0, 0, 0, 13, 11, 0, 1, 2, 6],
    [13, 0, 16, 4, 0, 15, 5, 0, 0, 1, 12, 6, 8, 0, 0, 0],
    [0, 0, 0, 0, 0, 16, 10, 0, 0, 8, 0, 0, 11, 9, 4, 5],
    [0, 0, 11, 0, 1, 0, 14, 0, 5, 0, 3, 0, 15, 7, 16, 0],
    [5, 13, 15, 3, 16, 0, 4, 7, 0, 0, 0, 0, 0, 2, 0, 0],
    [16, 1, 0, 0, 0, 0, 12, 2, 14, 0, 15, 0, 0, 0, 3, 8],
    [9, 0, 0, 0, 13, 5, 0, 0, 8, 6, 16, 0, 0, 0, 10, 0],
];

pub const TWENTY_FIVE: [[u8; 25]; 25] = [
    [
        0, 2, 0, 0, 0, 3, 14, 0, 8, 0, 0, 0, 0, 0, 0, 0, 0, 13, 4, 24, 0, 7, 1, 0, 0,
    ],
    [
        0, 10, 17, 0, 0, 0, 6, 18, 0, 0, 22, 16, 0, 12, 0, 0, 0, 0, 1, 0, 0, 0, 13, 19, 0,
    ],
    [
        0, 15, 24, 13, 7, 0, 0, 0, 4, 0, 10, 0, 0, 3, 14, 0, 18, 0, 0, 0, 0, 22, 2, 6, 0,
    ],
    [
        0, 0, 1, 21, 0, 0, 15, 0, 22, 0, 0, 19, 13, 0, 0, 0, 8, 0, 0, 0, 0, 16, 18, 20, 0,
    ],
    [
        0, 5, 0, 0, 20, 7, 25, 19, 0, 0, 0, 21, 17, 18, 2, 10, 12, 22, 9, 15, 11, 0, 0, 0, 0,
    ],
    [
        11, 0, 0, 0, 22, 8, 0, 24, 7, 1, 5, 0, 0, 0, 13, 16, 17, 25, 23, 2, 4, 0, 6, 0, 19,
    ],
    [
        16, 9, 12, 0, 17, 0, 19, 22, 0, 0, 0, 0, 18, 21, 0, 0, 20, 6, 13, 0, 7, 0, 0, 23, 11,
    ],
    [
        0, 0, 6, 0, 21, 9, 16, 0, 3, 0, 0, 22, 20, 19, 0, 0, 0, 0, 15, 8, 25, 0, 0, 0, 0,
    ],
    [
        0, 0, 23, 5, 0, 2, 0, 0, 11, 17, 8, 0, 0, 0, 16, 12, 9, 0, 0, 21, 0, 3, 10, 0, 0,
    ],
    [
        0, 0, 0, 0, 0, 6, 0, 0, 12, 0, 9, 1, 25, 0, 3, 0, 11, 0, 0, 7, 0, 0, 21, 0, 0,
    ],
    [
        0, 0, 9, 0, 0, 23, 0, 5, 17, 4, 16, 0, 11, 0, 22, 18, 2, 0, 21, 13, 0, 0, 7, 0, 0,
    ],
    [
        4, 6, 0, 0, 5, 0, 0, 2, 0, 0, 0, 18, 21, 24, 0, 0, 19, 3, 0, 12, 23, 0, 0, 17, 0,
    ],
    [
        0, 0, 0, 12, 11, 0, 7, 3, 0, 24, 17, 20, 15, 13, 19, 1, 0, 5, 8, 0, 6, 9, 0, 0, 0,
    ],
    [
        0, 22, 0, 0, 14, 19, 0, 6, 16, 0, 0, 8, 9, 7, 0, 0, 0, 24, 0, 0, 3, 0, 0, 1, 18,
    ],
    [
        0, 0, 21, 0, 0, 25, 13, 0, 20, 8, 12, 0, 14, 0, 10, 9, 16, 15, 0, 6, 0, 0, 4, 0, 0,
    ],
    [
        0, 0, 25, 0, 0, 24, 0, 0, 18, 0, 4, 0, 3, 10, 5, 0, 1, 0, 0, 14, 0, 0, 0, 0, 0,
    ],
    [
        0, 0, 5, 3, 0, 17, 0, 0, 23, 7, 13, 0, 0, 0, 18, 19, 21, 0, 0, 22, 0, 11, 12, 0, 0,
    ],
    [
        0, 0, 0, 0, 18, 10, 8, 0, 0, 0, 0, 25, 23, 2, 0, 0, 5, 0, 16, 11, 9, 0, 3, 0, 0,
    ],
    [
        17, 20, 0, 0, 2, 0, 22, 16, 6, 0, 0, 7, 12, 0, 0, 0, 0, 9, 3, 0, 18, 0, 23, 24, 25,
    ],
    [
        6, 0, 4, 0, 16, 1, 11, 12, 25, 3, 19, 0, 0, 0, 21, 17, 23, 8, 0, 18, 2, 0, 0, 0, 14,
    ],
    [
        0, 0, 0, 0, 4, 14, 24, 11, 19, 23, 21, 17, 16, 8, 0, 0, 0, 1, 2, 9, 13, 0, 0, 5, 0,
    ],
    [
        0, 1, 14, 23, 0, 0, 0, 0, 9, 0, 0, 0, 19, 5, 0, 0, 24, 0, 12, 0, 0, 8, 17, 0, 0,
    ],
    [
        0, 16, 11, 8, 0, 0, 0, 0, 1, 0, 6, 4, 0, 0, 23, 0, 15, 0, 0, 0, 14, 12, 9, 10, 0,
    ],
    [
        0, 21, 3, 0, 0, 0, 17, 0, 0, 0, 0, 15, 0, 25, 20, 0, 0, 4, 10, 0, 0, 0, 16, 11, 0,
    ],
    [
        0, 0, 20, 2, 0, 16, 5, 8, 0, 0, 0, 0, 0, 0, 0, 0, 6, 0, 19, 25, 0, 0, 0, 3, 0,
    ],
];

/// A named puzzle in the one-line text form accepted by [`parse_sudoku`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    pub name: &'static str,
    pub description: &'static str,
    pub line: &'static str,
}

impl Example {
    /// # Errors
    ///
    /// Never for the built-in examples; the signature follows `parse_sudoku`.
    pub fn board(&self) -> Result<Board> {
        parse_sudoku(self.line)
    }
}

pub const EXAMPLES: &[Example] = &[
    Example {
        name: "four",
        description: "4x4 warm-up",
        line: "1..4.4..2..3..2.",
    },
    Example {
        name: "classic",
        description: "naked singles only",
        line: "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79",
    },
    Example {
        name: "symmetric",
        description: "naked singles only",
        line: "2...9...83..2.7..6.67...52.6.21.83.5...5.4...7.59.34.1.24...87.8..7.2..45...4...2",
    },
    Example {
        name: "window",
        description: "needs one strategy round",
        line: "...526.1..679....5..8.3....65......37.3.6.9.29......76....4.7.11....923..2.871...",
    },
    Example {
        name: "bottom-heavy",
        description: "needs one strategy round",
        line: "..38..51...87..93.1..3.5728...2..8498.19.6257...5..163964127385382659471.1.4..692",
    },
    Example {
        name: "sparse",
        description: "needs several strategy rounds",
        line: ".7.53.1.6..2.....7....8.....5...8.....465..3......26.......6...9......4..2.17.3..",
    },
    Example {
        name: "arto",
        description: "beyond these strategies; the solver stalls",
        line: "8..........36......7..9.2...5...7.......457.....1...3...1....68..85...1..9....4..",
    },
    Example {
        name: "sixteen",
        description: "16x16 by singles",
        line: "0 11 0 0 0 2 3 14 0 0 9 12 0 0 0 16 \
               15 12 0 0 0 11 0 1 13 10 0 0 0 0 7 2 \
               0 0 10 0 0 0 0 0 16 11 0 1 6 4 12 3 \
               0 16 14 1 0 4 0 6 0 3 0 15 0 8 0 0 \
               1 6 5 12 0 0 11 0 0 9 8 0 0 0 0 0 \
               0 0 0 7 14 1 8 0 0 15 6 0 13 5 0 4 \
               4 15 8 0 9 13 0 0 0 0 7 16 3 0 0 0 \
               0 9 13 0 0 0 0 15 10 0 0 0 7 6 0 11 \
               14 0 6 11 0 0 0 12 7 0 0 0 0 3 13 0 \
               0 0 0 5 8 14 0 0 0 0 13 11 0 1 2 6 \
               13 0 16 4 0 15 5 0 0 1 12 6 8 0 0 0 \
               0 0 0 0 0 16 10 0 0 8 0 0 11 9 4 5 \
               0 0 11 0 1 0 14 0 5 0 3 0 15 7 16 0 \
               5 13 15 3 16 0 4 7 0 0 0 0 0 2 0 0 \
               16 1 0 0 0 0 12 2 14 0 15 0 0 0 3 8 \
               9 0 0 0 13 5 0 0 8 6 16 0 0 0 10 0",
    },
    Example {
        name: "twenty-five",
        description: "25x25, several strategy rounds",
        line: "0 2 0 0 0 3 14 0 8 0 0 0 0 0 0 0 0 13 4 24 0 7 1 0 0 \
               0 10 17 0 0 0 6 18 0 0 22 16 0 12 0 0 0 0 1 0 0 0 13 19 0 \
               0 15 24 13 7 0 0 0 4 0 10 0 0 3 14 0 18 0 0 0 0 22 2 6 0 \
               0 0 1 21 0 0 15 0 22 0 0 19 13 0 0 0 8 0 0 0 0 16 18 20 0 \
               0 5 0 0 20 7 25 19 0 0 0 21 17 18 2 10 12 22 9 15 11 0 0 0 0 \
               11 0 0 0 22 8 0 24 7 1 5 0 0 0 13 16 17 25 23 2 4 0 6 0 19 \
               16 9 12 0 17 0 19 22 0 0 0 0 18 21 0 0 20 6 13 0 7 0 0 23 11 \
               0 0 6 0 21 9 16 0 3 0 0 22 20 19 0 0 0 0 15 8 25 0 0 0 0 \
               0 0 23 5 0 2 0 0 11 17 8 0 0 0 16 12 9 0 0 21 0 3 10 0 0 \
               0 0 0 0 0 6 0 0 12 0 9 1 25 0 3 0 11 0 0 7 0 0 21 0 0 \
               0 0 9 0 0 23 0 5 17 4 16 0 11 0 22 18 2 0 21 13 0 0 7 0 0 \
               4 6 0 0 5 0 0 2 0 0 0 18 21 24 0 0 19 3 0 12 23 0 0 17 0 \
               0 0 0 12 11 0 7 3 0 24 17 20 15 13 19 1 0 5 8 0 6 9 0 0 0 \
               0 22 0 0 14 19 0 6 16 0 0 8 9 7 0 0 0 24 0 0 3 0 0 1 18 \
               0 0 21 0 0 25 13 0 20 8 12 0 14 0 10 9 16 15 0 6 0 0 4 0 0 \
               0 0 25 0 0 24 0 0 18 0 4 0 3 10 5 0 1 0 0 14 0 0 0 0 0 \
               0 0 5 3 0 17 0 0 23 7 13 0 0 0 18 19 21 0 0 22 0 11 12 0 0 \
               0 0 0 0 18 10 8 0 0 0 0 25 23 2 0 0 5 0 16 11 9 0 3 0 0 \
               17 20 0 0 2 0 22 16 6 0 0 7 12 0 0 0 0 9 3 0 18 0 23 24 25 \
               6 0 4 0 16 1 11 12 25 3 19 0 0 0 21 17 23 8 0 18 2 0 0 0 14 \
               0 0 0 0 4 14 24 11 19 23 21 17 16 8 0 0 0 1 2 9 13 0 0 5 0 \
               0 1 14 23 0 0 0 0 9 0 0 0 19 5 0 0 24 0 12 0 0 8 17 0 0 \
               0 16 11 8 0 0 0 0 1 0 6 4 0 0 23 0 15 0 0 0 14 12 9 10 0 \
               0 21 3 0 0 0 17 0 0 0 0 15 0 25 20 0 0 4 10 0 0 0 16 11 0 \
               0 0 20 2 0 16 5 8 0 0 0 0 0 0 0 0 6 0 19 25 0 0 0 3 0",
    },
];

#[must_use]
pub fn by_name(name: &str) -> Option<&'static Example> {
    EXAMPLES.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}

/// Picks an example at random; a seed makes the choice repeatable.
#[must_use]
pub fn random(seed: Option<u64>) -> &'static Example {
    let mut rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
    &EXAMPLES[rng.usize(..EXAMPLES.len())]
}
