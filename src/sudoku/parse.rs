#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A parser for plain-text Sudoku puzzles.
//!
//! The format is deliberately loose so that grids copied from most sources
//! can be read as-is:
//! - Lines starting with `#` or `//` are comments; empty lines are skipped.
//! - `,` separates cells. `|`, `+` and `-` mark box borders and are
//!   ignored.
//! - A line holding a single token is read one character per cell
//!   (`53..7....` or `53.|.7.|...`), which also covers the common
//!   81-character one-liner.
//! - Any other line is read one whitespace-separated token per cell, which
//!   is how boards with two-digit values are written.
//! - Blanks are written `0`, `.`, `_` or `*`.
//!
//! The board size is inferred from the total number of cells.

use crate::sudoku::board::{Board, Size};
use crate::sudoku::error::{PuzzleError, Result};
use std::path::Path;

const BORDERS: [char; 3] = ['|', '+', '-'];

fn is_blank(token: &str) -> bool {
    matches!(token, "0" | "." | "_" | "*")
}

fn parse_token(token: &str, line: usize) -> Result<u8> {
    if is_blank(token) {
        return Ok(0);
    }
    token.parse::<u8>().map_err(|_| PuzzleError::InvalidToken {
        line,
        token: token.to_string(),
    })
}

/// Parses a puzzle from text.
///
/// # Errors
///
/// - `InvalidToken` for characters that are neither digits nor blanks.
/// - `InvalidCellCount` if the cells do not form a 4x4, 9x9, 16x16 or 25x25 grid.
/// - `ValueOutOfRange` for values larger than the inferred size.
/// - `DuplicateDigit` if the givens already break a house.
pub fn parse_sudoku(input: &str) -> Result<Board> {
    let mut cells: Vec<u8> = Vec::new();

    for (number, raw) in input.lines().enumerate() {
        let line_no = number + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }

        let spaced = trimmed.replace(',', " ");
        if spaced.split_whitespace().nth(1).is_none() {
            // one token: borders sit between cells, not between tokens
            for ch in spaced.trim().chars().filter(|c| !BORDERS.contains(c)) {
                let mut buf = [0; 4];
                cells.push(parse_token(ch.encode_utf8(&mut buf), line_no)?);
            }
            continue;
        }
        for token in spaced.replace(BORDERS, " ").split_whitespace() {
            cells.push(parse_token(token, line_no)?);
        }
    }

    let size = Size::from_cell_count(cells.len())?;
    let board = Board::new(size, cells)?;
    board.validate()?;
    Ok(board)
}

/// Reads and parses a puzzle file.
///
/// # Errors
///
/// `PuzzleError::Io` if the file cannot be read, otherwise as [`parse_sudoku`].
pub fn parse_sudoku_file<P: AsRef<Path>>(path: P) -> Result<Board> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| PuzzleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_sudoku(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sudoku::puzzles::CLASSIC;

    #[test]
    fn test_parse_one_liner() {
        let line = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
        let board = parse_sudoku(line).unwrap();
        assert_eq!(board, Board::try_from(&CLASSIC).unwrap());
    }

    #[test]
    fn test_parse_pretty_grid_round_trips_display() {
        let board = Board::try_from(&CLASSIC).unwrap();
        let parsed = parse_sudoku(&board.to_string()).unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn test_parse_comma_rows_with_comments() {
        let input = "# a 4x4 puzzle\n\
                     1,0,0,4,\n\
                     0,4,0,0,\n\
                     #--------\n\
                     2,0,0,3,\n\
                     0,0,2,0,\n";
        let board = parse_sudoku(input).unwrap();
        assert_eq!(board.size(), Size::Four);
        assert_eq!(board.get(2, 3), 3);
    }

    #[test]
    fn test_parse_boxed_compact_rows() {
        let input = "53.|.7.|...\n\
                     6..|195|...\n\
                     .98|...|.6.\n\
                     ---+---+---\n\
                     8..|.6.|..3\n\
                     4..|8.3|..1\n\
                     7..|.2.|..6\n\
                     ---+---+---\n\
                     .6.|...|28.\n\
                     ...|419|..5\n\
                     ...|.8.|.79\n";
        assert_eq!(parse_sudoku(input).unwrap(), Board::try_from(&CLASSIC).unwrap());
    }

    #[test]
    fn test_parse_framed_compact_rows() {
        let input = "+--+--+\n|1.|.4|\n|.4|..|\n+--+--+\n|2.|.3|\n|..|2.|\n+--+--+";
        let board = parse_sudoku(input).unwrap();
        assert_eq!(board.to_line(), "1..4.4..2..3..2.");
    }

    #[test]
    fn test_parse_two_digit_tokens() {
        let mut text = String::new();
        for row in 0..16 {
            let line: Vec<String> = (0..16)
                .map(|col| if row == 0 && col == 3 { "12".to_string() } else { ".".to_string() })
                .collect();
            text.push_str(&line.join(" "));
            text.push('\n');
        }
        let board = parse_sudoku(&text).unwrap();
        assert_eq!(board.size(), Size::Sixteen);
        assert_eq!(board.get(0, 3), 12);
        assert_eq!(board.givens(), 1);
    }

    #[test]
    fn test_parse_invalid_token() {
        let err = parse_sudoku("12x4\n....\n....\n....").unwrap_err();
        match err {
            PuzzleError::InvalidToken { line, token } => {
                assert_eq!(line, 1);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_parse_wrong_cell_count() {
        assert!(matches!(
            parse_sudoku("123\n"),
            Err(PuzzleError::InvalidCellCount(3))
        ));
        assert!(matches!(parse_sudoku(""), Err(PuzzleError::InvalidCellCount(0))));
    }

    #[test]
    fn test_parse_value_out_of_range() {
        assert!(matches!(
            parse_sudoku("1..5\n....\n....\n...."),
            Err(PuzzleError::ValueOutOfRange { value: 5, .. })
        ));
    }

    #[test]
    fn test_parse_duplicate_givens() {
        assert!(matches!(
            parse_sudoku("1..1\n....\n....\n...."),
            Err(PuzzleError::DuplicateDigit { digit: 1, .. })
        ));
    }

    #[test]
    fn test_parse_missing_file() {
        let err = parse_sudoku_file("/definitely/not/here.sudoku").unwrap_err();
        assert!(matches!(err, PuzzleError::Io { .. }));
        assert!(err.to_string().contains("not/here.sudoku"));
    }
}
