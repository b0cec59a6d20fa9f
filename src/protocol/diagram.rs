//! Board diagrams.
//!
//! A diagram is one text row per grid row, top (y = 0) first, covering the
//! full grid including the border ring. Each character is one cell:
//! `T` predator, `G` prey, `.` empty. Rows are separated by newlines or `/`.
//!
//! ```text
//! GGGGGGG
//! .T...T.
//! .......
//! .......
//! .......
//! .T...T.
//! .......
//! ```

use thiserror::Error;

use crate::board::{Board, BoardListener, NoListener, Piece, Position, MAX_CENTER_SIZE};

const EMPTY: char = '.';

/// Errors that can occur during diagram parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagramError {
    #[error("empty diagram")]
    Empty,

    #[error("grid must be at least 3x3 including the border ring, got {width}x{height}")]
    TooSmall { width: usize, height: usize },

    #[error("grid {width}x{height} exceeds {max}x{max}", max = MAX_CENTER_SIZE + 2)]
    TooLarge { width: usize, height: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid cell symbol '{symbol}' at row {row}, column {col}")]
    InvalidSymbol { symbol: char, row: usize, col: usize },
}

/// Parses a diagram into a detached board sized to fit it.
pub fn parse_diagram(s: &str) -> Result<Board, DiagramError> {
    let rows: Vec<&str> = s
        .split(|c: char| c == '\n' || c == '/')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .collect();
    if rows.is_empty() {
        return Err(DiagramError::Empty);
    }

    let width = rows[0].chars().count();
    let height = rows.len();
    if width < 3 || height < 3 {
        return Err(DiagramError::TooSmall { width, height });
    }
    if width > MAX_CENTER_SIZE + 2 || height > MAX_CENTER_SIZE + 2 {
        return Err(DiagramError::TooLarge { width, height });
    }

    let mut board = Board::with_size(width - 2, height - 2, NoListener);
    for (y, row) in rows.iter().enumerate() {
        let found = row.chars().count();
        if found != width {
            return Err(DiagramError::RaggedRow {
                row: y,
                expected: width,
                found,
            });
        }
        for (x, symbol) in row.chars().enumerate() {
            if symbol == EMPTY {
                continue;
            }
            let piece = Piece::from_symbol(symbol).ok_or(DiagramError::InvalidSymbol {
                symbol,
                row: y,
                col: x,
            })?;
            board.set(Position::new(x as i32, y as i32), piece);
        }
    }
    Ok(board)
}

/// Writes the full grid as a newline-separated diagram.
pub fn encode_diagram<L: BoardListener>(board: &Board<L>) -> String {
    let mut out = String::with_capacity((board.x_size() as usize + 1) * board.y_size() as usize);
    for y in 0..board.y_size() {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..board.x_size() {
            out.push(match board.get_xy(x, y) {
                Some(piece) => piece.symbol(),
                None => EMPTY,
            });
        }
    }
    out
}
