//! Piece kinds and their movement constraints.
//!
//! Legality per kind is a lookup over the tagged variant rather than a
//! method on each kind. The board provides the queries the table needs
//! through [`BoardQuery`].

use serde::{Deserialize, Serialize};

use super::position::{Move, Position};

/// A piece kind, plus the sentinel read back for out-of-grid positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    Predator,
    Prey,
    Invalid,
}

/// Occupant of a grid cell. `None` is an empty cell.
pub type Cell = Option<Piece>;

impl Piece {
    /// Returns the single-character diagram symbol.
    pub const fn symbol(self) -> char {
        match self {
            Piece::Predator => 'T',
            Piece::Prey => 'G',
            Piece::Invalid => '#',
        }
    }

    /// Parses a piece from its diagram symbol.
    pub fn from_symbol(c: char) -> Option<Piece> {
        match c {
            'T' | 't' => Some(Piece::Predator),
            'G' | 'g' => Some(Piece::Prey),
            _ => None,
        }
    }
}

/// Read-only board queries used by the legality table.
pub trait BoardQuery {
    fn get(&self, p: Position) -> Cell;

    /// The move lifts a piece off the border ring onto a non-border cell.
    fn is_border_to_board(&self, mv: &Move) -> bool;

    /// No piece is waiting on the border ring.
    fn is_border_empty(&self) -> bool;

    /// Single-cell step inside the centre following a board line.
    fn is_step_along_line(&self, mv: &Move) -> bool;

    /// Two-cell jump whose both halves follow a board line.
    fn is_jump_along_line(&self, mv: &Move) -> bool {
        let first = Move::new(mv.from, mv.middle());
        mv.is_jump() && self.is_step_along_line(&first) && self.is_step_along_line(&first.repeat())
    }
}

/// Kind-specific legality of `mv` for `piece`.
///
/// Destination emptiness and stationarity are checked by the caller;
/// this only encodes what each kind is allowed to do.
pub fn piece_allows<Q: BoardQuery + ?Sized>(piece: Piece, mv: &Move, board: &Q) -> bool {
    match piece {
        Piece::Prey => {
            board.is_border_to_board(mv) || (board.is_border_empty() && board.is_step_along_line(mv))
        }
        Piece::Predator => {
            board.is_step_along_line(mv)
                || (board.is_jump_along_line(mv) && board.get(mv.middle()) == Some(Piece::Prey))
        }
        Piece::Invalid => false,
    }
}
