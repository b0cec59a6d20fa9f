//! Grid coordinates and moves.
//!
//! Positions are signed so that neighbours of edge cells can be formed
//! freely; out-of-grid reads are resolved by the board, not here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The eight neighbour offsets, enumerated as {-1,0,+1} x {-1,0,+1}
/// with the zero vector skipped. The order is part of move generation.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// An (x, y) intersection on the full grid, border ring included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Returns this position shifted by the given step.
    pub const fn add(self, x_step: i32, y_step: i32) -> Self {
        Position {
            x: self.x + x_step,
            y: self.y + y_step,
        }
    }

    /// Componentwise `>=`.
    pub const fn is_greater_or_equal_to(self, other: Position) -> bool {
        self.x >= other.x && self.y >= other.y
    }

    /// Componentwise `<=`.
    pub const fn is_less_or_equal_to(self, other: Position) -> bool {
        self.x <= other.x && self.y <= other.y
    }

    /// Diagonal lines of the board pass through intersections with an
    /// even coordinate sum.
    pub const fn has_even_coord_sum(self) -> bool {
        (self.x + self.y) % 2 == 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// A move from one position to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub const fn new(from: Position, to: Position) -> Self {
        Move { from, to }
    }

    const fn dx(&self) -> i32 {
        self.to.x - self.from.x
    }

    const fn dy(&self) -> i32 {
        self.to.y - self.from.y
    }

    /// Chebyshev distance between the endpoints.
    pub fn length(&self) -> i32 {
        self.dx().abs().max(self.dy().abs())
    }

    /// True for a move to one of the eight neighbouring cells.
    pub fn is_step(&self) -> bool {
        self.length() == 1
    }

    /// True for a straight two-cell move (orthogonal or diagonal).
    pub fn is_jump(&self) -> bool {
        let (dx, dy) = (self.dx(), self.dy());
        self.length() == 2 && dx % 2 == 0 && dy % 2 == 0
    }

    /// Midpoint of the move. Only meaningful for jumps.
    pub const fn middle(&self) -> Position {
        Position {
            x: (self.from.x + self.to.x) / 2,
            y: (self.from.y + self.to.y) / 2,
        }
    }

    /// Purely horizontal or purely vertical.
    pub const fn is_one_dimensional(&self) -> bool {
        self.dx() == 0 || self.dy() == 0
    }

    pub const fn is_stationary(&self) -> bool {
        self.from.x == self.to.x && self.from.y == self.to.y
    }

    pub const fn is_not_stationary(&self) -> bool {
        !self.is_stationary()
    }

    /// The same displacement applied again, starting where this move ends.
    ///
    /// For a step this is the second half of the jump continuing it.
    pub const fn repeat(&self) -> Move {
        Move {
            from: self.to,
            to: self.to.add(self.dx(), self.dy()),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(x1: i32, y1: i32, x2: i32, y2: i32) -> Move {
        Move::new(Position::new(x1, y1), Position::new(x2, y2))
    }

    #[test]
    fn directions_skip_zero_vector() {
        assert_eq!(DIRECTIONS.len(), 8);
        assert!(!DIRECTIONS.contains(&(0, 0)));
        assert_eq!(DIRECTIONS[0], (-1, -1));
        assert_eq!(DIRECTIONS[7], (1, 1));
    }

    #[test]
    fn componentwise_ordering() {
        let p = Position::new(2, 3);
        assert!(p.is_greater_or_equal_to(Position::new(1, 3)));
        assert!(!p.is_greater_or_equal_to(Position::new(3, 1)));
        assert!(p.is_less_or_equal_to(Position::new(2, 5)));
        assert!(!p.is_less_or_equal_to(Position::new(1, 5)));
    }

    #[test]
    fn parity() {
        assert!(Position::new(2, 2).has_even_coord_sum());
        assert!(Position::new(1, 3).has_even_coord_sum());
        assert!(!Position::new(1, 2).has_even_coord_sum());
    }

    #[test]
    fn step_and_jump_classification() {
        assert!(mv(2, 2, 3, 3).is_step());
        assert!(mv(2, 2, 2, 3).is_step());
        assert!(!mv(2, 2, 4, 4).is_step());
        assert!(mv(2, 2, 4, 4).is_jump());
        assert!(mv(2, 2, 2, 4).is_jump());
        assert!(!mv(2, 2, 3, 4).is_jump());
        assert!(!mv(2, 2, 2, 2).is_jump());
        assert!(!mv(2, 2, 2, 2).is_step());
    }

    #[test]
    fn middle_of_jump() {
        assert_eq!(mv(2, 2, 4, 4).middle(), Position::new(3, 3));
        assert_eq!(mv(5, 3, 3, 3).middle(), Position::new(4, 3));
    }

    #[test]
    fn one_dimensional_and_stationary() {
        assert!(mv(1, 1, 1, 2).is_one_dimensional());
        assert!(mv(1, 1, 2, 1).is_one_dimensional());
        assert!(!mv(1, 1, 2, 2).is_one_dimensional());
        assert!(mv(3, 3, 3, 3).is_stationary());
        assert!(mv(3, 3, 3, 4).is_not_stationary());
    }

    #[test]
    fn repeat_projects_step_into_jump() {
        let step = mv(2, 2, 3, 3);
        assert_eq!(step.repeat(), mv(3, 3, 4, 4));
        let step = mv(4, 2, 3, 2);
        assert_eq!(step.repeat(), mv(3, 2, 2, 2));
    }

    #[test]
    fn display() {
        assert_eq!(mv(1, 2, 3, 4).to_string(), "1,2-3,4");
    }
}
