//! Legal move generation.
//!
//! Enumerates steps, jumps, and border placements on a [`Board`]. Steps
//! and jumps share one traversal, [`Board::try_steps_where`], which walks
//! every cell holding the mover in scan order and tries the eight
//! directions in [`DIRECTIONS`] order.

use crate::board::{Board, BoardListener, BoardQuery, Cell, Move, Piece, DIRECTIONS};

/// What the neighbouring cell must hold for a step to be tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The neighbour is empty: plain steps.
    Empty,
    /// The neighbour holds this piece: the first half of a jump.
    Occupant(Piece),
}

impl Target {
    fn matches(self, cell: Cell) -> bool {
        match self {
            Target::Empty => cell.is_none(),
            Target::Occupant(piece) => cell == Some(piece),
        }
    }
}

impl<L: BoardListener> Board<L> {
    /// Calls `on_step` for every line step from a `mover` cell onto a
    /// neighbour matching `target`.
    pub fn try_steps_where<F>(&self, target: Target, mover: Piece, mut on_step: F)
    where
        F: FnMut(Move),
    {
        for p in self.positions() {
            if self.get(p) != Some(mover) {
                continue;
            }
            for (x_step, y_step) in DIRECTIONS {
                let step = Move::new(p, p.add(x_step, y_step));
                if target.matches(self.get(step.to)) && self.is_step_along_line(&step) {
                    on_step(step);
                }
            }
        }
    }

    /// Appends every line step from a `mover` cell onto an empty neighbour.
    pub fn add_possible_steps_to(&self, list: &mut Vec<Move>, mover: Piece) {
        self.try_steps_where(Target::Empty, mover, |step| list.push(step));
    }

    /// Appends every jump by `predator` over an adjacent `prey`.
    pub fn add_possible_jumps_to(&self, list: &mut Vec<Move>, predator: Piece, prey: Piece) {
        self.try_steps_where(Target::Occupant(prey), predator, |step| {
            self.add_possible_jump(list, step)
        });
    }

    /// Extends `step` into the jump continuing it, appending the jump when
    /// the second half follows a line and lands on an empty cell.
    pub fn add_possible_jump(&self, list: &mut Vec<Move>, step: Move) {
        let second = step.repeat();
        if self.is_step_along_line(&second) && self.is_empty(second.to) {
            list.push(Move::new(step.from, second.to));
        }
    }

    /// Border-to-centre placements for every `piece` waiting on the ring.
    pub fn placements_for(&self, piece: Piece) -> Vec<Move> {
        let mut moves = Vec::new();
        for from in self.border_positions() {
            if self.get(from) != Some(piece) {
                continue;
            }
            for to in self.positions() {
                if self.is_empty(to) {
                    moves.push(Move::new(from, to));
                }
            }
        }
        moves
    }

    /// All moves currently legal for `piece`: captures first, then steps,
    /// then placements.
    pub fn legal_moves(&self, piece: Piece) -> Vec<Move> {
        let mut moves = Vec::new();
        if piece == Piece::Predator {
            self.add_possible_jumps_to(&mut moves, Piece::Predator, Piece::Prey);
        }
        self.add_possible_steps_to(&mut moves, piece);
        moves.extend(self.placements_for(piece));
        moves.retain(|mv| self.is_valid_for(piece, mv));
        moves
    }
}
