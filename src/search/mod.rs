//! Computer players.
//!
//! A [`Player`] picks and commits one move for its side. Random choices
//! all go through [`choose_uniform`] so a seeded RNG makes play
//! reproducible.

pub mod predator;
pub mod prey;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, BoardListener, Move, Piece};

pub use predator::{threat_count, PredatorStrategy};
pub use prey::RandomPrey;

/// A side that can take its turn on a live board.
pub trait Player {
    /// The piece kind this player moves.
    fn side(&self) -> Piece;

    /// Chooses a move, applies it to `board`, and returns it.
    ///
    /// Returns `None` when the side has no legal move; the board is then
    /// left untouched.
    fn play<L: BoardListener>(&mut self, board: &mut Board<L>) -> Option<Move>;
}

/// Picks one element uniformly at random.
pub fn choose_uniform<T: Copy, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> Option<T> {
    items.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn choose_from_empty_is_none() {
        let mut rng = SmallRng::seed_from_u64(1);
        let empty: [u32; 0] = [];
        assert_eq!(choose_uniform(&mut rng, &empty), None);
    }

    #[test]
    fn choose_returns_member() {
        let mut rng = SmallRng::seed_from_u64(7);
        let items = [3, 5, 8];
        for _ in 0..50 {
            let pick = choose_uniform(&mut rng, &items).unwrap();
            assert!(items.contains(&pick));
        }
    }

    #[test]
    fn choose_single_is_that_item() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(choose_uniform(&mut rng, &['x']), Some('x'));
    }
}
