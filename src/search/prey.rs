//! Baseline prey player.
//!
//! Places waiting prey while the border ring is occupied, then makes
//! random line steps. Used as the opponent in self-play.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::{choose_uniform, Player};
use crate::board::{Board, BoardListener, Move, Piece};

/// Prey side playing uniformly random legal moves.
#[derive(Debug, Clone)]
pub struct RandomPrey<R: Rng = SmallRng> {
    rng: R,
}

impl RandomPrey<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        RandomPrey::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomPrey<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomPrey { rng }
    }
}

impl<R: Rng> Player for RandomPrey<R> {
    fn side(&self) -> Piece {
        Piece::Prey
    }

    fn play<L: BoardListener>(&mut self, board: &mut Board<L>) -> Option<Move> {
        let moves = board.legal_moves(Piece::Prey);
        let mv = choose_uniform(&mut self.rng, &moves)?;
        if !board.commit(&mv) {
            return None;
        }
        debug!(%mv, candidates = moves.len(), "prey move");
        Some(mv)
    }
}
