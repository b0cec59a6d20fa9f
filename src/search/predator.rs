//! Predator strategy.
//!
//! One-ply heuristic: captures always win; otherwise each step is scored
//! by how many captures it would set up, and the strategy aims for the
//! highest threat count at or below its level.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use super::{choose_uniform, Player};
use crate::board::{Board, BoardListener, Move, Piece};
use crate::config::{Level, StrategyConfig, MAX_THREATS};
use crate::movegen::Target;

/// The computer player for the predator side.
#[derive(Debug, Clone)]
pub struct PredatorStrategy<R: Rng = SmallRng> {
    level: Level,
    rng: R,
}

impl PredatorStrategy<SmallRng> {
    /// Creates a strategy from config, seeding from entropy when no seed is set.
    pub fn new(config: StrategyConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        PredatorStrategy::with_rng(config.level, rng)
    }
}

impl<R: Rng> PredatorStrategy<R> {
    pub fn with_rng(level: Level, rng: R) -> Self {
        PredatorStrategy { level, rng }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Groups `steps` by threat count. Bucket `i` holds steps threatening
    /// `i + 1` captures; steps threatening nothing are left out.
    pub fn threat_buckets<L: BoardListener>(
        board: &Board<L>,
        steps: &[Move],
    ) -> [Vec<Move>; MAX_THREATS] {
        let mut buckets: [Vec<Move>; MAX_THREATS] = Default::default();
        for step in steps {
            let threats = threat_count(board, step);
            if threats == 0 {
                continue;
            }
            if threats > MAX_THREATS {
                warn!(%step, threats, "threat count above bucket range");
            }
            buckets[threats.min(MAX_THREATS) - 1].push(*step);
        }
        buckets
    }

    /// Picks from the highest non-empty bucket at or below the level.
    fn threatening_move(&mut self, buckets: &[Vec<Move>; MAX_THREATS]) -> Option<Move> {
        for threats in (1..=self.level.get()).rev() {
            if let Some(mv) = choose_uniform(&mut self.rng, &buckets[threats - 1]) {
                debug!(%mv, threats, "threatening step");
                return Some(mv);
            }
        }
        None
    }
}

impl<R: Rng> Player for PredatorStrategy<R> {
    fn side(&self) -> Piece {
        Piece::Predator
    }

    fn play<L: BoardListener>(&mut self, board: &mut Board<L>) -> Option<Move> {
        let mut jumps = Vec::new();
        board.add_possible_jumps_to(&mut jumps, Piece::Predator, Piece::Prey);
        if let Some(jump) = choose_uniform(&mut self.rng, &jumps) {
            debug!(%jump, candidates = jumps.len(), "capture");
            board.do_move(&jump);
            return Some(jump);
        }

        let mut steps = Vec::new();
        board.add_possible_steps_to(&mut steps, Piece::Predator);
        if steps.is_empty() {
            debug!("predator has no move");
            return None;
        }

        let buckets = Self::threat_buckets(board, &steps);
        let chosen = match self.threatening_move(&buckets) {
            Some(mv) => mv,
            None => {
                let mv = choose_uniform(&mut self.rng, &steps)?;
                debug!(%mv, candidates = steps.len(), "plain step");
                mv
            }
        };
        board.do_move(&chosen);
        Some(chosen)
    }
}

/// Number of captures open to the predators right after `step`.
///
/// Simulated on a detached copy; `board` is not touched.
pub fn threat_count<L: BoardListener>(board: &Board<L>, step: &Move) -> usize {
    let mut copy = board.copy_board();
    copy.move_piece(step);
    let mut jumps = Vec::new();
    copy.try_steps_where(Target::Occupant(Piece::Prey), Piece::Predator, |first| {
        copy.add_possible_jump(&mut jumps, first)
    });
    jumps.len()
}
