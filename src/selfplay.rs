//! Self-play game generation.
//!
//! Plays full games of the predator strategy against [`RandomPrey`] from
//! the standard opening, recording every move and the outcome.

use std::io::Write;
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::board::{Board, Move, NoListener, Piece};
use crate::config::{BoardConfig, Level};
use crate::protocol::diagram::encode_diagram;
use crate::search::{Player, PredatorStrategy, RandomPrey};

/// Errors from running a batch of games.
#[derive(Debug, Error)]
pub enum SelfPlayError {
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to write game records: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration for self-play game generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Plies after which the game is called a draw.
    pub max_moves: usize,
    /// Captured prey needed for the predators to win.
    pub captures_to_win: usize,
    /// Predator strategy level.
    pub level: Level,
    pub board: BoardConfig,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            threads: 1,
            seed: 0,
            max_moves: 200,
            captures_to_win: 5,
            level: Level::default(),
            board: BoardConfig::default(),
        }
    }
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Enough prey captured, or the prey side could not move.
    PredatorWins,
    /// The predators had no legal move.
    PreyWins,
    /// Move limit reached.
    Draw,
}

/// One committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub side: Piece,
    #[serde(rename = "move")]
    pub mv: Move,
}

/// A complete self-play game record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// Sequential game ID.
    pub game_id: usize,
    pub moves: Vec<MoveRecord>,
    pub outcome: Outcome,
    /// Prey removed by jumps.
    pub captured: usize,
    /// Diagram of the final position.
    pub final_position: String,
}

/// Plays a single game. Prey moves first.
pub fn play_game(config: &SelfPlayConfig, game_id: usize, rng: &mut SmallRng) -> GameRecord {
    let mut board = Board::with_size(config.board.center_width, config.board.center_height, NoListener);
    board.setup_standard(config.board.prey_count);
    let initial_prey = board.count(Piece::Prey);

    let mut predator = PredatorStrategy::with_rng(config.level, SmallRng::seed_from_u64(rng.gen()));
    let mut prey = RandomPrey::with_rng(SmallRng::seed_from_u64(rng.gen()));
    let mut moves = Vec::new();

    let outcome = loop {
        if moves.len() >= config.max_moves {
            break Outcome::Draw;
        }
        match prey.play(&mut board) {
            Some(mv) => moves.push(MoveRecord { side: Piece::Prey, mv }),
            None => break Outcome::PredatorWins,
        }
        if moves.len() >= config.max_moves {
            break Outcome::Draw;
        }
        match predator.play(&mut board) {
            Some(mv) => moves.push(MoveRecord { side: Piece::Predator, mv }),
            None => break Outcome::PreyWins,
        }
        if initial_prey - board.count(Piece::Prey) >= config.captures_to_win {
            break Outcome::PredatorWins;
        }
    };

    GameRecord {
        game_id,
        moves,
        outcome,
        captured: initial_prey - board.count(Piece::Prey),
        final_position: encode_diagram(&board),
    }
}

fn game_rng(config: &SelfPlayConfig, game_id: usize) -> SmallRng {
    if config.seed != 0 {
        SmallRng::seed_from_u64(config.seed.wrapping_add(game_id as u64))
    } else {
        SmallRng::from_entropy()
    }
}

fn play_logged(config: &SelfPlayConfig, game_id: usize) -> GameRecord {
    let start = Instant::now();
    let mut rng = game_rng(config, game_id);
    let game = play_game(config, game_id, &mut rng);
    info!(
        game = game_id + 1,
        of = config.num_games,
        outcome = ?game.outcome,
        plies = game.moves.len(),
        captured = game.captured,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "self-play game finished"
    );
    game
}

/// Runs self-play generation, producing multiple game records in game order.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
pub fn run_self_play(config: &SelfPlayConfig) -> Result<Vec<GameRecord>, SelfPlayError> {
    let mut games = Vec::with_capacity(config.num_games);
    run_self_play_with_callback(config, |game| games.push(game))?;
    Ok(games)
}

/// Runs self-play generation, calling `on_game` with each completed game.
pub fn run_self_play_with_callback<F>(config: &SelfPlayConfig, mut on_game: F) -> Result<(), SelfPlayError>
where
    F: FnMut(GameRecord),
{
    if config.threads > 1 {
        use rayon::prelude::*;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()?;
        let games: Vec<GameRecord> = pool.install(|| {
            (0..config.num_games)
                .into_par_iter()
                .map(|i| play_logged(config, i))
                .collect()
        });
        games.into_iter().for_each(on_game);
    } else {
        for i in 0..config.num_games {
            on_game(play_logged(config, i));
        }
    }
    Ok(())
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> Result<(), SelfPlayError> {
    for game in games {
        serde_json::to_writer(&mut *out, game).map_err(std::io::Error::from)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
