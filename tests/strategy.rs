//! Predator strategy behaviour on live boards.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use baghchal::board::{Board, BoardEvent, EventLog, Move, Piece, Position};
use baghchal::config::Level;
use baghchal::protocol::diagram::parse_diagram;
use baghchal::search::{threat_count, Player, PredatorStrategy, RandomPrey};

fn live(diagram: &str) -> Board<EventLog> {
    let mut board = Board::new(EventLog::new());
    board.load_layout(&parse_diagram(diagram).unwrap());
    board
}

fn strategy(level: i64, seed: u64) -> PredatorStrategy {
    PredatorStrategy::with_rng(Level::new(level).unwrap(), SmallRng::seed_from_u64(seed))
}

const TWO_CAPTURES: &str = "\
.......
.T...T.
..G.G..
.......
..T....
.......
.......";

#[test]
fn always_captures_when_possible() {
    for seed in 0..20 {
        let mut board = live(TWO_CAPTURES);
        let mut jumps = Vec::new();
        board.add_possible_jumps_to(&mut jumps, Piece::Predator, Piece::Prey);
        assert!(!jumps.is_empty());

        let played = strategy(8, seed).play(&mut board).unwrap();
        assert!(jumps.contains(&played), "seed {seed}: {played}");
        assert_eq!(board.get(played.middle()), None);
        assert_eq!(board.get(played.to), Some(Piece::Predator));
        assert_eq!(board.count(Piece::Prey), 1);
        assert_eq!(board.listener().events, vec![BoardEvent::Jump(Piece::Predator)]);
    }
}

#[test]
fn stalemate_returns_none_without_mutation() {
    let mut board = live(
        "\
.......
.TGG...
.GGG...
.GGG...
.......
.......
.......",
    );
    let before = board.cells().to_vec();
    assert_eq!(strategy(4, 1).play(&mut board), None);
    assert_eq!(board.cells(), &before[..]);
    assert!(board.listener().events.is_empty());
}

const FORK: &str = "\
.......
.......
.......
..G.G..
...T...
.......
.......";

#[test]
fn prefers_highest_threat_within_level() {
    // from (3,3) the predator threatens the prey on both sides
    let board = live(FORK);
    let fork = Move::new(Position::new(3, 4), Position::new(3, 3));
    assert_eq!(threat_count(&board, &fork), 2);

    for seed in 0..10 {
        let mut board = live(FORK);
        assert_eq!(strategy(8, seed).play(&mut board), Some(fork));
        assert_eq!(board.listener().events, vec![BoardEvent::Step(Piece::Predator)]);
    }
}

#[test]
fn level_one_ignores_forks() {
    let board = live(FORK);
    let mut single = Vec::new();
    for to in [Position::new(2, 4), Position::new(4, 4)] {
        let mv = Move::new(Position::new(3, 4), to);
        assert_eq!(threat_count(&board, &mv), 1);
        single.push(mv);
    }
    for seed in 0..10 {
        let mut board = live(FORK);
        let played = strategy(1, seed).play(&mut board).unwrap();
        assert!(single.contains(&played), "seed {seed}: {played}");
    }
}

#[test]
fn played_steps_are_legal() {
    let mut board = Board::new(EventLog::new());
    board.setup_standard(20);
    let mut predator = strategy(3, 99);
    let mut prey = RandomPrey::seeded(100);
    for _ in 0..30 {
        let before = board.copy_board();
        let Some(mv) = prey.play(&mut board) else { break };
        assert!(before.is_legal(&mv), "prey {mv}");

        let before = board.copy_board();
        let Some(mv) = predator.play(&mut board) else { break };
        assert!(before.is_legal(&mv), "predator {mv}");
    }
}
