//! Engine state management.
//!
//! Holds the live board, the predator strategy, and a string option
//! table that hosts use to configure play (`Level`, `Seed`).

use std::collections::HashMap;

use tracing::{info, warn};

use crate::board::{Board, BoardListener, Move, NoListener, Piece};
use crate::config::{BoardConfig, ConfigError, Level, StrategyConfig};
use crate::protocol::diagram::{encode_diagram, parse_diagram, DiagramError};
use crate::search::{Player, PredatorStrategy};

/// A game session: one live board and the computer predator.
pub struct Engine<L: BoardListener = NoListener> {
    pub board: Board<L>,
    pub options: HashMap<String, String>,
    strategy: PredatorStrategy,
    board_config: BoardConfig,
}

impl Engine<NoListener> {
    /// Creates an engine with default configuration and no listener.
    pub fn new() -> Self {
        Engine::with_listener(NoListener, StrategyConfig::default(), BoardConfig::default())
    }
}

impl Default for Engine<NoListener> {
    fn default() -> Self {
        Engine::new()
    }
}

impl<L: BoardListener> Engine<L> {
    /// Creates an engine whose board notifies `listener`.
    ///
    /// The board starts empty; call [`new_game`](Self::new_game) to lay out
    /// the opening.
    pub fn with_listener(listener: L, strategy: StrategyConfig, board_config: BoardConfig) -> Self {
        Engine {
            board: Board::with_size(board_config.center_width, board_config.center_height, listener),
            options: HashMap::new(),
            strategy: PredatorStrategy::new(strategy),
            board_config,
        }
    }

    pub fn level(&self) -> Level {
        self.strategy.level()
    }

    /// Resets the board to the standard opening at the configured size,
    /// discarding any dimensions loaded by [`set_position`](Self::set_position).
    pub fn new_game(&mut self) {
        self.board.resize(self.board_config.center_width, self.board_config.center_height);
        self.board.setup_standard(self.board_config.prey_count);
        info!(level = self.level().get(), "new game");
    }

    /// Loads a position from a board diagram.
    pub fn set_position(&mut self, diagram: &str) -> Result<(), DiagramError> {
        let layout = parse_diagram(diagram)?;
        self.board.load_layout(&layout);
        Ok(())
    }

    /// Sets an engine option. `Level` and `Seed` reconfigure the strategy;
    /// other names are stored but have no effect.
    pub fn set_option(&mut self, name: String, value: Option<String>) -> Result<(), ConfigError> {
        let value = value.unwrap_or_default();
        let invalid = || ConfigError::InvalidOption {
            name: name.clone(),
            value: value.clone(),
        };
        match name.as_str() {
            "Level" => {
                let level: i64 = value.trim().parse().map_err(|_| invalid())?;
                self.strategy.set_level(Level::new(level)?);
            }
            "Seed" => {
                let seed: u64 = value.trim().parse().map_err(|_| invalid())?;
                let config = StrategyConfig {
                    level: self.level(),
                    seed: (seed != 0).then_some(seed),
                };
                self.strategy = PredatorStrategy::new(config);
            }
            _ => warn!(%name, "unknown option"),
        }
        self.options.insert(name, value);
        Ok(())
    }

    /// Plays and commits one predator move. `None` means the predators
    /// are stuck.
    pub fn predator_move(&mut self) -> Option<Move> {
        self.strategy.play(&mut self.board)
    }

    /// Commits a prey move supplied by the host if it is legal for prey.
    pub fn prey_move(&mut self, mv: &Move) -> bool {
        if self.board.get(mv.from) != Some(Piece::Prey) || !self.board.is_valid_for(Piece::Prey, mv) {
            return false;
        }
        self.board.commit(mv)
    }

    /// The current position as a diagram.
    pub fn diagram(&self) -> String {
        encode_diagram(&self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardEvent, EventLog, Position};
    use crate::protocol::notation::parse_move;

    const CAPTURE: &str = ".......\n.T.....\n..G....\n.......\n.......\n.......\n.......";

    #[test]
    fn new_engine_is_empty() {
        let engine = Engine::new();
        assert_eq!(engine.board.count(Piece::Predator), 0);
        assert!(engine.options.is_empty());
        assert_eq!(engine.level(), Level::default());
    }

    #[test]
    fn new_game_lays_out_opening() {
        let mut engine = Engine::with_listener(
            EventLog::new(),
            StrategyConfig::default(),
            BoardConfig::default(),
        );
        engine.new_game();
        assert_eq!(engine.board.count(Piece::Predator), 4);
        assert_eq!(engine.board.count(Piece::Prey), 20);
        assert_eq!(engine.board.listener().events, vec![BoardEvent::Reset]);
    }

    #[test]
    fn set_position_and_capture() {
        let mut engine = Engine::new();
        engine.set_position(CAPTURE).unwrap();
        let played = engine.predator_move().unwrap();
        assert_eq!(played, parse_move("1,1-3,3").unwrap());
        assert_eq!(engine.board.count(Piece::Prey), 0);
        assert_eq!(
            engine.diagram(),
            ".......\n.......\n.......\n...T...\n.......\n.......\n......."
        );
    }

    #[test]
    fn new_game_restores_configured_size() {
        let mut engine = Engine::new();
        engine.set_position("...../.T.G./.....").unwrap();
        assert_eq!(engine.board.x_size(), 5);
        engine.new_game();
        assert_eq!(engine.board.x_size(), 7);
        assert_eq!(engine.board.y_size(), 7);
        assert_eq!(engine.board.count(Piece::Predator), 4);
        assert_eq!(engine.board.count(Piece::Prey), 20);
    }

    #[test]
    fn set_position_rejects_bad_diagram() {
        let mut engine = Engine::new();
        assert!(engine.set_position("..\n..").is_err());
    }

    #[test]
    fn level_option() {
        let mut engine = Engine::new();
        engine.set_option("Level".to_string(), Some("7".to_string())).unwrap();
        assert_eq!(engine.level().get(), 7);
        assert_eq!(engine.options.get("Level"), Some(&"7".to_string()));

        assert!(matches!(
            engine.set_option("Level".to_string(), Some("9".to_string())),
            Err(ConfigError::LevelOutOfRange(9))
        ));
        assert!(matches!(
            engine.set_option("Level".to_string(), Some("high".to_string())),
            Err(ConfigError::InvalidOption { .. })
        ));
        assert_eq!(engine.level().get(), 7);
    }

    #[test]
    fn seed_option_keeps_level() {
        let mut engine = Engine::new();
        engine.set_option("Level".to_string(), Some("5".to_string())).unwrap();
        engine.set_option("Seed".to_string(), Some("42".to_string())).unwrap();
        assert_eq!(engine.level().get(), 5);
    }

    #[test]
    fn unknown_option_is_stored() {
        let mut engine = Engine::new();
        engine.set_option("Theme".to_string(), None).unwrap();
        assert_eq!(engine.options.get("Theme"), Some(&String::new()));
    }

    #[test]
    fn prey_move_validates() {
        let mut engine = Engine::new();
        engine.new_game();
        // corner predator cannot be moved by the prey side
        assert!(!engine.prey_move(&parse_move("1,1-1,2").unwrap()));
        // ring prey can be placed anywhere empty in the centre
        let first_ring = engine.board.border_positions().next().unwrap();
        let placement = Move::new(first_ring, Position::new(3, 3));
        assert!(engine.prey_move(&placement));
        assert_eq!(engine.board.get(Position::new(3, 3)), Some(Piece::Prey));
        // placed prey cannot step while others still wait
        assert!(!engine.prey_move(&parse_move("3,3-3,4").unwrap()));
    }
}
