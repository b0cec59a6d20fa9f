//! Board representation.
//!
//! Contains positions and moves, piece kinds with their legality table,
//! the listener contract, and the grid itself.

pub mod grid;
pub mod listener;
pub mod piece;
pub mod position;

pub use grid::{Board, DEFAULT_CENTER_SIZE, MAX_CENTER_SIZE};
pub use listener::{BoardEvent, BoardListener, EventLog, NoListener};
pub use piece::{piece_allows, BoardQuery, Cell, Piece};
pub use position::{Move, Position, DIRECTIONS};
