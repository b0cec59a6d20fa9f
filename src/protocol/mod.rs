//! Text notation.
//!
//! Move notation for logs and tests, and board diagrams for loading and
//! printing positions.

pub mod diagram;
pub mod notation;

pub use diagram::{encode_diagram, parse_diagram, DiagramError};
pub use notation::{format_move, format_moves, parse_move, parse_moves, parse_position, NotationError};
