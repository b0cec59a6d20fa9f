//! Move notation.
//!
//! A move is written as two `x,y` coordinates joined by `-`, e.g. `2,2-4,4`.
//! Lists of moves are separated by ` ; `.

use thiserror::Error;

use crate::board::{Move, Position};

/// Errors that can occur when parsing move notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty input")]
    EmptyInput,

    #[error("missing '-' between positions in '{0}'")]
    MissingSeparator(String),

    #[error("invalid position '{0}'")]
    InvalidPosition(String),
}

/// Parses an `x,y` position.
pub fn parse_position(s: &str) -> Result<Position, NotationError> {
    let s = s.trim();
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| NotationError::InvalidPosition(s.to_string()))?;
    let x = x
        .trim()
        .parse()
        .map_err(|_| NotationError::InvalidPosition(s.to_string()))?;
    let y = y
        .trim()
        .parse()
        .map_err(|_| NotationError::InvalidPosition(s.to_string()))?;
    Ok(Position::new(x, y))
}

/// Parses a single move like `2,2-4,4`. Coordinates may be negative, so
/// the separator is the first `-` that ends a well-formed position.
pub fn parse_move(s: &str) -> Result<Move, NotationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(NotationError::EmptyInput);
    }
    let (from, to) = s
        .match_indices('-')
        .map(|(i, _)| (&s[..i], &s[i + 1..]))
        .find(|(from, _)| parse_position(from).is_ok())
        .or_else(|| s.split_once('-'))
        .ok_or_else(|| NotationError::MissingSeparator(s.to_string()))?;
    Ok(Move::new(parse_position(from)?, parse_position(to)?))
}

/// Parses a ` ; `-separated move list. An empty string is an empty list.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, NotationError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(';').map(parse_move).collect()
}

pub fn format_move(mv: &Move) -> String {
    mv.to_string()
}

pub fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(format_move)
        .collect::<Vec<_>>()
        .join(" ; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_move() {
        let mv = parse_move("2,2-4,4").unwrap();
        assert_eq!(mv, Move::new(Position::new(2, 2), Position::new(4, 4)));
        assert!(mv.is_jump());
    }

    #[test]
    fn parse_tolerates_spaces() {
        let mv = parse_move(" 0, 3 - 1,3 ").unwrap();
        assert_eq!(mv, Move::new(Position::new(0, 3), Position::new(1, 3)));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse_move(""), Err(NotationError::EmptyInput));
        assert_eq!(
            parse_move("2,2 4,4"),
            Err(NotationError::MissingSeparator("2,2 4,4".to_string()))
        );
        assert_eq!(
            parse_move("2,x-4,4"),
            Err(NotationError::InvalidPosition("2,x".to_string()))
        );
        assert_eq!(
            parse_move("22-4,4"),
            Err(NotationError::InvalidPosition("22".to_string()))
        );
    }

    #[test]
    fn negative_coordinates_roundtrip() {
        let mv = Move::new(Position::new(-1, 0), Position::new(1, 1));
        assert_eq!(format_move(&mv), "-1,0-1,1");
        assert_eq!(parse_move("-1,0-1,1"), Ok(mv));
        let back = Move::new(Position::new(2, -3), Position::new(-2, -1));
        assert_eq!(parse_move(&format_move(&back)), Ok(back));
    }

    #[test]
    fn move_list() {
        let moves = parse_moves("1,1-1,2 ; 3,3-5,5").unwrap();
        assert_eq!(moves.len(), 2);
        assert_eq!(format_moves(&moves), "1,1-1,2 ; 3,3-5,5");
        assert!(parse_moves("").unwrap().is_empty());
    }
}
