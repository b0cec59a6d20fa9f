//! Bagh-Chal engine library.
//!
//! Exposes the board model and move rules, move generation, the computer
//! players, text notation, configuration, and self-play for use by hosts,
//! integration tests, and benchmarks.

pub mod board;
pub mod config;
pub mod engine;
pub mod movegen;
pub mod protocol;
pub mod search;
pub mod selfplay;
