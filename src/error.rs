//! Error types for the minigames crate

use thiserror::Error;

/// Main error type for the minigames crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("expected {expected} tiles, got {got} in '{context}'")]
    InvalidTileCount {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("tile value {value} is out of range 0-8 in '{context}'")]
    TileOutOfRange { value: u8, context: String },

    #[error("duplicate tile value {value} in '{context}'")]
    DuplicateTile { value: u8, context: String },

    #[error("invalid tile token '{token}' in '{context}'")]
    InvalidTileToken { token: String, context: String },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid player '{player}' (expected 'X' or 'O')")]
    InvalidPlayerString { player: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
