use thiserror::Error;

use crate::Coord2;

/// Reasons a board cannot be built for a given configuration or layout.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board must have at least one row and one column")]
    EmptyBoard,
    #[error("Board must have an even number of tiles, {rows}x{cols} does not")]
    OddTileCount { rows: usize, cols: usize },
    #[error(
        "Insufficient distinct identities for requested board size: need {needed} pairs, only {available} available"
    )]
    InsufficientIdentities { needed: usize, available: usize },
    #[error("Tile layout must contain every identity exactly twice")]
    UnpairedLayout,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board configuration: {0}")]
    Configuration(#[from] ConfigError),
    #[error("Invalid coordinates {0:?}")]
    InvalidCoords(Coord2),
}

pub type Result<T> = core::result::Result<T, GameError>;
