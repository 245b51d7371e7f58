//! Error types.
//!
//! Board errors signal a defect in move selection, not a runtime condition:
//! the game runner only ever picks empty cells of a pre-populated board.

use crate::board::Cell;
use crate::core::Side;

/// Errors raised by board access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board size must be at least 1, got {0}")]
    InvalidSize(usize),

    /// `attempted` is the side being written, or `None` for a read.
    #[error(
        "cell x{x}y{y} is outside the {size}x{size} board, current value - undefined, new value - {}",
        attempted_label(.attempted)
    )]
    InvalidCoordinate {
        x: usize,
        y: usize,
        size: usize,
        attempted: Option<Side>,
    },

    #[error("cell x{x}y{y} is already occupied, current value - {current}, new value - {attempted}")]
    CellOccupied {
        x: usize,
        y: usize,
        current: Cell,
        attempted: Side,
    },
}

fn attempted_label(attempted: &Option<Side>) -> &'static str {
    match attempted {
        Some(Side::A) => "a",
        Some(Side::B) => "b",
        None => "none",
    }
}

/// Errors that can occur when validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that abort a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("board error: {0}")]
    Board(#[from] BoardError),
}
