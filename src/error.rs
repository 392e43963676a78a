//! Error type shared by the mission parser and the interpreter.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NavigationError>;

/// Everything that can abort a navigation batch.
///
/// Every variant is a hard validation failure: the batch stops at the first one
/// and no partial output is produced.
#[derive(Debug, Error)]
pub enum NavigationError {
    /// A bounds line or position line does not have the expected shape.
    #[error("malformed input: {0}")]
    Format(String),

    /// A heading code outside `N`, `E`, `S`, `W`.
    #[error("invalid direction code '{0}' (expected one of N, E, S, W)")]
    InvalidDirection(String),

    /// Plateau bounds must both be strictly positive.
    #[error("invalid plateau {max_x}x{max_y}: both bounds must be greater than zero")]
    InvalidPlateau { max_x: i32, max_y: i32 },

    /// A rover started on, or moved to, a cell outside the plateau.
    #[error("rover {rover} is out of bounds at ({x}, {y}) on a {max_x}x{max_y} plateau")]
    OutOfBounds {
        rover: usize,
        x: i32,
        y: i32,
        max_x: i32,
        max_y: i32,
    },

    /// A command character with no registered operation.
    #[error("rover {rover}: invalid command '{command}' (expected L, R or M)")]
    InvalidCommand { rover: usize, command: char },

    /// The mission file could not be read.
    #[error("failed to read mission input: {0}")]
    Io(#[from] std::io::Error),
}
