// error.rs - Error type for grid construction and seeding

use thiserror::Error;

/// Errors raised while building a grid or simulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// Width or height is zero, or the cell count overflows `usize`.
    #[error("invalid grid dimension {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// Exact-coordinate write outside `[0, width) x [0, height)`.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    IndexOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// No catalog pattern with this name.
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),
}

pub type Result<T> = std::result::Result<T, LifeError>;
