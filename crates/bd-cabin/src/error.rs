//! Cabin-subsystem error type.

use thiserror::Error;

/// Errors produced by `bd-cabin`.
#[derive(Debug, Error)]
pub enum CabinError {
    #[error("row {row} has {columns} seat columns; at most 26 (A-Z) are supported")]
    TooManyColumns { row: u32, columns: usize },

    #[error("layout parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CabinResult<T> = Result<T, CabinError>;
