//! Core error type.
//!
//! Sub-crates define their own error enums; `CoreError` covers what can go
//! wrong with the primitives in this crate (mostly configuration).

use thiserror::Error;

/// Errors produced by `bd-core`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid stow distribution: {0}")]
    InvalidStow(String),
}

/// Shorthand result type for `bd-core`.
pub type CoreResult<T> = Result<T, CoreError>;
