//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `IsingError` as one
//! variant via `From`, so construction and validation failures raised here
//! keep their identity all the way up to the Task Runner boundary.

use thiserror::Error;

/// Errors raised while building lattices, patterns, and parameter sets.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IsingError {
    #[error("initial lattice is {rows}x{cols}, expected {expected}x{expected}")]
    ShapeMismatch {
        expected: usize,
        rows:     usize,
        cols:     usize,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl IsingError {
    /// Shorthand for building an [`IsingError::InvalidArgument`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        IsingError::InvalidArgument(msg.into())
    }
}

/// Shorthand result type for all `ising-*` crates that only raise core errors.
pub type IsingResult<T> = Result<T, IsingError>;
