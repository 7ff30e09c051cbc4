//! Error types for notation operations

use std::fmt;
use thiserror::Error;

/// Which side of a parenthesis pair was left without a partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// A `(` that never closes
    Open,
    /// A `)` with nothing left to close
    Close,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Open => f.write_str("'('"),
            Side::Close => f.write_str("')'"),
        }
    }
}

/// Errors that can occur during notation operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// The input is not a balanced bracket string
    #[error("unbalanced parentheses: unmatched {side} at position {position}")]
    UnbalancedParens { position: usize, side: Side },
    /// Notation not found in registry
    #[error("Notation '{0}' not found")]
    NotationNotFound(String),
    /// Notation does not support the requested direction
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}

impl NotationError {
    pub fn is_unbalanced(&self) -> bool {
        matches!(self, NotationError::UnbalancedParens { .. })
    }
}
