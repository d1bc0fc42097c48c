//! Error types for edit history operations.

use std::fmt;
use std::io;

use crate::edit::EditKind;

/// Result type alias for edit history operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Which way through the history an operation was trying to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Undo,
    Redo,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undo => f.write_str("undo"),
            Self::Redo => f.write_str("redo"),
        }
    }
}

/// Error type for edit history operations.
#[derive(Debug)]
pub enum Error {
    /// Undo or redo requested with nothing available in that direction.
    NoHistory(Direction),
    /// The editing surface refused to apply a replayed edit.
    Replay {
        offset: usize,
        kind: EditKind,
        reason: String,
    },
    /// An edit addressed text outside the document.
    OutOfBounds { offset: usize, len: usize },
    /// I/O error from the demo driver.
    Io(io::Error),
}

impl Error {
    /// Create a replay failure for an edit of `kind` at `offset`.
    pub fn replay(offset: usize, kind: EditKind, reason: impl Into<String>) -> Self {
        Self::Replay {
            offset,
            kind,
            reason: reason.into(),
        }
    }

    /// True for the recoverable "nothing to undo/redo" condition.
    #[must_use]
    pub fn is_no_history(&self) -> bool {
        matches!(self, Self::NoHistory(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoHistory(direction) => write!(f, "nothing to {direction}"),
            Self::Replay {
                offset,
                kind,
                reason,
            } => write!(f, "cannot replay {kind} at offset {offset}: {reason}"),
            Self::OutOfBounds { offset, len } => {
                write!(f, "offset {offset} out of bounds for document of {len} chars")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
