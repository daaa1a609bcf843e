//! Snapshot persistence entry points.
//!
//! # Responsibility
//! - Save/load the whole phone book as one opaque file.
//! - Keep storage failures from ever corrupting in-memory state.
//!
//! # Invariants
//! - A failed load always degrades to an empty book, never to a fatal
//!   error (see [`snapshot::load_book_or_empty`]).

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod snapshot;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage error for snapshot reads and writes.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Codec(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "snapshot io error: {err}"),
            Self::Codec(err) => write!(f, "snapshot codec error: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Codec(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Codec(value)
    }
}
