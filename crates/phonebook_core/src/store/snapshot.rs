//! Whole-book snapshot save/load.
//!
//! # Responsibility
//! - Serialize the phone book to a single JSON file and back.
//! - Emit `snapshot_*` logging events around each file touch.
//!
//! # Invariants
//! - Snapshots carry every field value and both timestamps verbatim, so
//!   `load(save(book))` reproduces the book exactly.

use crate::model::book::PhoneBook;
use crate::store::StoreResult;
use log::{info, warn};
use std::fs;
use std::path::Path;

/// Writes the whole book to `path`, overwriting any previous snapshot.
pub fn save_book(path: impl AsRef<Path>, book: &PhoneBook) -> StoreResult<()> {
    let path = path.as_ref();
    let encoded = serde_json::to_vec_pretty(book)?;
    fs::write(path, encoded)?;
    info!(
        "event=snapshot_save module=store status=ok records={} path={}",
        book.len(),
        path.display()
    );
    Ok(())
}

/// Reads a book back from `path`, failing on any io or decode problem.
///
/// Most callers want [`load_book_or_empty`]; this strict variant exists for
/// tests and tooling that must distinguish "missing" from "corrupt".
pub fn load_book(path: impl AsRef<Path>) -> StoreResult<PhoneBook> {
    let encoded = fs::read(path.as_ref())?;
    let book: PhoneBook = serde_json::from_slice(&encoded)?;
    Ok(book)
}

/// Reads a book from `path`, degrading every failure to an empty book.
///
/// Missing file, unreadable file and corrupt content are all recoverable
/// states for a single-user tool; the detail is surfaced only as a log
/// diagnostic and never affects in-memory state.
pub fn load_book_or_empty(path: impl AsRef<Path>) -> PhoneBook {
    let path = path.as_ref();
    match load_book(path) {
        Ok(book) => {
            info!(
                "event=snapshot_load module=store status=ok records={} path={}",
                book.len(),
                path.display()
            );
            book
        }
        Err(err) => {
            warn!(
                "event=snapshot_load module=store status=fallback_empty path={} error={}",
                path.display(),
                err
            );
            PhoneBook::new()
        }
    }
}
