//! The phone book: an ordered, position-addressed record collection.
//!
//! # Responsibility
//! - Own the record sequence; insertion order is the only order.
//!
//! # Invariants
//! - Positions shift down after a removal; indices are only stable between
//!   mutations, so callers re-list before addressing by position.

use crate::model::record::Record;
use serde::{Deserialize, Serialize};

/// Ordered collection of all records. Serializes as a plain array, which is
/// the whole snapshot unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneBook {
    records: Vec<Record>,
}

impl PhoneBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record at the end of the book.
    pub fn add(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Removes the record at `index`, shifting later records down.
    ///
    /// Returns `None` when the index is out of bounds; callers are expected
    /// to bounds-check against [`PhoneBook::len`] first.
    pub fn remove_at(&mut self, index: usize) -> Option<Record> {
        if index < self.records.len() {
            Some(self.records.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Record> {
        self.records.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}
