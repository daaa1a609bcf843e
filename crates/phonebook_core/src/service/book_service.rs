//! Phone book session service.
//!
//! # Responsibility
//! - Own the single in-process phone book for one run (the session object
//!   that replaces process-wide globals).
//! - Expose exactly the entry points the command loop dispatches to.
//!
//! # Invariants
//! - After any mutating call the book is self-consistent and ready to be
//!   snapshotted.
//! - Index arguments are 0-based book positions; out-of-range indices
//!   yield `None`/`false`, they never panic. Callers bounds-check against
//!   `count()` before addressing.

use crate::model::book::PhoneBook;
use crate::model::record::{FieldError, Organization, Person, Record, SetFieldOutcome};
use crate::search::engine::search;
use log::debug;

/// Request model for adding a person record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonInput {
    pub name: String,
    pub surname: String,
    pub birth_date: String,
    pub gender: String,
    pub number: String,
}

/// Request model for adding an organization record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationInput {
    pub name: String,
    pub address: String,
    pub number: String,
}

/// Result of an add operation: where the record landed, plus every
/// validation notice collected while constructing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub index: usize,
    pub issues: Vec<FieldError>,
}

/// One row of a list or search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub index: usize,
    pub name: String,
}

/// Session object owning the phone book and serving the command loop.
#[derive(Debug, Default)]
pub struct BookService {
    book: PhoneBook,
}

impl BookService {
    /// Starts a session with an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session over an existing book (e.g. a loaded snapshot).
    pub fn with_book(book: PhoneBook) -> Self {
        Self { book }
    }

    /// Adds a person built from the given field values.
    ///
    /// Invalid number/birth/gender input is cleared by the record and
    /// reported back in [`AddOutcome::issues`]; the record is added either
    /// way.
    pub fn add_person(&mut self, input: &PersonInput) -> AddOutcome {
        let (person, issues) = Person::new(
            &input.name,
            &input.surname,
            &input.birth_date,
            &input.gender,
            &input.number,
        );
        self.book.add(Record::Person(person));
        let index = self.book.len() - 1;
        debug!(
            "event=record_added module=service kind=person index={} issues={}",
            index,
            issues.len()
        );
        AddOutcome { index, issues }
    }

    /// Adds an organization built from the given field values.
    pub fn add_organization(&mut self, input: &OrganizationInput) -> AddOutcome {
        let (org, issues) = Organization::new(&input.name, &input.address, &input.number);
        self.book.add(Record::Organization(org));
        let index = self.book.len() - 1;
        debug!(
            "event=record_added module=service kind=organization index={} issues={}",
            index,
            issues.len()
        );
        AddOutcome { index, issues }
    }

    /// Lists every record as `(index, list name)` in book order.
    pub fn list(&self) -> Vec<ListEntry> {
        self.book
            .iter()
            .enumerate()
            .map(|(index, record)| ListEntry {
                index,
                name: record.list_name(),
            })
            .collect()
    }

    /// Searches all records, returning matches in ascending book order.
    pub fn search(&self, query: &str) -> Vec<ListEntry> {
        search(query, &self.book)
            .into_iter()
            .map(|index| ListEntry {
                index,
                name: self
                    .book
                    .get(index)
                    .map(Record::list_name)
                    .unwrap_or_default(),
            })
            .collect()
    }

    /// Full field dump for one record, or `None` when out of range.
    pub fn record_details(&self, index: usize) -> Option<Vec<(&'static str, String)>> {
        self.book.get(index).map(Record::info_lines)
    }

    /// Editable field names of one record, or `None` when out of range.
    pub fn editable_fields(&self, index: usize) -> Option<&'static [&'static str]> {
        self.book.get(index).map(Record::editable_fields)
    }

    /// Routes a value to one record's named field.
    ///
    /// Returns `None` for an out-of-range index; otherwise the record's
    /// [`SetFieldOutcome`], including the silent `Ignored` no-op for
    /// unknown field names.
    pub fn edit_field(&mut self, index: usize, field: &str, value: &str) -> Option<SetFieldOutcome> {
        let outcome = self.book.get_mut(index)?.set_field(field, value);
        debug!(
            "event=record_edited module=service index={} field={} outcome={:?}",
            index, field, outcome
        );
        Some(outcome)
    }

    /// Deletes one record by position. Returns whether a record was removed.
    pub fn delete(&mut self, index: usize) -> bool {
        let removed = self.book.remove_at(index).is_some();
        debug!(
            "event=record_deleted module=service index={} removed={}",
            index, removed
        );
        removed
    }

    /// Number of records in the book.
    pub fn count(&self) -> usize {
        self.book.len()
    }

    /// Read access to the underlying book, e.g. for snapshotting.
    pub fn book(&self) -> &PhoneBook {
        &self.book
    }

    /// Consumes the session, yielding the book.
    pub fn into_book(self) -> PhoneBook {
        self.book
    }
}
