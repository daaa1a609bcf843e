//! Core domain logic for the phonebook contact manager.
//! This crate is the single source of truth for record validation rules.

pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::PhoneBook;
pub use model::phone::is_valid_number;
pub use model::record::{
    FieldError, Gender, Organization, Person, Record, SetFieldOutcome, NO_DATA, NO_NUMBER,
};
pub use search::engine::search;
pub use service::book_service::{
    AddOutcome, BookService, ListEntry, OrganizationInput, PersonInput,
};
pub use store::snapshot::{load_book, load_book_or_empty, save_book};
pub use store::{StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
