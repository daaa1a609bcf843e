//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical record shapes and their validation rules.
//! - Keep the string-keyed field protocol in one place.
//!
//! # Invariants
//! - Records exist only inside a [`book::PhoneBook`]; positions are the
//!   addressing scheme, there are no record identifiers.
//! - A stored phone number is always empty or currently valid.

pub mod book;
pub mod phone;
pub mod record;
