//! Free-text search over the phone book.
//!
//! # Responsibility
//! - Expose the query API used by the search command.
//! - Keep result shaping (ordered positions) inside core.

pub mod engine;
