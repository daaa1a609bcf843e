//! Regex search with literal fallback.
//!
//! # Responsibility
//! - Match a user query against every record's search text.
//! - Return matching positions in ascending book order.
//!
//! # Invariants
//! - Search never fails; a malformed pattern degrades to a literal
//!   substring query instead of surfacing an error.
//! - Matching is case-insensitive and partial (found anywhere in the text).

use crate::model::book::PhoneBook;
use log::debug;
use regex::{Regex, RegexBuilder};

/// Compiled form of a user query.
enum Matcher {
    Pattern(Regex),
    /// Lowercased literal, used when even the escaped pattern will not
    /// compile (e.g. the query blows the regex size limit).
    Literal(String),
}

impl Matcher {
    fn compile(query: &str) -> Self {
        if let Ok(re) = case_insensitive(query) {
            return Self::Pattern(re);
        }
        // Malformed pattern: the user typed plain text, not regex syntax.
        if let Ok(re) = case_insensitive(&regex::escape(query)) {
            return Self::Pattern(re);
        }
        Self::Literal(query.to_lowercase())
    }

    fn is_match(&self, text: &str) -> bool {
        match self {
            Self::Pattern(re) => re.is_match(text),
            // Search text is already lowercased by the record.
            Self::Literal(literal) => text.contains(literal.as_str()),
        }
    }
}

fn case_insensitive(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// Finds every record whose search text contains a match for `query`.
///
/// Indices come back in ascending book order. Any input is acceptable:
/// invalid regex syntax falls back to a literal substring match.
pub fn search(query: &str, book: &PhoneBook) -> Vec<usize> {
    let matcher = Matcher::compile(query);
    let hits: Vec<usize> = book
        .iter()
        .enumerate()
        .filter(|(_, record)| matcher.is_match(&record.search_text()))
        .map(|(index, _)| index)
        .collect();

    debug!(
        "event=search module=search status=ok query_len={} hits={}",
        query.len(),
        hits.len()
    );
    hits
}
