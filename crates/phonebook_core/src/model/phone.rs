//! Phone-number grammar validation.
//!
//! # Responsibility
//! - Decide whether a non-empty phone-number string is well formed.
//!
//! # Invariants
//! - The empty string is never valid input here; callers treat "empty" as
//!   the cleared state and do not consult the validator for it.
//! - At most one group may be parenthesized, and only the first or second.

/// Characters that separate digit groups inside a number.
const SEPARATORS: [char; 2] = [' ', '-'];

/// Validates a phone number against the grouping grammar.
///
/// The number may start with a single `+`. The rest is a sequence of groups
/// separated by spaces or hyphens. One group may be fully wrapped in
/// parentheses, but only as the first or second group. Group bodies are
/// ASCII letters and digits; the first group needs at least one character,
/// every later group at least two.
///
/// # Contract
/// - `is_valid_number("")` is `false`.
/// - Never panics, for any input.
pub fn is_valid_number(number: &str) -> bool {
    if number.is_empty() {
        return false;
    }

    let rest = number.strip_prefix('+').unwrap_or(number);
    let mut wrapped_groups = 0usize;
    let mut seen_groups = 0usize;

    // Groups are runs of non-separator characters, so consecutive
    // separators ("123--456") collapse instead of invalidating the number.
    // Looser than single-separator grammars, and intentional.
    for group in rest.split(SEPARATORS).filter(|g| !g.is_empty()) {
        let body = match unwrap_parens(group) {
            Some(inner) => {
                // A wrapped group is only legal as the first or second group.
                if seen_groups > 1 || inner.is_empty() {
                    return false;
                }
                wrapped_groups += 1;
                inner
            }
            None => group,
        };

        // Any paren surviving here is a stray one, e.g. "(12)(34)" or "1)2".
        if body.contains(['(', ')']) {
            return false;
        }
        if !body.chars().all(|c| c.is_ascii_alphanumeric()) {
            return false;
        }

        let min_len = if seen_groups == 0 { 1 } else { 2 };
        if body.len() < min_len {
            return false;
        }
        seen_groups += 1;
    }

    seen_groups > 0 && wrapped_groups <= 1
}

/// Returns the interior of a fully parenthesized group, or `None` when the
/// group is not wrapped.
fn unwrap_parens(group: &str) -> Option<&str> {
    group.strip_prefix('(').and_then(|g| g.strip_suffix(')'))
}
