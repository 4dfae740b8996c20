//! Building blocks for the `users.name` substring predicate.
//!
//! The parameter-bound lookup escapes LIKE metacharacters so the fragment is
//! matched literally; the concatenating lookup uses the raw fragment.

/// Escape character declared in the `ESCAPE` clause of the bound query.
pub const LIKE_ESCAPE: char = '\\';

/// Characters that change the meaning of a fragment once it is pasted into a
/// quoted SQL literal or a LIKE pattern.
const QUERY_CONTROL: [char; 4] = ['\'', '%', '_', LIKE_ESCAPE];

/// Escape `%`, `_` and the escape character itself.
pub fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for ch in fragment.chars() {
        if matches!(ch, '%' | '_') || ch == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(ch);
    }
    escaped
}

/// Bound value for `name LIKE ?1 ESCAPE '\'`.
pub fn like_pattern(fragment: &str) -> String {
    format!("%{}%", escape_like(fragment))
}

/// True when the fragment carries nothing the query layer would interpret,
/// so both lookup paths must agree on it.
pub fn is_plain_fragment(fragment: &str) -> bool {
    !fragment.chars().any(|ch| QUERY_CONTROL.contains(&ch))
}
