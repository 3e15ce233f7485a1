//! Glob matching for cache keys.
//!
//! Patterns support `*` as a wildcard matching any sequence of characters,
//! which is all the owner-prefix invalidation needs.

/// Checks if a cache key matches a glob pattern.
///
/// # Examples
///
/// ```
/// use quicknotes_core::cache::pattern_matches;
///
/// assert!(pattern_matches("notes:42:all", "notes:42:all"));
/// assert!(pattern_matches("notes:42:*", "notes:42:tags:home,work"));
/// assert!(pattern_matches("notes:*:all", "notes:7:all"));
/// assert!(!pattern_matches("notes:42:*", "notes:7:all"));
/// ```
pub fn pattern_matches(pattern: &str, key: &str) -> bool {
    let mut segments = pattern.split('*');

    // The text before the first wildcard anchors the start of the key.
    let Some(head) = segments.next() else {
        return key.is_empty();
    };
    let Some(mut remaining) = key.strip_prefix(head) else {
        return false;
    };

    let rest: Vec<&str> = segments.collect();
    let Some((tail, middle)) = rest.split_last() else {
        return remaining.is_empty();
    };

    for segment in middle {
        match remaining.find(segment) {
            Some(pos) => remaining = &remaining[pos + segment.len()..],
            None => return false,
        }
    }

    // The text after the last wildcard anchors the end.
    remaining.ends_with(tail)
}
