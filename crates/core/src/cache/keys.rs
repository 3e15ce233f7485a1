use uuid::Uuid;

use crate::note::normalize_tag_filter;

/// Returns the cache key for an owner's note list.
///
/// Without a tag filter the key is `notes:{owner}:all`. With a filter the
/// tags are sorted and deduplicated before joining, so `[a, b]` and `[b, a]`
/// share `notes:{owner}:tags:a,b`. An empty filter is the same as no filter.
///
/// `%` and `,` inside a tag are percent-encoded, so `["a,b"]` and `["a", "b"]`
/// get different keys.
pub fn notes_key(owner_id: Uuid, tags: Option<&[String]>) -> String {
    match tags {
        Some(tags) if !tags.is_empty() => {
            let encoded: Vec<String> = normalize_tag_filter(tags)
                .iter()
                .map(|tag| encode_tag(tag))
                .collect();
            format!("notes:{}:tags:{}", owner_id, encoded.join(","))
        }
        _ => format!("notes:{}:all", owner_id),
    }
}

fn encode_tag(tag: &str) -> String {
    tag.replace('%', "%25").replace(',', "%2C")
}

/// Returns the pattern matching every cached note list of an owner.
pub fn owner_notes_pattern(owner_id: Uuid) -> String {
    format!("notes:{}:*", owner_id)
}

/// Returns the Redis Set key for tracking cache keys of an owner.
///
/// This set contains every note list key cached for the owner so pattern
/// deletion does not need a Redis SCAN.
pub fn owner_tracking_key(owner_id: Uuid) -> String {
    format!("notes:{}:_keys", owner_id)
}

/// Extracts the owner ID from a cache key, if present.
///
/// # Examples
///
/// ```
/// use quicknotes_core::cache::extract_owner_id_from_key;
/// use uuid::Uuid;
///
/// let id = Uuid::nil();
/// let key = format!("notes:{}:tags:work", id);
/// assert_eq!(extract_owner_id_from_key(&key), Some(id));
///
/// assert_eq!(extract_owner_id_from_key("session:123"), None);
/// ```
pub fn extract_owner_id_from_key(key: &str) -> Option<Uuid> {
    let rest = key.strip_prefix("notes:")?;
    let uuid_part = rest.split(':').next()?;
    Uuid::parse_str(uuid_part).ok()
}

/// Extracts the owner ID from a cache pattern, if present.
///
/// Returns `None` for patterns with a wildcard in the UUID position.
///
/// # Examples
///
/// ```
/// use quicknotes_core::cache::extract_owner_id_from_pattern;
/// use uuid::Uuid;
///
/// let id = Uuid::nil();
/// assert_eq!(extract_owner_id_from_pattern(&format!("notes:{}:*", id)), Some(id));
/// assert_eq!(extract_owner_id_from_pattern("notes:*"), None);
/// ```
pub fn extract_owner_id_from_pattern(pattern: &str) -> Option<Uuid> {
    let rest = pattern.strip_prefix("notes:")?;
    let uuid_part = rest.split(':').next()?;
    if uuid_part.contains('*') {
        return None;
    }
    Uuid::parse_str(uuid_part).ok()
}

/// Checks if a cache key is a note list key (`notes:{id}:all` or `notes:{id}:tags:...`).
///
/// These keys are tracked per owner. The tracking key itself is not.
pub fn is_owner_notes_key(key: &str) -> bool {
    let Some(rest) = key.strip_prefix("notes:") else {
        return false;
    };
    let mut parts = rest.splitn(3, ':');
    let (Some(id), Some(kind)) = (parts.next(), parts.next()) else {
        return false;
    };
    if Uuid::parse_str(id).is_err() {
        return false;
    }
    match kind {
        "all" => parts.next().is_none(),
        "tags" => parts.next().is_some(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_uuid() -> Uuid {
        Uuid::nil()
    }

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_notes_key_without_filter() {
        let key = notes_key(test_uuid(), None);
        assert_eq!(key, "notes:00000000-0000-0000-0000-000000000000:all");
    }

    #[test]
    fn test_notes_key_with_filter() {
        let key = notes_key(test_uuid(), Some(&tags(&["work", "home"])));
        assert_eq!(
            key,
            "notes:00000000-0000-0000-0000-000000000000:tags:home,work"
        );
    }

    #[test]
    fn test_notes_key_keeps_comma_tags_apart() {
        let owner = test_uuid();
        let joined = notes_key(owner, Some(&tags(&["a,b"])));
        let split = notes_key(owner, Some(&tags(&["a", "b"])));

        assert_ne!(joined, split);
        assert_eq!(
            joined,
            "notes:00000000-0000-0000-0000-000000000000:tags:a%2Cb"
        );
        assert_ne!(
            notes_key(owner, Some(&tags(&["a%2Cb"]))),
            joined
        );
    }

    #[test]
    fn test_notes_key_is_order_independent() {
        let owner = Uuid::new_v4();
        assert_eq!(
            notes_key(owner, Some(&tags(&["a", "b"]))),
            notes_key(owner, Some(&tags(&["b", "a"])))
        );
        assert_eq!(
            notes_key(owner, Some(&tags(&["a", "b", "a"]))),
            notes_key(owner, Some(&tags(&["a", "b"])))
        );
    }

    #[test]
    fn test_notes_key_empty_filter_is_all() {
        let owner = Uuid::new_v4();
        assert_eq!(notes_key(owner, Some(&[])), notes_key(owner, None));
    }

    #[test]
    fn test_notes_key_differs_per_owner() {
        assert_ne!(
            notes_key(Uuid::new_v4(), None),
            notes_key(Uuid::new_v4(), None)
        );
    }

    #[test]
    fn test_owner_notes_pattern() {
        assert_eq!(
            owner_notes_pattern(test_uuid()),
            "notes:00000000-0000-0000-0000-000000000000:*"
        );
    }

    #[test]
    fn test_owner_tracking_key() {
        assert_eq!(
            owner_tracking_key(test_uuid()),
            "notes:00000000-0000-0000-0000-000000000000:_keys"
        );
    }

    #[test]
    fn test_extract_owner_id_from_key() {
        let id = Uuid::new_v4();
        assert_eq!(extract_owner_id_from_key(&notes_key(id, None)), Some(id));
        assert_eq!(
            extract_owner_id_from_key(&notes_key(id, Some(&tags(&["x"])))),
            Some(id)
        );
        assert_eq!(extract_owner_id_from_key("notes:not-a-uuid:all"), None);
        assert_eq!(extract_owner_id_from_key("user:123"), None);
    }

    #[test]
    fn test_extract_owner_id_from_pattern() {
        let id = Uuid::new_v4();
        assert_eq!(
            extract_owner_id_from_pattern(&owner_notes_pattern(id)),
            Some(id)
        );
        assert_eq!(extract_owner_id_from_pattern("notes:*:all"), None);
        assert_eq!(extract_owner_id_from_pattern("user:*"), None);
    }

    #[test]
    fn test_is_owner_notes_key() {
        let id = test_uuid();
        assert!(is_owner_notes_key(&notes_key(id, None)));
        assert!(is_owner_notes_key(&notes_key(id, Some(&tags(&["a"])))));

        assert!(!is_owner_notes_key(&owner_tracking_key(id)));
        assert!(!is_owner_notes_key(&format!("notes:{}", id)));
        assert!(!is_owner_notes_key(&format!("notes:{}:all:extra", id)));
        assert!(!is_owner_notes_key("notes:not-a-uuid:all"));
        assert!(!is_owner_notes_key("user:123"));
    }
}
