use super::error::NoteError;
use super::types::Note;

/// Validates a note before it is persisted.
pub fn validate_note(note: &Note) -> Result<(), NoteError> {
    if note.title.trim().is_empty() {
        return Err(NoteError::EmptyTitle);
    }
    if note.content.trim().is_empty() {
        return Err(NoteError::EmptyContent);
    }
    Ok(())
}

/// Server-side tag filter.
///
/// A note qualifies when every requested tag is a case-sensitive substring of
/// at least one of its stored tags. `"wor"` matches a note tagged `"work"`.
/// An empty filter matches every note.
pub fn matches_tag_substrings(note: &Note, tags: &[String]) -> bool {
    tags.iter()
        .all(|wanted| note.tags.iter().any(|tag| tag.contains(wanted.as_str())))
}

/// Client-side tag filter.
///
/// A note qualifies only when every requested tag equals one of its stored
/// tags. `"wor"` does not match a note tagged `"work"`. This is stricter than
/// [`matches_tag_substrings`], so the client may hide notes the server returned.
pub fn matches_exact_tags(note: &Note, tags: &[String]) -> bool {
    tags.iter().all(|wanted| note.tags.contains(wanted))
}

/// Keeps the notes that carry every tag in `tags` exactly.
pub fn filter_notes_by_exact_tags<'a>(notes: &'a [Note], tags: &[String]) -> Vec<&'a Note> {
    notes
        .iter()
        .filter(|note| matches_exact_tags(note, tags))
        .collect()
}

/// Splits a comma separated `tags` query value.
///
/// Segments are trimmed and empty segments are dropped, so `" a, ,b "`
/// becomes `["a", "b"]`.
pub fn parse_tags_query(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Sorts and deduplicates a tag filter so equivalent filters compare equal.
pub fn normalize_tag_filter(tags: &[String]) -> Vec<String> {
    let mut normalized = tags.to_vec();
    normalized.sort();
    normalized.dedup();
    normalized
}

/// Orders notes by `updated_at`, most recent first.
pub fn sort_by_recency(notes: &mut [Note]) {
    notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn note_with_tags(values: &[&str]) -> Note {
        Note::new(Uuid::new_v4(), "Title", "Content").with_tags(values.iter().copied())
    }

    #[test]
    fn test_validate_note() {
        assert!(validate_note(&note_with_tags(&[])).is_ok());

        let mut note = note_with_tags(&[]);
        note.title = " ".to_string();
        assert_eq!(validate_note(&note), Err(NoteError::EmptyTitle));

        let mut note = note_with_tags(&[]);
        note.content = String::new();
        assert_eq!(validate_note(&note), Err(NoteError::EmptyContent));
    }

    #[test]
    fn test_substring_match() {
        let note = note_with_tags(&["work", "urgent"]);
        assert!(matches_tag_substrings(&note, &tags(&["wor"])));
        assert!(matches_tag_substrings(&note, &tags(&["work", "gent"])));
        assert!(!matches_tag_substrings(&note, &tags(&["home"])));
        assert!(!matches_tag_substrings(&note, &tags(&["wor", "home"])));
    }

    #[test]
    fn test_substring_match_is_case_sensitive() {
        let note = note_with_tags(&["Work"]);
        assert!(!matches_tag_substrings(&note, &tags(&["work"])));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let note = note_with_tags(&[]);
        assert!(matches_tag_substrings(&note, &[]));
        assert!(matches_exact_tags(&note, &[]));
    }

    #[test]
    fn test_exact_match() {
        let note = note_with_tags(&["work"]);
        assert!(matches_exact_tags(&note, &tags(&["work"])));
        assert!(!matches_exact_tags(&note, &tags(&["wor"])));
        assert!(!matches_exact_tags(&note, &tags(&["work", "home"])));
    }

    #[test]
    fn test_server_and_client_filters_disagree_on_substrings() {
        let note = note_with_tags(&["work"]);
        let filter = tags(&["wor"]);
        assert!(matches_tag_substrings(&note, &filter));
        assert!(!matches_exact_tags(&note, &filter));
    }

    #[test]
    fn test_filter_notes_by_exact_tags() {
        let notes = vec![
            note_with_tags(&["work", "urgent"]),
            note_with_tags(&["work"]),
            note_with_tags(&["home"]),
        ];

        let filtered = filter_notes_by_exact_tags(&notes, &tags(&["work"]));
        assert_eq!(filtered.len(), 2);

        let filtered = filter_notes_by_exact_tags(&notes, &tags(&["work", "urgent"]));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, notes[0].id);
    }

    #[test]
    fn test_parse_tags_query() {
        assert_eq!(parse_tags_query("a,b,c"), tags(&["a", "b", "c"]));
        assert_eq!(parse_tags_query(" a , b "), tags(&["a", "b"]));
        assert_eq!(parse_tags_query("a,,b,"), tags(&["a", "b"]));
        assert!(parse_tags_query("").is_empty());
        assert!(parse_tags_query(" , ").is_empty());
    }

    #[test]
    fn test_normalize_tag_filter() {
        assert_eq!(normalize_tag_filter(&tags(&["b", "a"])), tags(&["a", "b"]));
        assert_eq!(
            normalize_tag_filter(&tags(&["b", "a", "b"])),
            tags(&["a", "b"])
        );
        assert!(normalize_tag_filter(&[]).is_empty());
    }

    #[test]
    fn test_sort_by_recency() {
        let early = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        let old = note_with_tags(&[]).with_timestamps(early, early);
        let recent = note_with_tags(&[]).with_timestamps(early, late);
        let mut notes = vec![old.clone(), recent.clone()];

        sort_by_recency(&mut notes);
        assert_eq!(notes[0].id, recent.id);
        assert_eq!(notes[1].id, old.id);
    }
}
