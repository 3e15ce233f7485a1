//! SQLite schema definitions and SQL query constants.
//!
//! Pure data plus one query builder, no I/O.

/// SQL statement to create all tables.
///
/// Tags are stored as a JSON array so the tag filter can use `json_each`.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    tags TEXT NOT NULL DEFAULT '[]',
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_notes_user_updated ON notes(user_id, updated_at DESC);
"#;

const NOTE_COLUMNS: &str = "id, user_id, title, content, tags, created_at, updated_at";

pub const INSERT_NOTE: &str = r#"
INSERT INTO notes (id, user_id, title, content, tags, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
"#;

pub const SELECT_NOTE_BY_ID_AND_OWNER: &str = r#"
SELECT id, user_id, title, content, tags, created_at, updated_at
FROM notes
WHERE id = ?1 AND user_id = ?2
"#;

pub const UPDATE_NOTE: &str = r#"
UPDATE notes
SET title = ?2, content = ?3, tags = ?4, updated_at = ?5
WHERE id = ?1
"#;

pub const DELETE_NOTE: &str = r#"
DELETE FROM notes WHERE id = ?1
"#;

/// Builds the owner listing query for `tag_count` tag filters.
///
/// Parameter `?1` is the owner ID and `?2..` are the tags. Each tag adds an
/// `EXISTS` clause requiring it to be a substring of at least one stored tag.
/// `instr` compares bytes, so matching is case-sensitive and `%`/`_` have no
/// special meaning.
pub fn select_notes_by_owner(tag_count: usize) -> String {
    let mut sql = format!("SELECT {NOTE_COLUMNS}\nFROM notes\nWHERE user_id = ?1");
    for param in 2..tag_count + 2 {
        sql.push_str(&format!(
            "\n  AND EXISTS (SELECT 1 FROM json_each(notes.tags) WHERE instr(json_each.value, ?{param}) > 0)"
        ));
    }
    sql.push_str("\nORDER BY updated_at DESC");
    sql
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_valid_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS notes"));
        assert!(CREATE_TABLES.contains("idx_notes_user_updated"));
    }

    #[test]
    fn test_queries_are_scoped() {
        assert!(SELECT_NOTE_BY_ID_AND_OWNER.contains("user_id = ?2"));
        assert!(UPDATE_NOTE.contains("WHERE id = ?1"));
        assert!(DELETE_NOTE.contains("WHERE id = ?1"));
    }

    #[test]
    fn test_select_without_tags() {
        let sql = select_notes_by_owner(0);
        assert!(sql.contains("WHERE user_id = ?1"));
        assert!(!sql.contains("json_each"));
        assert!(sql.ends_with("ORDER BY updated_at DESC"));
    }

    #[test]
    fn test_select_with_tags_adds_one_clause_per_tag() {
        let sql = select_notes_by_owner(2);
        assert_eq!(sql.matches("EXISTS").count(), 2);
        assert!(sql.contains("instr(json_each.value, ?2)"));
        assert!(sql.contains("instr(json_each.value, ?3)"));
        assert!(!sql.contains("?4"));
    }
}
