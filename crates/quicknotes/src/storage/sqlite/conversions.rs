//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and notes.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Row;
use uuid::Uuid;

use quicknotes_core::note::Note;
use quicknotes_core::storage::RepositoryError;

/// Convert a SQLite row to a Note.
///
/// Expected columns: id, user_id, title, content, tags, created_at, updated_at
pub fn row_to_note(row: &Row) -> rusqlite::Result<Note> {
    let id: String = row.get(0)?;
    let user_id: String = row.get(1)?;
    let tags: String = row.get(4)?;
    let created_at: String = row.get(5)?;
    let updated_at: String = row.get(6)?;

    Ok(Note {
        id: parse_uuid(0, &id)?,
        user_id: parse_uuid(1, &user_id)?,
        title: row.get(2)?,
        content: row.get(3)?,
        tags: parse_tags(4, &tags)?,
        created_at: parse_datetime(5, &created_at)?,
        updated_at: parse_datetime(6, &updated_at)?,
    })
}

/// Encodes tags as the JSON array stored in the `tags` column.
pub fn tags_to_json(tags: &[String]) -> Result<String, RepositoryError> {
    serde_json::to_string(tags).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// Formats a timestamp for storage.
///
/// Always UTC with six fractional digits (`2024-01-01T00:00:00.000000Z`), so
/// the strings sort in time order and `ORDER BY updated_at` is chronological.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn conversion_error(
    column: usize,
    err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_uuid(column: usize, s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| conversion_error(column, e))
}

fn parse_tags(column: usize, s: &str) -> rusqlite::Result<Vec<String>> {
    serde_json::from_str(s).map_err(|e| conversion_error(column, e))
}

fn parse_datetime(column: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| conversion_error(column, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime_is_fixed_width() {
        let whole = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let fraction = whole + chrono::TimeDelta::microseconds(5);

        assert_eq!(format_datetime(&whole), "2024-01-01T00:00:00.000000Z");
        assert_eq!(format_datetime(&fraction), "2024-01-01T00:00:00.000005Z");
        assert!(format_datetime(&whole) < format_datetime(&fraction));
    }

    #[test]
    fn test_parse_datetime_round_trip() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 45).unwrap()
            + chrono::TimeDelta::microseconds(123_456);
        assert_eq!(parse_datetime(0, &format_datetime(&dt)).unwrap(), dt);
    }

    #[test]
    fn test_parse_datetime_invalid() {
        assert!(parse_datetime(5, "yesterday").is_err());
    }

    #[test]
    fn test_tags_json() {
        let tags = vec!["work".to_string(), "50%".to_string()];
        let json = tags_to_json(&tags).unwrap();
        assert_eq!(json, r#"["work","50%"]"#);
        assert_eq!(parse_tags(4, &json).unwrap(), tags);
        assert_eq!(tags_to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_parse_uuid_invalid() {
        let err = parse_uuid(0, "not-a-uuid").unwrap_err();
        assert!(matches!(
            err,
            rusqlite::Error::FromSqlConversionFailure(0, _, _)
        ));
    }
}
