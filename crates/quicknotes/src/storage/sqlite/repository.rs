//! SQLite implementation of [`NoteRepository`].

use async_trait::async_trait;
use tokio_rusqlite::Connection;
use uuid::Uuid;

use quicknotes_core::note::Note;
use quicknotes_core::storage::{NoteRepository, RepositoryError, Result};

use super::conversions::{format_datetime, row_to_note, tags_to_json};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Turns "0 rows affected" into a not-found error.
fn expect_one_row(rows: usize) -> std::result::Result<(), tokio_rusqlite::Error> {
    if rows == 0 {
        Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
    } else {
        Ok(())
    }
}

/// SQLite-backed note storage.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens (or creates) the database file at `path` and applies the schema.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;
        tracing::info!(path, "Opened SQLite database");

        Ok(Self { conn })
    }

    /// Creates a repository over a private in-memory database.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl NoteRepository for SqliteRepository {
    async fn get_note(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Note>> {
        let id_str = id.to_string();
        let owner_str = owner_id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_NOTE_BY_ID_AND_OWNER)
                    .map_err(wrap_err)?;
                match stmt.query_row([&id_str, &owner_str], row_to_note) {
                    Ok(note) => Ok(Some(note)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Note", id.to_string()))
    }

    async fn get_notes_by_owner(&self, owner_id: Uuid, tags: &[String]) -> Result<Vec<Note>> {
        let sql = schema::select_notes_by_owner(tags.len());
        let mut params = Vec::with_capacity(tags.len() + 1);
        params.push(owner_id.to_string());
        params.extend(tags.iter().cloned());

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql).map_err(wrap_err)?;
                let rows = stmt
                    .query_map(rusqlite::params_from_iter(params.iter()), row_to_note)
                    .map_err(wrap_err)?;

                let mut notes = Vec::new();
                for row_result in rows {
                    notes.push(row_result.map_err(wrap_err)?);
                }
                Ok(notes)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Note"))
    }

    async fn create_note(&self, note: &Note) -> Result<()> {
        let id = note.id.to_string();
        let user_id = note.user_id.to_string();
        let title = note.title.clone();
        let content = note.content.clone();
        let tags = tags_to_json(&note.tags)?;
        let created_at = format_datetime(&note.created_at);
        let updated_at = format_datetime(&note.updated_at);
        let note_id = id.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_NOTE,
                    rusqlite::params![id, user_id, title, content, tags, created_at, updated_at],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Note", note_id))
    }

    async fn update_note(&self, note: &Note) -> Result<()> {
        let id = note.id.to_string();
        let title = note.title.clone();
        let content = note.content.clone();
        let tags = tags_to_json(&note.tags)?;
        let updated_at = format_datetime(&note.updated_at);
        let note_id = id.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_NOTE,
                        rusqlite::params![id, title, content, tags, updated_at],
                    )
                    .map_err(wrap_err)?;
                expect_one_row(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Note", note_id))
    }

    async fn delete_note(&self, id: Uuid) -> Result<()> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_NOTE, [&id_str])
                    .map_err(wrap_err)?;
                expect_one_row(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Note", id.to_string()))
    }
}
