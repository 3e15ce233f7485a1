//! Note CRUD handlers.
//!
//! Every route requires a bearer token. The owner of each operation is the
//! token's user, never a value supplied in the request.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use quicknotes_core::note::{CreateNoteRequest, ListNotesQuery, Note, UpdateNoteRequest};

use crate::{auth::CurrentUser, handlers::AppError, state::AppState};

/// Error response with message (for malformed requests).
fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let msg = message.into();
    tracing::warn!(status = %status, message = %msg, "API error");
    (status, msg).into_response()
}

fn note_id(path: Result<Path<Uuid>, PathRejection>) -> Result<Uuid, Response> {
    path.map(|Path(id)| id).map_err(|e| {
        error_response(StatusCode::BAD_REQUEST, format!("Invalid note id: {e}"))
    })
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    body.map(|Json(payload)| payload).map_err(|e| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Failed to parse body: {e}"),
        )
    })
}

/// List the caller's notes (GET /notes?tags=a,b).
pub async fn list_notes(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Query(query): Query<ListNotesQuery>,
) -> Result<Json<Vec<Note>>, AppError> {
    let tags = query.tag_filter();
    let notes = state.notes.find_all(user.id, tags.as_deref()).await?;

    Ok(Json(notes))
}

/// Create a note (POST /notes).
pub async fn create_note(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    body: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<Response, Response> {
    let payload = json_body(body)?;

    let note = state
        .notes
        .create(payload, user.id)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    Ok((StatusCode::CREATED, Json(note)).into_response())
}

/// Get one of the caller's notes (GET /notes/{id}).
pub async fn get_note(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Note>, Response> {
    let id = note_id(path)?;

    let note = state
        .notes
        .find_one(id, user.id)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    Ok(Json(note))
}

/// Partially update one of the caller's notes (PATCH /notes/{id}).
pub async fn update_note(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> Result<Json<Note>, Response> {
    let id = note_id(path)?;
    let payload = json_body(body)?;

    let note = state
        .notes
        .update(id, payload, user.id)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    Ok(Json(note))
}

/// Delete one of the caller's notes (DELETE /notes/{id}).
pub async fn delete_note(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, Response> {
    let id = note_id(path)?;

    state
        .notes
        .remove(id, user.id)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    Ok(StatusCode::NO_CONTENT)
}
