//! Handlers for the `/notes` resource.
//!
//! Each handler validates its input, calls [`NoteRepo`], and maps the
//! outcome to a status code plus JSON body. Storage failures propagate as
//! [`AppError::Database`] and surface as a sanitized 500.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use psnotes_core::error::CoreError;
use psnotes_core::notes::NOTE_ENTITY;
use psnotes_core::types::DbId;
use psnotes_db::models::note::{NoteFilter, NotePayload};
use psnotes_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiQuery};
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: NOTE_ENTITY,
        id,
    })
}

/// POST /notes
///
/// Create a note. Category defaults to `Others` when omitted; an unknown
/// category is rejected.
pub async fn create_note(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NotePayload>,
) -> AppResult<impl IntoResponse> {
    let dto = input.into_create()?;
    let note = NoteRepo::create(&state.pool, &dto).await?;

    tracing::info!(note_id = %note.id, category = %note.category, "Note created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Note created successfully.",
            id: note.id,
        }),
    ))
}

/// GET /notes?search=&category=
///
/// List notes, newest first. `search` matches title or category as a
/// substring; `category` must match exactly. A repeated parameter uses its
/// first value.
pub async fn list_notes(
    State(state): State<AppState>,
    ApiQuery(pairs): ApiQuery<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    let filter = NoteFilter::from_query_pairs(pairs);
    let notes = NoteRepo::list(&state.pool, &filter).await?;

    tracing::debug!(
        count = notes.len(),
        search = ?filter.search,
        category = ?filter.category,
        "Listed notes",
    );

    Ok(Json(notes))
}

/// PUT /notes/{id}
///
/// Replace title, description and category. An absent or empty category
/// resets the note to `Others`.
pub async fn update_note(
    State(state): State<AppState>,
    Path(note_id): Path<DbId>,
    ApiJson(input): ApiJson<NotePayload>,
) -> AppResult<impl IntoResponse> {
    let dto = input.into_update()?;
    let note = NoteRepo::update(&state.pool, &note_id, &dto)
        .await?
        .ok_or_else(|| not_found(note_id.clone()))?;

    tracing::info!(note_id = %note.id, category = %note.category, "Note updated");

    Ok(Json(MessageResponse {
        message: "Note updated successfully.",
    }))
}

/// DELETE /notes/{id}
///
/// Permanently delete a note. Deleting a missing note is a 404.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(note_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = NoteRepo::delete(&state.pool, &note_id).await?;

    if !deleted {
        return Err(not_found(note_id));
    }

    tracing::info!(note_id = %note_id, "Note deleted");

    Ok(Json(MessageResponse {
        message: "Note deleted successfully.",
    }))
}
