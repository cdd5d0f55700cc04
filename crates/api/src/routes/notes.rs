//! Route definitions for notes.
//!
//! Paths match with or without a trailing slash, so `/notes/` is served
//! like `/notes`.

use axum::routing::{get, put, MethodRouter};
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Note routes, merged at the root.
///
/// ```text
/// GET    /notes        -> list_notes
/// POST   /notes        -> create_note
/// PUT    /notes/{id}   -> update_note
/// DELETE /notes/{id}   -> delete_note
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notes", collection())
        .route("/notes/", collection())
        .route("/notes/{id}", item())
        .route("/notes/{id}/", item())
}

fn collection() -> MethodRouter<AppState> {
    get(notes::list_notes).post(notes::create_note)
}

fn item() -> MethodRouter<AppState> {
    put(notes::update_note).delete(notes::delete_note)
}
