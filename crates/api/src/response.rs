//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "message": ... }` acknowledgement returned by update and delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `{ "message": ..., "id": ... }` returned when a resource is created.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: String,
}
