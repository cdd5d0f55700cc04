//! Note model, request payloads, and validated DTOs.

use psnotes_core::error::CoreError;
use psnotes_core::notes::{
    resolve_create_category, resolve_update_category, validate_required_text, Category,
    MSG_INVALID_CATEGORY,
};
use psnotes_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `notes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// JSON body accepted by both create and update.
///
/// Every field is optional at the wire level so that missing values surface
/// as validation errors rather than deserialization failures.
///
/// `category` keeps three states: absent (`None`), explicit `null`
/// (`Some(None)`), and a string (`Some(Some(_))`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotePayload {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub category: Option<Option<String>>,
}

/// Only invoked when the key is present, so absence stays `None` via `default`.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl NotePayload {
    /// Validate for insertion. Unknown categories, and an explicit `null`,
    /// are rejected; only an absent category defaults to `Others`.
    pub fn into_create(self) -> Result<CreateNote, CoreError> {
        validate_required_text(self.title.as_deref(), self.description.as_deref())?;
        let category = match &self.category {
            None => resolve_create_category(None)?,
            Some(Some(name)) => resolve_create_category(Some(name.as_str()))?,
            Some(None) => return Err(CoreError::Validation(MSG_INVALID_CATEGORY.to_string())),
        };
        Ok(CreateNote {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            category,
        })
    }

    /// Validate for update. Absent, `null` or empty categories become `Others`.
    pub fn into_update(self) -> Result<UpdateNote, CoreError> {
        validate_required_text(self.title.as_deref(), self.description.as_deref())?;
        let category = self.category.as_ref().and_then(Option::as_deref);
        let category = resolve_update_category(category)?;
        Ok(UpdateNote {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            category,
        })
    }
}

/// Query parameters for listing notes (`?search=&category=`).
///
/// Empty strings are treated the same as absent parameters.
#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl NoteFilter {
    /// Build a filter from raw query pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_query_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut filter = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "search" => &mut filter.search,
                "category" => &mut filter.category,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        filter
    }
}

// ---------------------------------------------------------------------------
// Validated DTOs
// ---------------------------------------------------------------------------

/// DTO for inserting a new note.
#[derive(Debug, Clone)]
pub struct CreateNote {
    pub title: String,
    pub description: String,
    pub category: Category,
}

/// DTO for replacing the mutable fields of a note.
#[derive(Debug, Clone)]
pub struct UpdateNote {
    pub title: String,
    pub description: String,
    pub category: Category,
}
