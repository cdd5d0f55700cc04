//! Note categories and the request validation rules for create and update.
//!
//! Create and update deliberately differ in how they treat the category:
//! create rejects anything outside the allowed set (including an empty
//! string), while update falls back to [`Category::Others`] when the value is
//! absent or empty and only rejects non-empty unknown names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Returned when title or description is missing or empty.
pub const MSG_REQUIRED_FIELDS: &str = "Title and description are required.";

/// Returned when a supplied category is not one of [`VALID_CATEGORIES`].
pub const MSG_INVALID_CATEGORY: &str = "Invalid category.";

/// Entity name used in not-found errors.
pub const NOTE_ENTITY: &str = "Note";

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

pub const CATEGORY_WORK: &str = "Work";
pub const CATEGORY_PERSONAL: &str = "Personal";
pub const CATEGORY_OTHERS: &str = "Others";

/// All valid category names, exactly as stored.
pub const VALID_CATEGORIES: &[&str] = &[CATEGORY_WORK, CATEGORY_PERSONAL, CATEGORY_OTHERS];

/// Closed set of note categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    Work,
    Personal,
    #[default]
    Others,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Work => CATEGORY_WORK,
            Category::Personal => CATEGORY_PERSONAL,
            Category::Others => CATEGORY_OTHERS,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    /// Exact, case-sensitive match against [`VALID_CATEGORIES`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CATEGORY_WORK => Ok(Category::Work),
            CATEGORY_PERSONAL => Ok(Category::Personal),
            CATEGORY_OTHERS => Ok(Category::Others),
            _ => Err(CoreError::Validation(MSG_INVALID_CATEGORY.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that both title and description are present and non-empty.
///
/// Returns the borrowed values so callers can use them without unwrapping.
pub fn validate_required_text<'a>(
    title: Option<&'a str>,
    description: Option<&'a str>,
) -> Result<(&'a str, &'a str), CoreError> {
    match (title, description) {
        (Some(t), Some(d)) if !t.is_empty() && !d.is_empty() => Ok((t, d)),
        _ => Err(CoreError::Validation(MSG_REQUIRED_FIELDS.to_string())),
    }
}

/// Resolve the category supplied on create.
///
/// Absent means [`Category::Others`]; any supplied value must name a valid
/// category.
pub fn resolve_create_category(category: Option<&str>) -> Result<Category, CoreError> {
    match category {
        None => Ok(Category::default()),
        Some(name) => name.parse(),
    }
}

/// Resolve the category supplied on update.
///
/// Absent or empty means [`Category::Others`]; a non-empty value must name a
/// valid category.
pub fn resolve_update_category(category: Option<&str>) -> Result<Category, CoreError> {
    match category {
        None | Some("") => Ok(Category::default()),
        Some(name) => name.parse(),
    }
}
