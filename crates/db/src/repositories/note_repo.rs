//! Repository for the `notes` table.

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::models::note::{CreateNote, Note, NoteFilter, UpdateNote};
use crate::DbPool;

/// Column list for `notes` queries.
const COLUMNS: &str = "id, title, description, category, created_at, updated_at";

/// Provides data access for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a new note with a fresh UUID and `created_at == updated_at`.
    pub async fn create(pool: &DbPool, dto: &CreateNote) -> Result<Note, sqlx::Error> {
        let id = Uuid::new_v4().to_string();
        let now = now_text();
        let query = format!(
            "INSERT INTO notes (id, title, description, category, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(&id)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(dto.category.as_str())
            .bind(&now)
            .bind(&now)
            .fetch_one(pool)
            .await
    }

    /// Find a note by its ID.
    pub async fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = ?");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List notes matching the filter, newest first.
    ///
    /// Notes created within the same timestamp tick fall back to insertion
    /// order (`rowid`), still newest first.
    pub async fn list(pool: &DbPool, filter: &NoteFilter) -> Result<Vec<Note>, sqlx::Error> {
        let (where_clause, bind_values) = build_note_filter(filter);
        let query = format!(
            "SELECT {COLUMNS} FROM notes {where_clause} ORDER BY created_at DESC, rowid DESC"
        );
        let mut q = sqlx::query_as::<_, Note>(&query);
        for value in &bind_values {
            q = q.bind(value.as_str());
        }
        q.fetch_all(pool).await
    }

    /// Replace title, description and category, and stamp `updated_at`.
    ///
    /// Returns `None` if no note has the given ID.
    pub async fn update(
        pool: &DbPool,
        id: &str,
        dto: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET \
                 title = ?, \
                 description = ?, \
                 category = ?, \
                 updated_at = ? \
             WHERE id = ? \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(dto.category.as_str())
            .bind(now_text())
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a note by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all notes.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM notes")
            .fetch_one(pool)
            .await
    }
}

/// Current time as fixed-width RFC 3339 text, so lexical order in the
/// `created_at` / `updated_at` columns matches chronological order.
fn now_text() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Build a WHERE clause and bind values from `NoteFilter` parameters.
///
/// Each predicate is paired with exactly one entry per `?` placeholder in
/// `bind_values`. The `where_clause` is empty if no filters are active, or
/// starts with `WHERE `.
fn build_note_filter(filter: &NoteFilter) -> (String, Vec<String>) {
    let mut conditions: Vec<&str> = Vec::new();
    let mut bind_values: Vec<String> = Vec::new();

    if let Some(search) = non_empty(&filter.search) {
        let pattern = format!("%{}%", escape_like(search));
        conditions.push("(title LIKE ? ESCAPE '\\' OR category LIKE ? ESCAPE '\\')");
        bind_values.push(pattern.clone());
        bind_values.push(pattern);
    }

    if let Some(category) = non_empty(&filter.category) {
        conditions.push("category = ?");
        bind_values.push(category.to_string());
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Escape `LIKE` wildcards so the term matches as a literal substring.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
