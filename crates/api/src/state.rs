/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted internally).
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool, opened once at startup.
    pub pool: psnotes_db::DbPool,
}
