//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Shared resources cloned into each handler through Axum's state extraction.
///
/// `DatabaseConnection` is a pool handle, so clones share the same connections.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for the academic records.
    pub db: DatabaseConnection,

    /// Absolute lifetime of an authenticated identity, counted from login.
    pub session_max_age: chrono::Duration,
}

impl AppState {
    pub fn new(db: DatabaseConnection, session_max_age: chrono::Duration) -> Self {
        Self {
            db,
            session_max_age,
        }
    }
}
