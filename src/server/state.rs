//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone: the database connection is a pooled handle, the lock registry is
//! reference-counted, and the strings are small.

use sea_orm::DatabaseConnection;

use crate::server::service::link::ParentLocks;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Secret key used to sign and verify bearer tokens. Supplied via
    /// configuration; never persisted or logged.
    pub jwt_secret: String,

    /// Application base URL used when building HATEOAS links.
    pub app_url: String,

    /// Per-parent-key lock registry serializing back-reference list
    /// mutations. Shared so that concurrent requests touching the same
    /// manager or user contend on the same lock.
    pub link_locks: ParentLocks,
}

impl AppState {
    pub fn new(db: DatabaseConnection, jwt_secret: String, app_url: String) -> Self {
        Self {
            db,
            jwt_secret,
            app_url,
            link_locks: ParentLocks::new(),
        }
    }
}
