//! Database repository layer for all domain entities.
//!
//! Repository structs handle database operations (CRUD) for each collection.
//! Repositories work in SeaORM entity models; conversion to domain models
//! happens in the service layer. Every collection supports lookup by its
//! business key in addition to the internal id.

pub mod booking;
pub mod car;
pub mod manager;
pub mod user;


use sea_orm::DbErr;

/// Detects a storage-level unique-constraint violation.
///
/// Business-key uniqueness is enforced by unique indexes, so the
/// check-then-insert sequences remain correct when two concurrent calls
/// pass the existence check: the second insert fails here and is mapped to
/// a Conflict by the caller.
pub fn is_unique_violation(err: &DbErr) -> bool {
    err.to_string().contains("UNIQUE constraint")
}
