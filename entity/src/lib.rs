//! Database entity models for the GoCarGo car rental backend.
//!
//! Each module defines the SeaORM entity for one collection. Back-references
//! (a manager's car list, a user's booking list) are stored as JSON id arrays
//! and maintained by the application's link service rather than derived from
//! joins at read time.

pub mod booking;
pub mod car;
pub mod manager;
pub mod prelude;
pub mod user;
