//! Data transfer objects exchanged over the HTTP API.
//!
//! DTOs are plain serde types, kept separate from the entity models and the
//! server-side domain models. Request DTOs are converted to validated
//! parameter models at the controller boundary; response DTOs are produced
//! from domain models and never expose password hashes.

pub mod api;
pub mod booking;
pub mod car;
pub mod manager;
pub mod user;
