//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary
//! and transformed to DTOs at the controller boundary. Parameter types carry
//! validated operation input; validation happens in their `from_dto`
//! constructors so malformed input never reaches the service layer.

pub mod auth;
pub mod booking;
pub mod car;
pub mod ids;
pub mod manager;
pub mod user;
pub mod validate;
