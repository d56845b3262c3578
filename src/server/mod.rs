//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database
//! operations, following a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer-token authentication guard
//!
//! Supporting modules provide infrastructure: `config` (environment-based
//! configuration), `state` (shared application state), `startup` (database
//! initialization), `router` (route configuration), and `util` (HATEOAS link
//! construction).
//!
//! A typical request flows router → controller → service → data and back,
//! with domain models converted to DTOs at the controller boundary.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
