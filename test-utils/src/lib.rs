//! GoCarGo Test Utils
//!
//! Shared testing utilities for the car-rental backend. This crate offers a
//! builder pattern for creating test contexts with in-memory SQLite
//! databases and customizable table schemas, plus factories for the four
//! domain entities.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::User;
//!
//! #[tokio::test]
//! async fn test_user_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(User)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
