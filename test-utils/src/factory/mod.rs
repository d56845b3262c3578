//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories hash passwords with a low bcrypt cost so tests stay
//! fast.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let car = factory::car::create_car(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, car, booking) =
//!         factory::helpers::create_booking_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let manager = factory::manager::ManagerFactory::new(&db)
//!     .email("m@x.com")
//!     .password("pw123456")
//!     .build()
//!     .await?;
//! ```

pub mod booking;
pub mod car;
pub mod helpers;
pub mod manager;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use booking::create_booking;
pub use car::{create_car, create_car_with_registration};
pub use manager::create_manager;
pub use user::{create_user, create_user_with_email};
