//! User factory for creating test user entities.

use crate::factory::helpers::{hash_password, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("u@x.com")
///     .fname("Ada")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    fname: String,
    lname: String,
    password: String,
    booking_ids: Vec<i32>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"` where id is auto-incremented
    /// - fname: `"User"`, lname: `"{id}"`
    /// - password: `"password123"` (stored hashed)
    /// - booking list: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            fname: "User".to_string(),
            lname: format!("{}", id),
            password: "password123".to_string(),
            booking_ids: Vec::new(),
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn fname(mut self, fname: impl Into<String>) -> Self {
        self.fname = fname.into();
        self
    }

    pub fn lname(mut self, lname: impl Into<String>) -> Self {
        self.lname = lname.into();
        self
    }

    /// Sets the plaintext password; the factory stores its hash.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn booking_ids(mut self, booking_ids: Vec<i32>) -> Self {
        self.booking_ids = booking_ids;
        self
    }

    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let password_hash = hash_password(&self.password)?;

        entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            fname: ActiveValue::Set(self.fname),
            lname: ActiveValue::Set(self.lname),
            password: ActiveValue::Set(password_hash),
            bookings: ActiveValue::Set(serde_json::json!(self.booking_ids)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific email.
pub async fn create_user_with_email(
    db: &DatabaseConnection,
    email: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).email(email).build().await
}

/// Appends a booking id to an existing user's list, the way the link
/// maintenance does in production.
pub async fn append_booking_id(
    db: &DatabaseConnection,
    user: entity::user::Model,
    booking_id: i32,
) -> Result<entity::user::Model, DbErr> {
    let mut booking_ids: Vec<i32> =
        serde_json::from_value(user.bookings.clone()).unwrap_or_default();
    booking_ids.push(booking_id);

    let mut active: entity::user::ActiveModel = user.into();
    active.bookings = ActiveValue::Set(serde_json::json!(booking_ids));
    active.update(db).await
}
