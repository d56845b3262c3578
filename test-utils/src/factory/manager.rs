//! Manager factory for creating test manager entities.

use crate::factory::helpers::{hash_password, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test managers with customizable fields.
pub struct ManagerFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    fname: String,
    lname: String,
    password: String,
    balance: f64,
    address: String,
    car_ids: Vec<i32>,
}

impl<'a> ManagerFactory<'a> {
    /// Creates a new ManagerFactory with default values.
    ///
    /// Defaults:
    /// - email: `"manager{id}@example.com"` where id is auto-incremented
    /// - password: `"password123"` (stored hashed)
    /// - balance: `100.0`, address: `"1 Test Street"`
    /// - car list: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("manager{}@example.com", id),
            fname: "Manager".to_string(),
            lname: format!("{}", id),
            password: "password123".to_string(),
            balance: 100.0,
            address: "1 Test Street".to_string(),
            car_ids: Vec::new(),
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the plaintext password; the factory stores its hash.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn balance(mut self, balance: f64) -> Self {
        self.balance = balance;
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn car_ids(mut self, car_ids: Vec<i32>) -> Self {
        self.car_ids = car_ids;
        self
    }

    pub async fn build(self) -> Result<entity::manager::Model, DbErr> {
        let password_hash = hash_password(&self.password)?;

        entity::manager::ActiveModel {
            email: ActiveValue::Set(self.email),
            fname: ActiveValue::Set(self.fname),
            lname: ActiveValue::Set(self.lname),
            password: ActiveValue::Set(password_hash),
            balance: ActiveValue::Set(self.balance),
            address: ActiveValue::Set(self.address),
            cars: ActiveValue::Set(serde_json::json!(self.car_ids)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a manager with default values.
pub async fn create_manager(db: &DatabaseConnection) -> Result<entity::manager::Model, DbErr> {
    ManagerFactory::new(db).build().await
}
