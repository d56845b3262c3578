//! Car factory for creating test car entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cars with customizable fields.
pub struct CarFactory<'a> {
    db: &'a DatabaseConnection,
    registration: String,
    brand: Option<String>,
    color: Option<String>,
    price: f64,
    description: Option<String>,
    image: Option<String>,
}

impl<'a> CarFactory<'a> {
    /// Creates a new CarFactory with default values.
    ///
    /// Defaults:
    /// - registration: `"REG{id}"` where id is auto-incremented
    /// - brand: `"Toyota"`, color: `"blue"`, price: `50.0`
    /// - description and image: none
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            registration: format!("REG{}", id),
            brand: Some("Toyota".to_string()),
            color: Some("blue".to_string()),
            price: 50.0,
            description: None,
            image: None,
        }
    }

    pub fn registration(mut self, registration: impl Into<String>) -> Self {
        self.registration = registration.into();
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub async fn build(self) -> Result<entity::car::Model, DbErr> {
        entity::car::ActiveModel {
            registration: ActiveValue::Set(self.registration),
            brand: ActiveValue::Set(self.brand),
            color: ActiveValue::Set(self.color),
            price: ActiveValue::Set(self.price),
            description: ActiveValue::Set(self.description),
            image: ActiveValue::Set(self.image),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a car with default values.
pub async fn create_car(db: &DatabaseConnection) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db).build().await
}

/// Creates a car with a specific registration.
pub async fn create_car_with_registration(
    db: &DatabaseConnection,
    registration: impl Into<String>,
) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db).registration(registration).build().await
}
