//! Booking factory for creating test booking entities.
//!
//! Bookings reference a user and a car by internal id; callers create those
//! first, or use `helpers::create_booking_with_dependencies`.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    booking_reference: String,
    user_id: i32,
    car_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: Option<String>,
    content: Option<String>,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - reference: `"BOOK{id}"` where id is auto-incremented
    /// - a one-week rental starting 2024-06-01
    /// - status and content: none
    pub fn new(db: &'a DatabaseConnection, user_id: i32, car_id: i32) -> Self {
        let id = next_id();
        let start_date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        Self {
            db,
            booking_reference: format!("BOOK{}", id),
            user_id,
            car_id,
            start_date,
            end_date: start_date + chrono::Days::new(7),
            status: None,
            content: None,
        }
    }

    pub fn booking_reference(mut self, reference: impl Into<String>) -> Self {
        self.booking_reference = reference.into();
        self
    }

    pub fn dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            booking_reference: ActiveValue::Set(self.booking_reference),
            user_id: ActiveValue::Set(self.user_id),
            car_id: ActiveValue::Set(self.car_id),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            status: ActiveValue::Set(self.status),
            content: ActiveValue::Set(self.content),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a booking with default values for the given user and car.
pub async fn create_booking(
    db: &DatabaseConnection,
    user_id: i32,
    car_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, user_id, car_id).build().await
}
