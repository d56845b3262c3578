use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{api::Links, car::CarDto, user::UserDto};

#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    /// Caller-supplied reference; generated server-side when omitted.
    pub booking_reference: Option<String>,
    pub user_email: String,
    pub car_registration: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: Option<String>,
    pub content: Option<String>,
}

/// Booking with both references resolved, as returned from creation and
/// user-scoped lookups.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i32,
    pub booking_reference: String,
    pub user: UserDto,
    pub car: CarDto,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: Option<String>,
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// Booking with only the car joined, as returned from the global listing
/// and reference lookups.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BookingWithCarDto {
    pub id: i32,
    pub booking_reference: String,
    pub user_id: i32,
    pub car: Option<CarDto>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: Option<String>,
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct CreatedBookingDto {
    pub message: String,
    pub booking: BookingDto,
}
