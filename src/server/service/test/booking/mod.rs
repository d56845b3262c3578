use crate::server::{
    error::AppError,
    model::booking::CreateBookingParams,
    service::{booking::BookingService, link::ParentLocks},
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod create;
mod delete;

fn create_params(user_email: &str, car_registration: &str) -> CreateBookingParams {
    let start_date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    CreateBookingParams {
        booking_reference: None,
        user_email: user_email.to_string(),
        car_registration: car_registration.to_string(),
        start_date,
        end_date: start_date + chrono::Days::new(7),
        status: None,
        content: None,
    }
}
