use chrono::NaiveDate;
use sea_orm::DbErr;

use crate::{
    model::{
        api::Links,
        booking::{BookingDto, BookingWithCarDto, CreateBookingDto},
    },
    server::{
        error::AppError,
        model::{car::Car, user::User, validate},
    },
};

#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub booking_reference: Option<String>,
    pub user_email: String,
    pub car_registration: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: Option<String>,
    pub content: Option<String>,
}

impl CreateBookingParams {
    pub fn from_dto(dto: CreateBookingDto) -> Result<Self, AppError> {
        validate::email(&dto.user_email)?;
        validate::non_empty(&dto.car_registration, "Registration cannot be empty")?;
        if dto.end_date < dto.start_date {
            return Err(AppError::BadRequest(
                "End date cannot be before start date".to_string(),
            ));
        }

        Ok(Self {
            booking_reference: dto.booking_reference,
            user_email: dto.user_email,
            car_registration: dto.car_registration,
            start_date: dto.start_date,
            end_date: dto.end_date,
            status: dto.status,
            content: dto.content,
        })
    }
}

/// Booking with both endpoints resolved, used for creation responses and
/// user-scoped lookups.
#[derive(Debug, Clone)]
pub struct Booking {
    pub id: i32,
    pub booking_reference: String,
    pub user: User,
    pub car: Car,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: Option<String>,
    pub content: Option<String>,
}

impl Booking {
    pub fn from_entities(
        booking: entity::booking::Model,
        user: entity::user::Model,
        car: entity::car::Model,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            id: booking.id,
            booking_reference: booking.booking_reference,
            user: User::from_entity(user)?,
            car: Car::from_entity(car),
            start_date: booking.start_date,
            end_date: booking.end_date,
            status: booking.status,
            content: booking.content,
        })
    }

    pub fn into_dto(self, links: Option<Links>) -> BookingDto {
        BookingDto {
            id: self.id,
            booking_reference: self.booking_reference,
            user: self.user.into_dto(),
            car: self.car.into_dto(None),
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status,
            content: self.content,
            links,
        }
    }
}

/// Booking with only the car joined; the user side stays an id, matching
/// the global listing behaviour.
#[derive(Debug, Clone)]
pub struct BookingWithCar {
    pub id: i32,
    pub booking_reference: String,
    pub user_id: i32,
    pub car: Option<Car>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: Option<String>,
    pub content: Option<String>,
}

impl BookingWithCar {
    pub fn from_entities(
        booking: entity::booking::Model,
        car: Option<entity::car::Model>,
    ) -> Self {
        Self {
            id: booking.id,
            booking_reference: booking.booking_reference,
            user_id: booking.user_id,
            car: car.map(Car::from_entity),
            start_date: booking.start_date,
            end_date: booking.end_date,
            status: booking.status,
            content: booking.content,
        }
    }

    pub fn into_dto(self, links: Option<Links>) -> BookingWithCarDto {
        BookingWithCarDto {
            id: self.id,
            booking_reference: self.booking_reference,
            user_id: self.user_id,
            car: self.car.map(|car| car.into_dto(None)),
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status,
            content: self.content,
            links,
        }
    }
}
