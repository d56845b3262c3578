use rand::distr::Alphanumeric;
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::server::data;
use crate::server::data::booking::BookingRepository;
use crate::server::data::car::CarRepository;
use crate::server::data::user::UserRepository;
use crate::server::error::AppError;
use crate::server::model::booking::{Booking, BookingWithCar, CreateBookingParams};
use crate::server::model::car::Car;
use crate::server::model::ids;
use crate::server::service::link::{LinkService, ParentLocks};

const REFERENCE_LENGTH: usize = 10;

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a ParentLocks,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection, locks: &'a ParentLocks) -> Self {
        Self { db, locks }
    }

    /// Creates a booking. A caller-supplied reference conflicts when taken;
    /// an omitted one is generated. The user and car are resolved by email
    /// and registration, the row inserted, and the booking id appended to
    /// the user's list. The response carries the re-read user so the list
    /// includes the new id.
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, AppError> {
        let bookings = BookingRepository::new(self.db);

        let reference = match &params.booking_reference {
            Some(reference) => {
                if bookings.exists_by_reference(reference).await? {
                    return Err(AppError::Conflict(
                        "There's already a booking with this reference no, please choose another one"
                            .to_string(),
                    ));
                }
                reference.clone()
            }
            None => self.generate_reference(&bookings).await?,
        };

        let users = UserRepository::new(self.db);
        let Some(user) = users.find_by_email(&params.user_email).await? else {
            return Err(AppError::NotFound("User doesn't exist".to_string()));
        };

        let Some(car) = CarRepository::new(self.db)
            .find_by_registration(&params.car_registration)
            .await?
        else {
            return Err(AppError::NotFound("Car doesn't exist".to_string()));
        };

        let created = match bookings
            .insert(&reference, user.id, car.id, &params)
            .await
        {
            Ok(model) => model,
            Err(err) if data::is_unique_violation(&err) => {
                return Err(AppError::Conflict(
                    "There's already a booking with this reference no, please choose another one"
                        .to_string(),
                ));
            }
            Err(err) => return Err(err.into()),
        };

        LinkService::new(self.db, self.locks)
            .link_booking_to_user(user.id, created.id)
            .await?;

        // Re-read so the returned user's booking list includes this id.
        let Some(user) = users.find_by_id(user.id).await? else {
            return Err(AppError::NotFound("User doesn't exist".to_string()));
        };

        Ok(Booking::from_entities(created, user, car)?)
    }

    pub async fn get_all(&self) -> Result<Vec<BookingWithCar>, AppError> {
        let rows = BookingRepository::new(self.db).find_all_with_car().await?;

        Ok(rows
            .into_iter()
            .map(|(booking, car)| BookingWithCar::from_entities(booking, car))
            .collect())
    }

    pub async fn get_by_reference(&self, reference: &str) -> Result<BookingWithCar, AppError> {
        let Some((booking, car)) = BookingRepository::new(self.db)
            .find_by_reference_with_car(reference)
            .await?
        else {
            return Err(AppError::NotFound("Booking not found".to_string()));
        };

        Ok(BookingWithCar::from_entities(booking, car))
    }

    pub async fn get_car_by_reference(&self, reference: &str) -> Result<Car, AppError> {
        let booking = self.get_by_reference(reference).await?;

        booking
            .car
            .ok_or_else(|| AppError::NotFound("Car doesn't exist".to_string()))
    }

    /// Walks the user's booking-id list and resolves each entry. Entries
    /// whose booking, user, or car row has since disappeared are skipped.
    pub async fn get_for_user(&self, email: &str) -> Result<Vec<Booking>, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_email(email).await? else {
            return Err(AppError::NotFound("User doesn't exist".to_string()));
        };

        let booking_ids = ids::parse_id_list(&user.bookings)?;
        let bookings = BookingRepository::new(self.db);

        let mut resolved = Vec::with_capacity(booking_ids.len());
        for booking_id in booking_ids {
            let Some((booking, Some(user), Some(car))) =
                bookings.find_by_id_joined(booking_id).await?
            else {
                continue;
            };
            resolved.push(Booking::from_entities(booking, user, car)?);
        }

        Ok(resolved)
    }

    pub async fn get_for_user_by_reference(
        &self,
        email: &str,
        reference: &str,
    ) -> Result<Booking, AppError> {
        let bookings = self.get_for_user(email).await?;

        bookings
            .into_iter()
            .find(|booking| booking.booking_reference == reference)
            .ok_or_else(|| {
                AppError::NotFound(
                    "User has no booking with this reference number".to_string(),
                )
            })
    }

    pub async fn get_car_for_user_by_reference(
        &self,
        email: &str,
        reference: &str,
    ) -> Result<Car, AppError> {
        let booking = self.get_for_user_by_reference(email, reference).await?;

        Ok(booking.car)
    }

    /// Deletes one of a user's bookings and retracts the id from the
    /// user's list.
    pub async fn delete_for_user(&self, email: &str, reference: &str) -> Result<(), AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_email(email).await? else {
            return Err(AppError::NotFound("User doesn't exist".to_string()));
        };

        let booking_ids = ids::parse_id_list(&user.bookings)?;
        let bookings = BookingRepository::new(self.db);

        let Some(booking) = bookings.find_by_reference(reference).await? else {
            return Err(AppError::NotFound(
                "User has no booking with this ID".to_string(),
            ));
        };

        if !booking_ids.contains(&booking.id) {
            return Err(AppError::NotFound(
                "User has no booking with this ID".to_string(),
            ));
        }

        let booking_id = booking.id;
        bookings.delete(booking).await?;
        LinkService::new(self.db, self.locks)
            .unlink_booking_from_user(user.id, booking_id)
            .await?;

        Ok(())
    }

    /// Removes every booking and empties every user's booking list.
    pub async fn delete_all(&self) -> Result<u64, AppError> {
        let deleted = BookingRepository::new(self.db).delete_all().await?;
        LinkService::new(self.db, self.locks)
            .clear_all_booking_lists()
            .await?;

        Ok(deleted)
    }

    /// Draws random candidates until one is free. The unique index still
    /// backs this up if two creations race on the same candidate.
    async fn generate_reference(
        &self,
        bookings: &BookingRepository<'_>,
    ) -> Result<String, AppError> {
        loop {
            let candidate: String = rand::rng()
                .sample_iter(&Alphanumeric)
                .take(REFERENCE_LENGTH)
                .map(char::from)
                .collect();

            if !bookings.exists_by_reference(&candidate).await? {
                return Ok(candidate);
            }
        }
    }
}
