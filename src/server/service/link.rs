//! Maintenance of the denormalized back-reference lists.
//!
//! Users carry the list of their booking ids and managers carry the list of
//! their car ids as stored JSON columns. These lists are updated alongside
//! the owning row whenever a child is created or removed, never derived at
//! read time. All mutations for one parent go through a per-parent lock so
//! two concurrent read-modify-write cycles cannot drop each other's entry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::data::manager::ManagerRepository;
use crate::server::data::user::UserRepository;
use crate::server::error::AppError;
use crate::server::model::ids;

/// Registry of per-parent async locks, keyed by a parent discriminator such
/// as `"user:42"`. Locks are created on first use and kept for the lifetime
/// of the process.
#[derive(Clone, Default)]
pub struct ParentLocks {
    locks: Arc<Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>>,
}

impl ParentLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock_for(&self, key: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());

        locks
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone()
    }
}

pub struct LinkService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a ParentLocks,
}

impl<'a> LinkService<'a> {
    pub fn new(db: &'a DatabaseConnection, locks: &'a ParentLocks) -> Self {
        Self { db, locks }
    }

    /// Appends a booking id to the owning user's list. Adding an id that is
    /// already present is a no-op, which makes retried requests safe.
    pub async fn link_booking_to_user(
        &self,
        user_id: i32,
        booking_id: i32,
    ) -> Result<(), AppError> {
        let lock = self.locks.lock_for(&format!("user:{user_id}"));
        let _guard = lock.lock().await;

        let repository = UserRepository::new(self.db);
        let Some(user) = repository.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User doesn't exist".to_string()));
        };

        let mut booking_ids = ids::parse_id_list(&user.bookings)?;
        if !booking_ids.contains(&booking_id) {
            booking_ids.push(booking_id);
            repository.set_booking_ids(user, &booking_ids).await?;
        }

        Ok(())
    }

    /// Removes a booking id from the owning user's list. Removing an id that
    /// is absent is a no-op.
    pub async fn unlink_booking_from_user(
        &self,
        user_id: i32,
        booking_id: i32,
    ) -> Result<(), AppError> {
        let lock = self.locks.lock_for(&format!("user:{user_id}"));
        let _guard = lock.lock().await;

        let repository = UserRepository::new(self.db);
        let Some(user) = repository.find_by_id(user_id).await? else {
            return Ok(());
        };

        let mut booking_ids = ids::parse_id_list(&user.bookings)?;
        if let Some(position) = booking_ids.iter().position(|id| *id == booking_id) {
            booking_ids.remove(position);
            repository.set_booking_ids(user, &booking_ids).await?;
        }

        Ok(())
    }

    /// Appends a car id to the owning manager's list. The lock keys on the
    /// manager's id, not the email, since the email can change under a
    /// concurrent patch; the row is re-read once the lock is held.
    pub async fn link_car_to_manager(&self, manager_email: &str, car_id: i32) -> Result<(), AppError> {
        let repository = ManagerRepository::new(self.db);
        let Some(found) = repository.find_by_email(manager_email).await? else {
            return Err(AppError::NotFound("Manager not found!".to_string()));
        };

        let lock = self.locks.lock_for(&format!("manager:{}", found.id));
        let _guard = lock.lock().await;

        let Some(manager) = repository.find_by_id(found.id).await? else {
            return Err(AppError::NotFound("Manager not found!".to_string()));
        };

        let mut car_ids = ids::parse_id_list(&manager.cars)?;
        if !car_ids.contains(&car_id) {
            car_ids.push(car_id);
            repository.set_car_ids(manager, &car_ids).await?;
        }

        Ok(())
    }

    pub async fn unlink_car_from_manager(
        &self,
        manager_email: &str,
        car_id: i32,
    ) -> Result<(), AppError> {
        let repository = ManagerRepository::new(self.db);
        let Some(found) = repository.find_by_email(manager_email).await? else {
            return Ok(());
        };

        let lock = self.locks.lock_for(&format!("manager:{}", found.id));
        let _guard = lock.lock().await;

        let Some(manager) = repository.find_by_id(found.id).await? else {
            return Ok(());
        };

        let mut car_ids = ids::parse_id_list(&manager.cars)?;
        if let Some(position) = car_ids.iter().position(|id| *id == car_id) {
            car_ids.remove(position);
            repository.set_car_ids(manager, &car_ids).await?;
        }

        Ok(())
    }

    /// Empties the booking list of every user. Used when all bookings are
    /// deleted in one sweep.
    pub async fn clear_all_booking_lists(&self) -> Result<(), AppError> {
        UserRepository::new(self.db).clear_all_booking_lists().await?;

        Ok(())
    }
}
