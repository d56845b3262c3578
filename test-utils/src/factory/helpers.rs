//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets unique
/// business keys (emails, registrations, references) to prevent collisions.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Hashes a password with the lowest bcrypt cost. Tests verify hashes too
/// often to afford the production cost.
pub fn hash_password(password: &str) -> Result<String, DbErr> {
    bcrypt::hash(password, 4).map_err(|err| DbErr::Custom(err.to_string()))
}

/// Creates a user, a car, and a booking linking the two. The booking id is
/// also recorded in the user's booking list, matching what the booking
/// service does in production.
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::car::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let car = crate::factory::car::create_car(db).await?;
    let booking = crate::factory::booking::create_booking(db, user.id, car.id).await?;
    let user = crate::factory::user::append_booking_id(db, user, booking.id).await?;

    Ok((user, car, booking))
}
