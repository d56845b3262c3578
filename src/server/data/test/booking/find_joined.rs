use super::*;

/// Tests fetching a booking with its car joined.
///
/// Expected: Ok(Some) with the related car resolved
#[tokio::test]
async fn resolves_the_related_car() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let found = BookingRepository::new(db)
        .find_by_reference_with_car(&booking.booking_reference)
        .await?;

    let (found_booking, found_car) = found.unwrap();
    assert_eq!(found_booking.id, booking.id);
    assert_eq!(found_car.map(|c| c.id), Some(car.id));

    Ok(())
}

/// Tests fetching a booking with both endpoints resolved.
///
/// Expected: Ok(Some) with user and car present
#[tokio::test]
async fn resolves_user_and_car() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, car, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let found = BookingRepository::new(db).find_by_id_joined(booking.id).await?;

    let (found_booking, found_user, found_car) = found.unwrap();
    assert_eq!(found_booking.id, booking.id);
    assert_eq!(found_user.map(|u| u.id), Some(user.id));
    assert_eq!(found_car.map(|c| c.id), Some(car.id));

    Ok(())
}

/// Tests fetching an id that was never created.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = BookingRepository::new(db).find_by_id_joined(9999).await?;

    assert!(found.is_none());

    Ok(())
}
