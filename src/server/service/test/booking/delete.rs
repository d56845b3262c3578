use super::*;

/// Tests deleting one of a user's bookings.
///
/// Expected: Ok with the booking gone and its id retracted from the
/// user's list
#[tokio::test]
async fn retracts_the_id_from_the_users_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ParentLocks::new();

    let (user, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let service = BookingService::new(db, &locks);
    service
        .delete_for_user(&user.email, &booking.booking_reference)
        .await
        .unwrap();

    let result = service.get_by_reference(&booking.booking_reference).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let remaining = service.get_for_user(&user.email).await.unwrap();
    assert!(remaining.is_empty());

    Ok(())
}

/// Tests deleting a booking the user never made.
///
/// Expected: Err NotFound even though the reference exists elsewhere
#[tokio::test]
async fn rejects_a_reference_belonging_to_another_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ParentLocks::new();

    let (_, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    let other = factory::create_user(db).await?;

    let service = BookingService::new(db, &locks);
    let result = service
        .delete_for_user(&other.email, &booking.booking_reference)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the bulk delete.
///
/// Expected: zero bookings remain, prior references resolve to NotFound,
/// and every user's booking list is empty
#[tokio::test]
async fn clears_every_booking_and_every_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ParentLocks::new();

    let (user, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    factory::helpers::create_booking_with_dependencies(db).await?;

    let service = BookingService::new(db, &locks);
    let deleted = service.delete_all().await.unwrap();
    assert_eq!(deleted, 2);

    assert!(service.get_all().await.unwrap().is_empty());

    let result = service.get_by_reference(&booking.booking_reference).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let remaining = service.get_for_user(&user.email).await.unwrap();
    assert!(remaining.is_empty());

    Ok(())
}
