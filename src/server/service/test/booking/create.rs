use super::*;

/// Tests the end-to-end creation flow with a generated reference: manager
/// owning a car, a user, and a booking created without a supplied
/// reference.
///
/// Expected: Ok with a 10-character reference and the booking id recorded
/// in the user's list
#[tokio::test]
async fn generates_a_reference_and_links_the_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ParentLocks::new();

    let car = factory::create_car_with_registration(db, "REG1").await?;
    factory::manager::ManagerFactory::new(db)
        .email("m@x.com")
        .password("pw123456")
        .car_ids(vec![car.id])
        .build()
        .await?;
    let user = factory::create_user_with_email(db, "u@x.com").await?;

    let service = BookingService::new(db, &locks);
    let booking = service
        .create(create_params("u@x.com", "REG1"))
        .await
        .unwrap();

    assert_eq!(booking.booking_reference.len(), 10);
    assert_eq!(booking.car.registration, "REG1");
    assert_eq!(booking.user.id, user.id);
    assert_eq!(booking.user.booking_ids, vec![booking.id]);

    Ok(())
}

/// Tests that a supplied reference already in use is rejected.
///
/// Expected: second create Err Conflict, exactly one booking remains
#[tokio::test]
async fn conflicts_on_duplicate_supplied_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ParentLocks::new();

    factory::create_user_with_email(db, "u@x.com").await?;
    factory::create_car_with_registration(db, "REG1").await?;

    let service = BookingService::new(db, &locks);

    let mut params = create_params("u@x.com", "REG1");
    params.booking_reference = Some("REF1".to_string());
    service.create(params.clone()).await.unwrap();

    let result = service.create(params).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    assert_eq!(service.get_all().await.unwrap().len(), 1);

    Ok(())
}

/// Tests creation against an unregistered user email.
///
/// Expected: Err NotFound, nothing persisted
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ParentLocks::new();

    factory::create_car_with_registration(db, "REG1").await?;

    let service = BookingService::new(db, &locks);
    let result = service.create(create_params("nobody@x.com", "REG1")).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(service.get_all().await.unwrap().is_empty());

    Ok(())
}

/// Tests creation against an unregistered car.
///
/// Expected: Err NotFound, nothing persisted
#[tokio::test]
async fn rejects_unknown_car() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ParentLocks::new();

    factory::create_user_with_email(db, "u@x.com").await?;

    let service = BookingService::new(db, &locks);
    let result = service.create(create_params("u@x.com", "GHOST")).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(service.get_all().await.unwrap().is_empty());

    Ok(())
}
