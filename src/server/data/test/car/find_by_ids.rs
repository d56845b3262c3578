use super::*;
use test_utils::factory;

/// Tests resolving an id list where one id has no matching row.
///
/// Expected: Ok with only the surviving car
#[tokio::test]
async fn skips_missing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::create_car(db).await?;

    let cars = CarRepository::new(db).find_by_ids(&[car.id, 9999]).await?;

    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].id, car.id);

    Ok(())
}

/// Tests resolving an empty id list.
///
/// Expected: Ok with no rows and no query issued against the table
#[tokio::test]
async fn returns_empty_for_empty_input() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_car(db).await?;

    let cars = CarRepository::new(db).find_by_ids(&[]).await?;

    assert!(cars.is_empty());

    Ok(())
}
