use super::*;

/// Tests partial update of a car.
///
/// Expected: Ok with the supplied fields overwritten and the rest kept
#[tokio::test]
async fn overwrites_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = CarFactory::new(db)
        .registration("AB12CDE")
        .color("blue")
        .price(50.0)
        .build()
        .await?;

    let params = PatchCarParams {
        price: Some(75.0),
        color: Some("green".to_string()),
        ..Default::default()
    };
    let updated = CarRepository::new(db).update_partial(car, &params).await?;

    assert_eq!(updated.registration, "AB12CDE");
    assert_eq!(updated.price, 75.0);
    assert_eq!(updated.color.as_deref(), Some("green"));
    assert_eq!(updated.brand.as_deref(), Some("Toyota"));

    Ok(())
}
