use super::*;

/// Tests filtering the listing by color.
///
/// Expected: Ok with only the matching car returned
#[tokio::test]
async fn filters_by_color() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CarFactory::new(db).color("red").build().await?;
    let blue = CarFactory::new(db).color("blue").build().await?;

    let filter = CarFilter {
        color: Some("blue".to_string()),
        ..Default::default()
    };
    let cars = CarRepository::new(db).find_all(&filter).await?;

    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].id, blue.id);

    Ok(())
}

/// Tests combining a brand filter with a descending price sort.
///
/// Expected: Ok with matching cars ordered most expensive first
#[tokio::test]
async fn filters_by_brand_and_sorts_by_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cheap = CarFactory::new(db).brand("Fiat").price(20.0).build().await?;
    let dear = CarFactory::new(db).brand("Fiat").price(90.0).build().await?;
    CarFactory::new(db).brand("Audi").price(55.0).build().await?;

    let filter = CarFilter {
        brand: Some("Fiat".to_string()),
        sort: Some(PriceSort::Descending),
        ..Default::default()
    };
    let cars = CarRepository::new(db).find_all(&filter).await?;

    let ids: Vec<i32> = cars.iter().map(|car| car.id).collect();
    assert_eq!(ids, vec![dear.id, cheap.id]);

    Ok(())
}

/// Tests the unfiltered listing.
///
/// Expected: Ok with every car returned
#[tokio::test]
async fn returns_everything_without_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Car)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CarFactory::new(db).build().await?;
    CarFactory::new(db).build().await?;

    let cars = CarRepository::new(db).find_all(&CarFilter::default()).await?;

    assert_eq!(cars.len(), 2);

    Ok(())
}
