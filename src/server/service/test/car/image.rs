use super::*;
use base64::Engine;

/// Tests decoding a stored `data:` URL into raw bytes.
///
/// Expected: Ok with the original payload
#[tokio::test]
async fn decodes_a_data_url() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ParentLocks::new();

    let payload = base64::engine::general_purpose::STANDARD.encode(b"png-bytes");
    factory::car::CarFactory::new(db)
        .registration("REG1")
        .image(format!("data:image/png;base64,{payload}"))
        .build()
        .await?;

    let bytes = CarService::new(db, &locks).get_image("REG1").await.unwrap();

    assert_eq!(bytes, b"png-bytes");

    Ok(())
}

/// Tests a car without a stored image.
///
/// Expected: Err NotFound
#[tokio::test]
async fn reports_a_missing_image_as_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ParentLocks::new();

    factory::create_car_with_registration(db, "REG1").await?;

    let result = CarService::new(db, &locks).get_image("REG1").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
