use super::*;
use crate::server::data::manager::ManagerRepository;

/// Tests creating a car under a manager.
///
/// Expected: Ok with the car id appended to the manager's list
#[tokio::test]
async fn creating_links_the_car_to_the_manager() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ParentLocks::new();

    let manager = factory::create_manager(db).await?;

    let car = CarService::new(db, &locks)
        .create_for_manager(&manager.email, create_params("REG1"))
        .await
        .unwrap();

    let reread = ManagerRepository::new(db)
        .find_by_email(&manager.email)
        .await?
        .unwrap();
    assert_eq!(reread.cars, serde_json::json!([car.id]));

    Ok(())
}

/// Tests creating a car under an unknown manager.
///
/// Expected: Err NotFound, no car inserted
#[tokio::test]
async fn rejects_an_unknown_manager() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ParentLocks::new();

    let service = CarService::new(db, &locks);
    let result = service
        .create_for_manager("ghost@x.com", create_params("REG1"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(service.get_all(&Default::default()).await.unwrap().is_empty());

    Ok(())
}

/// Tests deleting one of a manager's cars.
///
/// Expected: Ok with the car gone and its id retracted from the list
#[tokio::test]
async fn deleting_unlinks_the_car() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ParentLocks::new();

    let manager = factory::create_manager(db).await?;

    let service = CarService::new(db, &locks);
    service
        .create_for_manager(&manager.email, create_params("REG1"))
        .await
        .unwrap();
    service
        .delete_for_manager(&manager.email, "REG1")
        .await
        .unwrap();

    let result = service.get_by_registration("REG1").await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let reread = ManagerRepository::new(db)
        .find_by_email(&manager.email)
        .await?
        .unwrap();
    assert_eq!(reread.cars, serde_json::json!([]));

    Ok(())
}

/// Tests looking up a registration the manager does not own even though
/// the car exists.
///
/// Expected: Err NotFound
#[tokio::test]
async fn scoped_lookup_ignores_foreign_cars() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ParentLocks::new();

    let manager = factory::create_manager(db).await?;
    factory::create_car_with_registration(db, "REG1").await?;

    let result = CarService::new(db, &locks)
        .get_for_manager_by_registration(&manager.email, "REG1")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the bulk delete quirk on an empty table.
///
/// Expected: Err NotFound when there is nothing to delete
#[tokio::test]
async fn delete_all_on_empty_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ParentLocks::new();

    let service = CarService::new(db, &locks);

    let result = service.delete_all().await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    factory::create_car(db).await?;
    assert_eq!(service.delete_all().await.unwrap(), 1);

    Ok(())
}
