use super::*;
use crate::server::data::is_unique_violation;

/// Tests inserting a new manager.
///
/// Expected: Ok with an empty car list
#[tokio::test]
async fn creates_manager_with_empty_car_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Manager)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = ManagerRepository::new(db)
        .insert(&register_params("m@x.com"), "hash".to_string())
        .await?;

    assert_eq!(manager.email, "m@x.com");
    assert_eq!(manager.balance, 100.0);
    assert_eq!(manager.cars, serde_json::json!([]));

    Ok(())
}

/// Tests that the unique index rejects a second manager with the same email.
///
/// Expected: Err recognized as a unique violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Manager)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ManagerRepository::new(db);
    repo.insert(&register_params("m@x.com"), "hash".to_string())
        .await?;

    let result = repo
        .insert(&register_params("m@x.com"), "hash".to_string())
        .await;

    assert!(is_unique_violation(&result.unwrap_err()));

    Ok(())
}
