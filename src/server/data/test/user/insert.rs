use super::*;
use crate::server::data::is_unique_violation;

/// Tests inserting a new user.
///
/// Expected: Ok with the stored hash and an empty booking list
#[tokio::test]
async fn creates_user_with_empty_booking_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .insert(&register_params("u@x.com"), "hash".to_string())
        .await?;

    assert_eq!(user.email, "u@x.com");
    assert_eq!(user.password, "hash");
    assert_eq!(user.bookings, serde_json::json!([]));

    Ok(())
}

/// Tests that the unique index rejects a second user with the same email.
///
/// Expected: Err recognized as a unique violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.insert(&register_params("u@x.com"), "hash".to_string())
        .await?;

    let result = repo
        .insert(&register_params("u@x.com"), "hash".to_string())
        .await;

    assert!(result.is_err());
    assert!(is_unique_violation(&result.unwrap_err()));

    Ok(())
}
