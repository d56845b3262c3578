use super::*;
use test_utils::factory;

/// Tests emptying every user's booking list in one statement.
///
/// Expected: Ok with both users left holding empty lists
#[tokio::test]
async fn empties_every_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let first = repo.set_booking_ids(first, &[1]).await?;
    repo.set_booking_ids(second, &[2, 3]).await?;

    let affected = repo.clear_all_booking_lists().await?;
    assert_eq!(affected, 2);

    let reread = repo.find_by_id(first.id).await?.unwrap();
    assert_eq!(reread.bookings, serde_json::json!([]));

    Ok(())
}
