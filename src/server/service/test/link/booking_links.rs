use super::*;
use crate::server::data::user::UserRepository;

/// Tests that linking the same booking id twice leaves a single entry.
///
/// Expected: list holds the id exactly once
#[tokio::test]
async fn linking_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ParentLocks::new();

    let user = factory::create_user(db).await?;

    let service = LinkService::new(db, &locks);
    service.link_booking_to_user(user.id, 7).await.unwrap();
    service.link_booking_to_user(user.id, 7).await.unwrap();

    let reread = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert_eq!(reread.bookings, serde_json::json!([7]));

    Ok(())
}

/// Tests unlinking an id that is absent from the list.
///
/// Expected: Ok with the list unchanged
#[tokio::test]
async fn unlinking_an_absent_id_is_a_no_op() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ParentLocks::new();

    let user = factory::create_user(db).await?;

    let service = LinkService::new(db, &locks);
    service.link_booking_to_user(user.id, 3).await.unwrap();
    service.unlink_booking_from_user(user.id, 99).await.unwrap();

    let reread = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert_eq!(reread.bookings, serde_json::json!([3]));

    Ok(())
}

/// Tests that unlinking removes only the named id and preserves order.
///
/// Expected: remaining entries keep their relative order
#[tokio::test]
async fn unlinking_preserves_the_rest() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = ParentLocks::new();

    let user = factory::create_user(db).await?;

    let service = LinkService::new(db, &locks);
    for id in [1, 2, 3] {
        service.link_booking_to_user(user.id, id).await.unwrap();
    }
    service.unlink_booking_from_user(user.id, 2).await.unwrap();

    let reread = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert_eq!(reread.bookings, serde_json::json!([1, 3]));

    Ok(())
}
