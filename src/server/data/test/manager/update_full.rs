use super::*;

/// Tests full replacement of a manager's profile.
///
/// Expected: Ok with every field overwritten, including the password hash,
/// while the car list is left alone
#[tokio::test]
async fn overwrites_every_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Manager)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ManagerRepository::new(db);
    let manager = repo
        .insert(&register_params("m@x.com"), "old-hash".to_string())
        .await?;
    let manager = repo.set_car_ids(manager, &[5]).await?;

    let params = UpdateManagerParams {
        email: "new@x.com".to_string(),
        fname: "Nora".to_string(),
        lname: "Neu".to_string(),
        password: "newpassword".to_string(),
        balance: 250.0,
        address: "2 Other Street".to_string(),
    };
    let updated = repo
        .update_full(manager, &params, "new-hash".to_string())
        .await?;

    assert_eq!(updated.email, "new@x.com");
    assert_eq!(updated.fname, "Nora");
    assert_eq!(updated.password, "new-hash");
    assert_eq!(updated.balance, 250.0);
    assert_eq!(updated.cars, serde_json::json!([5]));

    Ok(())
}
