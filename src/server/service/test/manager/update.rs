use super::*;

/// Tests changing a manager's email to one held by somebody else.
///
/// Expected: Err Conflict
#[tokio::test]
async fn rejects_an_email_already_in_use() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Manager)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::manager::ManagerFactory::new(db)
        .email("a@x.com")
        .build()
        .await?;
    factory::manager::ManagerFactory::new(db)
        .email("b@x.com")
        .build()
        .await?;

    let credentials = CredentialService::new(db, SECRET);
    let params = PatchManagerParams {
        email: Some("b@x.com".to_string()),
        ..Default::default()
    };
    let result = ManagerService::new(db)
        .update_partial("a@x.com", params, &credentials)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests a patch that re-submits the manager's own email.
///
/// Expected: Ok, the self-match is not a conflict
#[tokio::test]
async fn accepts_the_managers_own_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Manager)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::manager::ManagerFactory::new(db)
        .email("a@x.com")
        .build()
        .await?;

    let credentials = CredentialService::new(db, SECRET);
    let params = PatchManagerParams {
        email: Some("a@x.com".to_string()),
        balance: Some(7.5),
        ..Default::default()
    };
    let updated = ManagerService::new(db)
        .update_partial("a@x.com", params, &credentials)
        .await
        .unwrap();

    assert_eq!(updated.email, "a@x.com");
    assert_eq!(updated.balance, 7.5);

    Ok(())
}

/// Tests a patch without a password.
///
/// Expected: the stored hash still verifies the original password
#[tokio::test]
async fn keeps_the_hash_when_no_password_is_supplied() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Manager)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::manager::ManagerFactory::new(db)
        .email("a@x.com")
        .password("pw123456")
        .build()
        .await?;

    let credentials = CredentialService::new(db, SECRET);
    let params = PatchManagerParams {
        fname: Some("Renamed".to_string()),
        ..Default::default()
    };
    ManagerService::new(db)
        .update_partial("a@x.com", params, &credentials)
        .await
        .unwrap();

    let token = credentials.authenticate("a@x.com", "pw123456").await;
    assert!(token.is_ok());

    Ok(())
}
