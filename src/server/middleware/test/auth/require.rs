use super::*;

/// Tests a valid bearer token naming an existing manager.
///
/// Expected: Ok with the manager entity returned
#[tokio::test]
async fn accepts_a_valid_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Manager)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = ManagerFactory::new(db).email("m@x.com").build().await?;
    let token = CredentialService::new(db, SECRET)
        .issue_token("m@x.com")
        .unwrap();

    let result = AuthGuard::new(db, SECRET)
        .require(&bearer_headers(&token))
        .await;

    assert_eq!(result.unwrap().id, manager.id);

    Ok(())
}

/// Tests a request with no Authorization header.
///
/// Expected: Err missing token
#[tokio::test]
async fn rejects_a_missing_header() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Manager)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthGuard::new(db, SECRET).require(&HeaderMap::new()).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a syntactically invalid token.
///
/// Expected: Err invalid token
#[tokio::test]
async fn rejects_a_garbage_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Manager)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthGuard::new(db, SECRET)
        .require(&bearer_headers("not-a-jwt"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests a well-signed token whose manager was deleted afterwards.
///
/// Expected: Err unknown manager
#[tokio::test]
async fn rejects_a_token_for_a_deleted_manager() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Manager)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let token = CredentialService::new(db, SECRET)
        .issue_token("gone@x.com")
        .unwrap();

    let result = AuthGuard::new(db, SECRET)
        .require(&bearer_headers(&token))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UnknownManager(_)))
    ));

    Ok(())
}
