use super::*;

/// Tests a valid bearer token resolves its user.
///
/// Expected: Ok(User)
#[tokio::test]
async fn resolves_token_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (_, admin) = factory::create_tenant_with_admin(db).await?;
    let jwt = keys();

    let token = jwt.issue(&User::from_entity(admin.clone())?)?;
    let credentials = Credentials {
        session: session.clone(),
        bearer: Some(token),
    };

    let user = AuthGuard::new(db, &jwt, &credentials)
        .require(&[Permission::Read])
        .await?;

    assert_eq!(user.id, admin.id);

    Ok(())
}

/// Tests the bearer token takes precedence over the session.
///
/// Verifies a bad token is rejected even when the session holds a valid user.
///
/// Expected: Err(AuthErr(InvalidToken))
#[tokio::test]
async fn rejects_bad_token_despite_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (_, admin) = factory::create_tenant_with_admin(db).await?;

    AuthSession::new(session).set_user_id(admin.id).await?;
    let credentials = Credentials {
        session: session.clone(),
        bearer: Some("not-a-jwt".to_string()),
    };
    let jwt = keys();

    let result = AuthGuard::new(db, &jwt, &credentials)
        .require(&[Permission::Read])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a token whose tenant claim differs from the user's tenant.
///
/// Expected: Err(AuthErr(InvalidToken))
#[tokio::test]
async fn rejects_tenant_mismatch() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (_, admin) = factory::create_tenant_with_admin(db).await?;
    let other = factory::create_tenant(db).await?;
    let jwt = keys();

    let mut forged = User::from_entity(admin)?;
    forged.tenant_id = other.id;
    let credentials = Credentials {
        session: session.clone(),
        bearer: Some(jwt.issue(&forged)?),
    };

    let result = AuthGuard::new(db, &jwt, &credentials)
        .require(&[Permission::Read])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}
