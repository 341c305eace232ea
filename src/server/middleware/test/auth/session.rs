use super::*;

/// Tests a request without any credentials.
///
/// Expected: Err(AuthErr(UserNotInSession))
#[tokio::test]
async fn rejects_missing_credentials() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let credentials = Credentials {
        session: session.clone(),
        bearer: None,
    };
    let jwt = keys();

    let result = AuthGuard::new(db, &jwt, &credentials)
        .require(&[Permission::Read])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests the session user is resolved.
///
/// Expected: Ok(User) matching the stored user
#[tokio::test]
async fn resolves_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (tenant, admin) = factory::create_tenant_with_admin(db).await?;

    AuthSession::new(session).set_user_id(admin.id).await?;
    let credentials = Credentials {
        session: session.clone(),
        bearer: None,
    };
    let jwt = keys();

    let user = AuthGuard::new(db, &jwt, &credentials)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(user.id, admin.id);
    assert_eq!(user.tenant_id, tenant.id);
    assert_eq!(user.role, Role::Admin);

    Ok(())
}

/// Tests a session pointing at a deleted user.
///
/// Expected: Err(AuthErr(UserNotInDatabase))
#[tokio::test]
async fn rejects_deleted_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(9999).await?;
    let credentials = Credentials {
        session: session.clone(),
        bearer: None,
    };
    let jwt = keys();

    let result = AuthGuard::new(db, &jwt, &credentials)
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(9999)))
    ));

    Ok(())
}
