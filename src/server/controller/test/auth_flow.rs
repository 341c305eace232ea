use super::*;

/// Tests logging in with valid credentials.
///
/// Verifies the response carries a token for the user and that the session now
/// authenticates follow-up requests without a bearer token.
///
/// Expected: 200 OK, then 200 OK from the current user endpoint
#[tokio::test]
async fn login_establishes_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (tenant, admin) = factory::create_tenant_with_admin(db).await?;
    let state = state(db);

    let response = auth::login(
        State(state.clone()),
        anonymous(session),
        Json(LoginDto {
            company: tenant.company.clone(),
            email: admin.email.to_uppercase(),
            password: DEFAULT_PASSWORD.to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let login: LoginResponseDto = body(response).await;
    assert_eq!(login.user.id, admin.id);
    assert_eq!(state.jwt.verify(&login.token).unwrap().sub, admin.id);
    assert_eq!(AuthSession::new(session).get_user_id().await?, Some(admin.id));

    let response = auth::get_user(State(state), anonymous(session))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let user: UserDto = body(response).await;
    assert_eq!(user.email, admin.email);

    Ok(())
}

/// Tests logging in with a wrong password.
///
/// Expected: 401 Unauthorized and no user in the session
#[tokio::test]
async fn login_rejects_wrong_password() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (tenant, admin) = factory::create_tenant_with_admin(db).await?;

    let response = auth::login(
        State(state(db)),
        anonymous(session),
        Json(LoginDto {
            company: tenant.company,
            email: admin.email,
            password: "wrong".to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(AuthSession::new(session).get_user_id().await?, None);

    Ok(())
}

/// Tests that logout clears the session.
///
/// Expected: 204 No Content, then 401 Unauthorized from the current user endpoint
#[tokio::test]
async fn logout_clears_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (_, admin) = factory::create_tenant_with_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let response = auth::logout(anonymous(session)).await.into_response();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = auth::get_user(State(state(db)), anonymous(session))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
