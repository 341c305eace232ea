use super::*;

/// Tests that a public dashboard user cannot open a private dashboard.
///
/// Expected: 404 Not Found for the private dashboard, 200 OK for the public one
#[tokio::test]
async fn public_user_sees_only_public() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let tenant = factory::create_tenant(db).await?;
    let viewer = UserFactory::new(db, tenant.id)
        .role("PUBLIC_DASHBOARD")
        .build()
        .await?;
    let private = DashboardFactory::new(db, tenant.id).build().await?;
    let public = DashboardFactory::new(db, tenant.id).public(true).build().await?;
    let state = state(db);

    let response = dashboard::get_dashboard(
        State(state.clone()),
        bearer(&state, session, &viewer),
        Path(private.id),
    )
    .await
    .into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = dashboard::get_dashboard(
        State(state.clone()),
        bearer(&state, session, &viewer),
        Path(public.id),
    )
    .await
    .into_response();
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

/// Tests listing dashboards without any credentials.
///
/// Expected: 401 Unauthorized
#[tokio::test]
async fn anonymous_list_is_rejected() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let response = dashboard::get_dashboards(
        State(state(db)),
        anonymous(session),
        Query(DashboardFilterDto::default()),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
