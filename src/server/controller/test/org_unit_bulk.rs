use super::*;

/// Tests creating several org units in one request.
///
/// Expected: 201 Created with the new ref ids in request order and no errors
#[tokio::test]
async fn bulk_create_reports_ref_ids() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (_, admin) = factory::create_tenant_with_admin(db).await?;
    let state = state(db);

    let response = org_unit::create_org_units(
        State(state.clone()),
        bearer(&state, session, &admin),
        Json(vec![unit("Engineering"), unit("Sales")]),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::CREATED);
    let result: BulkResultDto = body(response).await;
    assert_eq!(result.success, vec![1, 2]);
    assert!(result.errors.is_empty());

    Ok(())
}

/// Tests that a blank name in the batch fails the whole request.
///
/// Expected: 400 Bad Request and no unit stored
#[tokio::test]
async fn bulk_create_rejects_blank_name() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (_, admin) = factory::create_tenant_with_admin(db).await?;
    let state = state(db);

    let response = org_unit::create_org_units(
        State(state.clone()),
        bearer(&state, session, &admin),
        Json(vec![unit("Engineering"), unit("  ")]),
    )
    .await
    .into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = org_unit::get_org_unit(
        State(state.clone()),
        bearer(&state, session, &admin),
        Path(1),
        Query(org_unit::VersionParams { version: None }),
    )
    .await
    .into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}
