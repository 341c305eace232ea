use super::*;

/// Tests creating a root unit and a child in one batch.
///
/// Verifies ref ids are allocated sequentially, the child may reference a unit
/// created earlier in the batch and paths are derived from the parent.
///
/// Expected: Ok with ref ids [1, 2] and path "/Engineering/Platform"
#[tokio::test]
async fn creates_batch_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;

    let service = OrgUnitService::new(db);
    let ref_ids = service
        .create_units(tenant.id, vec![unit("Engineering"), child("Platform", 1)])
        .await?;

    assert_eq!(ref_ids, vec![1, 2]);
    let platform = service.get(tenant.id, 2, None).await?;
    assert_eq!(platform.path, "/Engineering/Platform");
    assert_eq!(platform.version, 1);
    assert!(platform.active);

    Ok(())
}

/// Tests that a failing unit rolls back the whole batch.
///
/// Expected: Err(BadRequest) and no units stored
#[tokio::test]
async fn rolls_back_batch_on_invalid_unit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;

    let service = OrgUnitService::new(db);
    let result = service
        .create_units(tenant.id, vec![unit("Engineering"), child("Orphan", 99)])
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let stored = OrgUnitRepository::new(db).find_all_active(tenant.id).await?;
    assert!(stored.is_empty());

    Ok(())
}

/// Tests name validation.
///
/// Expected: Err(BadRequest) for blank names and names containing '/'
#[tokio::test]
async fn rejects_invalid_names() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;

    let service = OrgUnitService::new(db);

    let blank = service.create_unit(tenant.id, unit("")).await;
    assert!(matches!(blank, Err(AppError::BadRequest(_))));

    let slash = service.create_unit(tenant.id, unit("a/b")).await;
    assert!(matches!(slash, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a child inherits its parent's category.
///
/// Expected: Ok with the child in the parent's category
#[tokio::test]
async fn child_inherits_parent_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let category = factory::create_category(db, tenant.id).await?;

    let service = OrgUnitService::new(db);
    let root = service
        .create_unit(
            tenant.id,
            OrgUnitParams {
                ou_category_id: Some(category.id),
                ..unit("Teams")
            },
        )
        .await?;
    let team = service
        .create_unit(tenant.id, child("Web", root.ref_id))
        .await?;

    assert_eq!(team.ou_category_id, Some(category.id));

    Ok(())
}

/// Tests a child declaring a category different from its parent's.
///
/// Expected: Err(BadRequest) naming the category conflict
#[tokio::test]
async fn rejects_category_conflict_with_parent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let teams = OuCategoryFactory::new(db, tenant.id).name("Teams").build().await?;
    let products = OuCategoryFactory::new(db, tenant.id)
        .name("Products")
        .build()
        .await?;

    let service = OrgUnitService::new(db);
    let root = service
        .create_unit(
            tenant.id,
            OrgUnitParams {
                ou_category_id: Some(teams.id),
                ..unit("Teams")
            },
        )
        .await?;

    let result = service
        .create_unit(
            tenant.id,
            OrgUnitParams {
                ou_category_id: Some(products.id),
                ..child("Web", root.ref_id)
            },
        )
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(
            msg,
            "Parent and Child Org Units should belong to the same Org Unit Category"
        ),
        other => panic!("expected BadRequest, got {:?}", other),
    }

    Ok(())
}

/// Tests references to rows that do not exist in the tenant.
///
/// Expected: Err(BadRequest) for an unknown category, dashboard, manager and
/// section integration
#[tokio::test]
async fn rejects_unknown_references() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;

    let service = OrgUnitService::new(db);

    let category = service
        .create_unit(
            tenant.id,
            OrgUnitParams {
                ou_category_id: Some(404),
                ..unit("A")
            },
        )
        .await;
    assert!(matches!(category, Err(AppError::BadRequest(_))));

    let dashboard = service
        .create_unit(
            tenant.id,
            OrgUnitParams {
                default_dashboard_id: Some(404),
                ..unit("B")
            },
        )
        .await;
    assert!(matches!(dashboard, Err(AppError::BadRequest(_))));

    let manager = service
        .create_unit(
            tenant.id,
            OrgUnitParams {
                managers: vec![404],
                ..unit("C")
            },
        )
        .await;
    assert!(matches!(manager, Err(AppError::BadRequest(_))));

    let integration = service
        .create_unit(
            tenant.id,
            OrgUnitParams {
                sections: vec![OrgUnitSection {
                    integration_id: Some(404),
                    ..section(vec![], json!({}))
                }],
                ..unit("D")
            },
        )
        .await;
    assert!(matches!(integration, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that managers and sections are stored with the version.
///
/// Expected: Ok with one manager and one section on the returned unit
#[tokio::test]
async fn stores_managers_and_sections() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let lead = factory::create_org_user(db, tenant.id).await?;

    let created = OrgUnitService::new(db)
        .create_unit(
            tenant.id,
            OrgUnitParams {
                managers: vec![lead.id, lead.id],
                sections: vec![section(vec![lead.id], json!({}))],
                ..unit("Platform")
            },
        )
        .await?;

    assert_eq!(created.managers, vec![lead.id]);
    assert_eq!(created.sections.len(), 1);
    assert_eq!(created.sections[0].user_ids, vec![lead.id]);

    Ok(())
}

/// Tests a section scoped to a registered integration.
///
/// Expected: Ok with the integration id kept on the section
#[tokio::test]
async fn accepts_registered_section_integration() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let integration = factory::create_integration(db, tenant.id).await?;

    let created = OrgUnitService::new(db)
        .create_unit(
            tenant.id,
            OrgUnitParams {
                sections: vec![OrgUnitSection {
                    integration_id: Some(integration.id),
                    ..section(vec![], json!({}))
                }],
                ..unit("Platform")
            },
        )
        .await?;

    assert_eq!(created.sections[0].integration_id, Some(integration.id));

    Ok(())
}
