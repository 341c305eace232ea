use super::*;

fn params(
    tenant_id: i32,
    workspace_id: i32,
    name: &str,
    root_ou_name: Option<&str>,
) -> CreateOuCategoryParams {
    CreateOuCategoryParams {
        tenant_id,
        name: name.to_string(),
        description: None,
        enabled: true,
        is_predefined: false,
        workspace_id,
        root_ou_name: root_ou_name.map(str::to_string),
    }
}

/// Tests creating a category together with its root org unit.
///
/// Expected: Ok((category, true)) enriched with the new root unit
#[tokio::test]
async fn create_with_root_unit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let workspace = factory::create_workspace(db, tenant.id).await?;

    let (category, created) = OuCategoryService::new(db)
        .create(params(tenant.id, workspace.id, "Teams", Some("All Teams")))
        .await?;

    assert!(created);
    assert_eq!(category.count_of_ous, 1);
    let root_ref_id = category.root_ou_ref_id.unwrap();

    let root = OrgUnitService::new(db).get(tenant.id, root_ref_id, None).await?;
    assert_eq!(root.path, "/All Teams");
    assert_eq!(root.ou_category_id, Some(category.id));

    Ok(())
}

/// Tests that creating an existing category returns it untouched.
///
/// Expected: Ok((category, false)) with the same id and no extra root unit
#[tokio::test]
async fn create_is_upsert() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let workspace = factory::create_workspace(db, tenant.id).await?;

    let service = OuCategoryService::new(db);
    let (first, _) = service
        .create(params(tenant.id, workspace.id, "Teams", Some("All Teams")))
        .await?;
    let (second, created) = service
        .create(params(tenant.id, workspace.id, "Teams", Some("Other Root")))
        .await?;

    assert!(!created);
    assert_eq!(second.id, first.id);
    assert_eq!(second.count_of_ous, 1);

    Ok(())
}

/// Tests creating a category with a blank name.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn create_rejects_blank_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let workspace = factory::create_workspace(db, tenant.id).await?;

    let result = OuCategoryService::new(db)
        .create(params(tenant.id, workspace.id, "", None))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a partial update and reading a missing category.
///
/// Expected: Ok with the new name kept alongside the old description
#[tokio::test]
async fn update_changes_supplied_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let workspace = factory::create_workspace(db, tenant.id).await?;

    let service = OuCategoryService::new(db);
    let (category, _) = service
        .create(CreateOuCategoryParams {
            description: Some("Delivery teams".to_string()),
            ..params(tenant.id, workspace.id, "Teams", None)
        })
        .await?;

    let updated = service
        .update(
            tenant.id,
            category.id,
            UpdateOuCategoryParams {
                name: Some("Squads".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, "Squads");
    assert_eq!(updated.description.as_deref(), Some("Delivery teams"));
    assert!(matches!(
        service.get(tenant.id, category.id + 100).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests that deleting a category keeps its org units.
///
/// Expected: Ok with the unit still active and without a category
#[tokio::test]
async fn delete_keeps_org_units() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let workspace = factory::create_workspace(db, tenant.id).await?;

    let service = OuCategoryService::new(db);
    let (category, _) = service
        .create(params(tenant.id, workspace.id, "Teams", Some("All Teams")))
        .await?;
    let root_ref_id = category.root_ou_ref_id.unwrap();

    service.delete(tenant.id, category.id).await?;

    let root = OrgUnitService::new(db).get(tenant.id, root_ref_id, None).await?;
    assert!(root.active);
    assert_eq!(root.ou_category_id, None);
    assert!(matches!(
        service.delete(tenant.id, category.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests listing categories of a workspace that use a dashboard.
///
/// Expected: Ok with only the category whose active unit maps the dashboard
#[tokio::test]
async fn list_by_dashboard_uses_active_mappings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let workspace = factory::create_workspace(db, tenant.id).await?;
    let dashboard = factory::create_dashboard(db, tenant.id).await?;

    let service = OuCategoryService::new(db);
    let (teams, _) = service
        .create(params(tenant.id, workspace.id, "Teams", None))
        .await?;
    let (projects, _) = service
        .create(params(tenant.id, workspace.id, "Projects", None))
        .await?;

    let team = OrgUnitFactory::new(db, tenant.id)
        .category(teams.id)
        .build()
        .await?;
    let retired = OrgUnitFactory::new(db, tenant.id)
        .category(projects.id)
        .active(false)
        .build()
        .await?;
    map_dashboard(db, team.id, dashboard.id, 1).await?;
    map_dashboard(db, retired.id, dashboard.id, 1).await?;

    let categories = service
        .list_by_dashboard(tenant.id, workspace.id, dashboard.id)
        .await?;

    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].id, teams.id);
    assert_eq!(categories[0].ou_ref_ids, vec![team.ref_id]);

    Ok(())
}

/// Tests listing with the enabled filter.
///
/// Expected: Ok with only the enabled category
#[tokio::test]
async fn list_filters_enabled() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let workspace = factory::create_workspace(db, tenant.id).await?;

    let service = OuCategoryService::new(db);
    service
        .create(params(tenant.id, workspace.id, "Teams", None))
        .await?;
    service
        .create(CreateOuCategoryParams {
            enabled: false,
            ..params(tenant.id, workspace.id, "Legacy", None)
        })
        .await?;

    let page = service
        .list(
            tenant.id,
            &OuCategoryFilter {
                enabled: Some(true),
                per_page: 10,
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.categories[0].name, "Teams");

    Ok(())
}

/// Tests renaming a category to the name of another category.
///
/// Verifies a clash only counts within the same workspace and that keeping the
/// current name is not a clash.
///
/// Expected: Err(BadRequest) in the shared workspace, Ok elsewhere
#[tokio::test]
async fn update_rejects_taken_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let workspace = factory::create_workspace(db, tenant.id).await?;
    let other_workspace = factory::create_workspace(db, tenant.id).await?;

    let service = OuCategoryService::new(db);
    service
        .create(params(tenant.id, workspace.id, "Teams", None))
        .await?;
    let (projects, _) = service
        .create(params(tenant.id, workspace.id, "Projects", None))
        .await?;
    let (elsewhere, _) = service
        .create(params(tenant.id, other_workspace.id, "Projects", None))
        .await?;

    let rename = |name: &str| UpdateOuCategoryParams {
        name: Some(name.to_string()),
        ..Default::default()
    };

    let clash = service.update(tenant.id, projects.id, rename("Teams")).await;
    assert!(matches!(clash, Err(AppError::BadRequest(_))));
    assert_eq!(service.get(tenant.id, projects.id).await?.name, "Projects");

    let same = service
        .update(tenant.id, projects.id, rename("Projects"))
        .await?;
    assert_eq!(same.name, "Projects");

    let moved = service
        .update(tenant.id, elsewhere.id, rename("Teams"))
        .await?;
    assert_eq!(moved.name, "Teams");

    Ok(())
}

/// Tests creating a category in a workspace that does not exist.
///
/// Expected: Err(BadRequest) and nothing stored
#[tokio::test]
async fn create_rejects_unknown_workspace() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let workspace = factory::create_workspace(db, tenant.id).await?;

    let service = OuCategoryService::new(db);
    let result = service
        .create(params(tenant.id, workspace.id + 100, "Teams", None))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let page = service
        .list(
            tenant.id,
            &OuCategoryFilter {
                per_page: 10,
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(page.total, 0);

    Ok(())
}

/// Tests listing categories by dashboard for a workspace that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn list_by_dashboard_rejects_unknown_workspace() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let other = factory::create_tenant(db).await?;
    let foreign = factory::create_workspace(db, other.id).await?;
    let dashboard = factory::create_dashboard(db, tenant.id).await?;

    let result = OuCategoryService::new(db)
        .list_by_dashboard(tenant.id, foreign.id, dashboard.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting several categories at once.
///
/// Verifies ids that are unknown or belong to another tenant are skipped and
/// do not count towards the result.
///
/// Expected: Ok(2) with only the kept category left in the tenant
#[tokio::test]
async fn bulk_delete_counts_only_deleted() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let workspace = factory::create_workspace(db, tenant.id).await?;
    let other = factory::create_tenant(db).await?;
    let foreign = factory::create_category(db, other.id).await?;

    let service = OuCategoryService::new(db);
    let (teams, _) = service
        .create(params(tenant.id, workspace.id, "Teams", None))
        .await?;
    let (projects, _) = service
        .create(params(tenant.id, workspace.id, "Projects", None))
        .await?;
    let (kept, _) = service
        .create(params(tenant.id, workspace.id, "Kept", None))
        .await?;

    let deleted = service
        .bulk_delete(
            tenant.id,
            &[teams.id, projects.id, foreign.id, kept.id + 100],
        )
        .await?;

    assert_eq!(deleted, 2);
    let page = service
        .list(
            tenant.id,
            &OuCategoryFilter {
                per_page: 10,
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(page.total, 1);
    assert_eq!(page.categories[0].id, kept.id);
    assert_eq!(service.get(other.id, foreign.id).await?.id, foreign.id);
    assert_eq!(service.bulk_delete(tenant.id, &[]).await?, 0);

    Ok(())
}
