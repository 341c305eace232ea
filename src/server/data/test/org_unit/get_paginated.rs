use super::*;

/// Tests the default filter returns only active versions ordered by ref id.
///
/// Expected: Ok with active units in ref id order and correct total
#[tokio::test]
async fn returns_active_units_in_ref_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;

    OrgUnitFactory::new(db, tenant.id).ref_id(2).build().await?;
    OrgUnitFactory::new(db, tenant.id).ref_id(1).build().await?;
    OrgUnitFactory::new(db, tenant.id)
        .ref_id(1)
        .version(2)
        .active(false)
        .build()
        .await?;

    let repo = OrgUnitRepository::new(db);
    let (units, total) = repo
        .get_paginated(tenant.id, &OrgUnitFilter::default(), 0, 10)
        .await?;

    assert_eq!(total, 2);
    assert_eq!(
        units.iter().map(|u| u.ref_id).collect::<Vec<_>>(),
        vec![1, 2]
    );

    Ok(())
}

/// Tests filtering by name, path prefix and category.
///
/// Expected: Ok with only units matching every set field
#[tokio::test]
async fn combines_field_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let category = factory::create_category(db, tenant.id).await?;

    let root = OrgUnitFactory::new(db, tenant.id)
        .name("Engineering")
        .category(category.id)
        .build()
        .await?;
    let web = OrgUnitFactory::new(db, tenant.id)
        .name("Web Platform")
        .parent(&root)
        .category(category.id)
        .build()
        .await?;
    OrgUnitFactory::new(db, tenant.id)
        .name("Data Platform")
        .category(category.id)
        .build()
        .await?;

    let repo = OrgUnitRepository::new(db);
    let filter = OrgUnitFilter {
        name: Some("platform".to_string()),
        path: Some("/Engineering".to_string()),
        ou_category_ids: Some(vec![category.id]),
        ..Default::default()
    };
    let (units, total) = repo.get_paginated(tenant.id, &filter, 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(units[0].id, web.id);

    Ok(())
}

/// Tests filtering by manager and by mapped dashboard.
///
/// Expected: Ok with the managed unit, and empty when no unit maps the dashboard
#[tokio::test]
async fn filters_by_manager_and_dashboard() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let manager = factory::create_org_user(db, tenant.id).await?;
    let dashboard = factory::create_dashboard(db, tenant.id).await?;
    let unmapped = factory::create_dashboard(db, tenant.id).await?;

    let managed = OrgUnitFactory::new(db, tenant.id).build().await?;
    OrgUnitFactory::new(db, tenant.id).build().await?;
    add_manager(db, managed.id, manager.id).await?;
    map_dashboard(db, managed.id, dashboard.id, 0).await?;

    let repo = OrgUnitRepository::new(db);

    let by_manager = OrgUnitFilter {
        manager_ids: Some(vec![manager.id]),
        ..Default::default()
    };
    let (units, _) = repo.get_paginated(tenant.id, &by_manager, 0, 10).await?;
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].id, managed.id);

    let by_dashboard = OrgUnitFilter {
        dashboard_id: Some(dashboard.id),
        ..Default::default()
    };
    let (units, _) = repo.get_paginated(tenant.id, &by_dashboard, 0, 10).await?;
    assert_eq!(units.len(), 1);

    let by_unmapped = OrgUnitFilter {
        dashboard_id: Some(unmapped.id),
        ..Default::default()
    };
    let (units, total) = repo.get_paginated(tenant.id, &by_unmapped, 0, 10).await?;
    assert!(units.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

/// Tests tenant isolation of the list query.
///
/// Expected: Ok with no units from another tenant
#[tokio::test]
async fn excludes_other_tenants() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let other = factory::create_tenant(db).await?;

    OrgUnitFactory::new(db, other.id).build().await?;

    let repo = OrgUnitRepository::new(db);
    let (units, total) = repo
        .get_paginated(tenant.id, &OrgUnitFilter::default(), 0, 10)
        .await?;

    assert!(units.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

/// Tests that LIKE wildcards in the path filter are matched literally.
///
/// Matching is also case-sensitive.
///
/// Expected: Ok with only the unit whose path literally starts with the prefix
#[tokio::test]
async fn path_prefix_is_literal() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;

    let underscored = OrgUnitFactory::new(db, tenant.id).name("A_B").build().await?;
    OrgUnitFactory::new(db, tenant.id).name("AxB").build().await?;
    let percent = OrgUnitFactory::new(db, tenant.id).name("50%").build().await?;
    OrgUnitFactory::new(db, tenant.id).name("500").build().await?;

    let repo = OrgUnitRepository::new(db);

    let by_underscore = OrgUnitFilter {
        path: Some("/A_".to_string()),
        ..Default::default()
    };
    let (units, total) = repo.get_paginated(tenant.id, &by_underscore, 0, 10).await?;
    assert_eq!(total, 1);
    assert_eq!(units[0].id, underscored.id);

    let by_percent = OrgUnitFilter {
        path: Some("/50%".to_string()),
        ..Default::default()
    };
    let (units, total) = repo.get_paginated(tenant.id, &by_percent, 0, 10).await?;
    assert_eq!(total, 1);
    assert_eq!(units[0].id, percent.id);

    let by_case = OrgUnitFilter {
        path: Some("/a_b".to_string()),
        ..Default::default()
    };
    let (_, total) = repo.get_paginated(tenant.id, &by_case, 0, 10).await?;
    assert_eq!(total, 0);

    Ok(())
}
