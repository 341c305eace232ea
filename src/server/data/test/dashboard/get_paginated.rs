use super::*;

fn filter() -> DashboardFilter {
    DashboardFilter {
        page: 0,
        per_page: 10,
        ..Default::default()
    }
}

/// Tests restricting the list to public dashboards.
///
/// Verifies `public_only` overrides an explicit `public: false` filter.
///
/// Expected: Ok with only the public dashboard
#[tokio::test]
async fn public_only_overrides_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;

    let public = DashboardFactory::new(db, tenant.id)
        .name("Shared")
        .public(true)
        .build()
        .await?;
    DashboardFactory::new(db, tenant.id)
        .name("Private")
        .build()
        .await?;

    let repo = DashboardRepository::new(db);
    let private_filter = DashboardFilter {
        public: Some(false),
        ..filter()
    };
    let (dashboards, total) = repo.get_paginated(tenant.id, &private_filter, true).await?;

    assert_eq!(total, 1);
    assert_eq!(dashboards[0].id, public.id);

    Ok(())
}

/// Tests name, type and owner filters.
///
/// Expected: Ok with the single dashboard matching all filters
#[tokio::test]
async fn filters_by_name_type_and_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (tenant, admin) = factory::create_tenant_with_admin(db).await?;

    let wanted = DashboardFactory::new(db, tenant.id)
        .name("DORA Overview")
        .dashboard_type("dora")
        .owner(admin.id)
        .build()
        .await?;
    DashboardFactory::new(db, tenant.id)
        .name("DORA Drafts")
        .dashboard_type("dora")
        .build()
        .await?;
    DashboardFactory::new(db, tenant.id)
        .name("Dora business")
        .owner(admin.id)
        .build()
        .await?;

    let repo = DashboardRepository::new(db);
    let by_fields = DashboardFilter {
        name: Some("dora".to_string()),
        dashboard_type: Some("dora".to_string()),
        owner_id: Some(admin.id),
        ..filter()
    };
    let (dashboards, total) = repo.get_paginated(tenant.id, &by_fields, false).await?;

    assert_eq!(total, 1);
    assert_eq!(dashboards[0].id, wanted.id);
    assert!(dashboards[0].widgets.is_empty());

    Ok(())
}
