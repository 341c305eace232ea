use super::*;

/// Tests categories are listed oldest first with filters applied.
///
/// Expected: Ok with enabled categories of the workspace in creation order
#[tokio::test]
async fn filters_and_orders_by_creation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let now = Utc::now();

    let newer = OuCategoryFactory::new(db, tenant.id)
        .name("Projects")
        .created_at(now)
        .build()
        .await?;
    let older = OuCategoryFactory::new(db, tenant.id)
        .name("Teams")
        .created_at(now - Duration::days(1))
        .build()
        .await?;
    OuCategoryFactory::new(db, tenant.id)
        .name("Legacy")
        .enabled(false)
        .build()
        .await?;
    OuCategoryFactory::new(db, tenant.id)
        .name("Elsewhere")
        .workspace_id(2)
        .build()
        .await?;

    let repo = OuCategoryRepository::new(db);
    let filter = OuCategoryFilter {
        workspace_id: Some(1),
        enabled: Some(true),
        page: 0,
        per_page: 10,
        ..Default::default()
    };
    let (categories, total) = repo.get_paginated(tenant.id, &filter).await?;

    assert_eq!(total, 2);
    assert_eq!(
        categories.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![older.id, newer.id]
    );

    Ok(())
}

/// Tests paging through categories.
///
/// Expected: Ok with the second page holding the remainder
#[tokio::test]
async fn returns_requested_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;

    for _ in 0..3 {
        factory::create_category(db, tenant.id).await?;
    }

    let repo = OuCategoryRepository::new(db);
    let filter = OuCategoryFilter {
        page: 1,
        per_page: 2,
        ..Default::default()
    };
    let (categories, total) = repo.get_paginated(tenant.id, &filter).await?;

    assert_eq!(total, 3);
    assert_eq!(categories.len(), 1);

    Ok(())
}
