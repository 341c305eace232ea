use super::*;

/// Tests searching org users by name fragment.
///
/// Expected: Ok with matches ordered by full name
#[tokio::test]
async fn searches_by_full_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;

    let zed = OrgUserFactory::new(db, tenant.id)
        .full_name("Zed Smith")
        .build()
        .await?;
    let ann = OrgUserFactory::new(db, tenant.id)
        .full_name("Ann Smithers")
        .build()
        .await?;
    OrgUserFactory::new(db, tenant.id)
        .full_name("Bo Jones")
        .build()
        .await?;

    let repo = OrgUserRepository::new(db);
    let filter = OrgUserFilter {
        full_name: Some("smith".to_string()),
        page: 0,
        per_page: 10,
        ..Default::default()
    };
    let (users, total) = repo.get_paginated(tenant.id, &filter).await?;

    assert_eq!(total, 2);
    assert_eq!(
        users.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![ann.id, zed.id]
    );

    Ok(())
}

/// Tests a blank search term is ignored.
///
/// Expected: Ok with every org user of the tenant
#[tokio::test]
async fn ignores_blank_search() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    factory::create_org_user(db, tenant.id).await?;
    factory::create_org_user(db, tenant.id).await?;

    let repo = OrgUserRepository::new(db);
    let filter = OrgUserFilter {
        email: Some("   ".to_string()),
        page: 0,
        per_page: 10,
        ..Default::default()
    };
    let (_, total) = repo.get_paginated(tenant.id, &filter).await?;

    assert_eq!(total, 2);

    Ok(())
}
