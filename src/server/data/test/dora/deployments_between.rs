use super::*;

/// Tests the range is half-open and integration scoping applies.
///
/// Expected: Ok with deployments at start included and at end excluded
#[tokio::test]
async fn uses_half_open_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dora_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let start = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    let end = start + Duration::days(7);

    let at_start = DeploymentFactory::new(db, tenant.id, start).build().await?;
    DeploymentFactory::new(db, tenant.id, end).build().await?;
    DeploymentFactory::new(db, tenant.id, start - Duration::seconds(1))
        .build()
        .await?;
    let other_integration = DeploymentFactory::new(db, tenant.id, start + Duration::days(1))
        .integration_id(2)
        .build()
        .await?;

    let repo = DoraRepository::new(db);

    let all = repo
        .deployments_between(tenant.id, None, start, end)
        .await?;
    assert_eq!(
        all.iter().map(|d| d.id).collect::<Vec<_>>(),
        vec![at_start.id, other_integration.id]
    );

    let scoped = repo
        .deployments_between(tenant.id, Some(&[1]), start, end)
        .await?;
    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped[0].id, at_start.id);

    Ok(())
}

/// Tests deployments of other tenants are excluded.
///
/// Expected: Ok with empty result
#[tokio::test]
async fn excludes_other_tenants() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_dora_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let other = factory::create_tenant(db).await?;
    let start = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();

    DeploymentFactory::new(db, other.id, start).build().await?;

    let repo = DoraRepository::new(db);
    let result = repo
        .deployments_between(tenant.id, None, start, start + Duration::days(1))
        .await?;

    assert!(result.is_empty());

    Ok(())
}
