use super::*;

/// Tests the first ref id of a tenant.
///
/// Expected: Ok(1) when the tenant has no org units
#[tokio::test]
async fn starts_at_one() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;

    let repo = OrgUnitRepository::new(db);
    let next = repo.next_ref_id(tenant.id).await?;

    assert_eq!(next, 1);

    Ok(())
}

/// Tests ref ids continue past the highest existing one and ignore other tenants.
///
/// Expected: Ok(highest + 1) for the tenant's own units only
#[tokio::test]
async fn continues_after_highest_ref_id_of_tenant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let other = factory::create_tenant(db).await?;

    OrgUnitFactory::new(db, tenant.id).ref_id(4).build().await?;
    OrgUnitFactory::new(db, tenant.id)
        .ref_id(4)
        .version(2)
        .active(false)
        .build()
        .await?;
    OrgUnitFactory::new(db, other.id).ref_id(90).build().await?;

    let repo = OrgUnitRepository::new(db);

    assert_eq!(repo.next_ref_id(tenant.id).await?, 5);
    assert_eq!(repo.max_version(tenant.id, 4).await?, Some(2));
    assert_eq!(repo.max_version(tenant.id, 90).await?, None);

    Ok(())
}
