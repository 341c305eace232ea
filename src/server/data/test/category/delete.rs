use super::*;

/// Tests deleting a category clears it from its org units.
///
/// Expected: Ok(1) and the org unit survives without a category
#[tokio::test]
async fn clears_category_on_org_units() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let category = factory::create_category(db, tenant.id).await?;
    let unit = OrgUnitFactory::new(db, tenant.id)
        .category(category.id)
        .build()
        .await?;

    let repo = OuCategoryRepository::new(db);
    let deleted = repo.delete(tenant.id, &[category.id]).await?;

    assert_eq!(deleted, 1);
    let unit = crate::server::data::org_unit::OrgUnitRepository::new(db)
        .find_by_id(tenant.id, unit.id)
        .await?
        .unwrap();
    assert_eq!(unit.ou_category_id, None);

    Ok(())
}

/// Tests deleting categories of another tenant.
///
/// Expected: Ok(0)
#[tokio::test]
async fn ignores_other_tenant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let other = factory::create_tenant(db).await?;
    let category = factory::create_category(db, other.id).await?;

    let repo = OuCategoryRepository::new(db);

    assert_eq!(repo.delete(tenant.id, &[category.id]).await?, 0);
    assert_eq!(repo.delete(tenant.id, &[]).await?, 0);

    Ok(())
}
