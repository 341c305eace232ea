use super::*;

/// Tests deleting a unit in the middle of a hierarchy.
///
/// Verifies the unit is deactivated, its child becomes a root and the removed
/// prefix disappears from the paths below it.
///
/// Expected: Ok with child path "/Web" and grandchild path "/Web/Frontend"
#[tokio::test]
async fn deactivates_and_reroots_children() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;

    let service = OrgUnitService::new(db);
    service
        .create_units(
            tenant.id,
            vec![unit("Eng"), child("Web", 1), child("Frontend", 2)],
        )
        .await?;

    service.delete_units(tenant.id, &[1]).await?;

    assert!(matches!(
        service.get(tenant.id, 1, None).await,
        Err(AppError::NotFound(_))
    ));

    let web = service.get(tenant.id, 2, None).await?;
    assert_eq!(web.parent_ref_id, None);
    assert_eq!(web.path, "/Web");

    let frontend = service.get(tenant.id, 3, None).await?;
    assert_eq!(frontend.parent_ref_id, Some(2));
    assert_eq!(frontend.path, "/Web/Frontend");

    Ok(())
}

/// Tests deleting a unit that has no active version.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_unit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;

    let result = OrgUnitService::new(db).delete_units(tenant.id, &[7]).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting one of two root units that share a name.
///
/// Expected: Ok with the other root's child keeping "/Eng/Web"
#[tokio::test]
async fn delete_leaves_same_named_subtree_alone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;

    let service = OrgUnitService::new(db);
    service
        .create_units(tenant.id, vec![unit("Eng"), unit("Eng"), child("Web", 1)])
        .await?;

    service.delete_units(tenant.id, &[2]).await?;

    let web = service.get(tenant.id, 3, None).await?;
    assert_eq!(web.parent_ref_id, Some(1));
    assert_eq!(web.path, "/Eng/Web");

    Ok(())
}
