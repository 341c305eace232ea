use super::*;

/// Tests renaming a subtree prefix.
///
/// Verifies every version of the listed descendants is rewritten, including
/// inactive ones, while the unit itself, siblings sharing a name prefix and an
/// unrelated subtree with the very same path are untouched.
///
/// Expected: Ok(2) with rewritten descendant paths
#[tokio::test]
async fn rewrites_only_listed_descendants() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;

    let root = OrgUnitFactory::new(db, tenant.id).name("Eng").build().await?;
    let child = OrgUnitFactory::new(db, tenant.id)
        .name("Web")
        .parent(&root)
        .build()
        .await?;
    let old_child = OrgUnitFactory::new(db, tenant.id)
        .ref_id(child.ref_id)
        .version(2)
        .active(false)
        .name("Web")
        .parent(&root)
        .build()
        .await?;
    let sibling = OrgUnitFactory::new(db, tenant.id)
        .name("Engage")
        .build()
        .await?;
    let twin_root = OrgUnitFactory::new(db, tenant.id).name("Eng").build().await?;
    let twin_child = OrgUnitFactory::new(db, tenant.id)
        .name("Web")
        .parent(&twin_root)
        .build()
        .await?;

    let repo = OrgUnitRepository::new(db);
    let rewritten = repo
        .rewrite_descendant_paths(tenant.id, &[child.ref_id], "/Eng", "/Engineering")
        .await?;

    assert_eq!(rewritten, 2);
    assert_eq!(
        repo.find_by_id(tenant.id, child.id).await?.unwrap().path,
        "/Engineering/Web"
    );
    assert_eq!(
        repo.find_by_id(tenant.id, old_child.id).await?.unwrap().path,
        "/Engineering/Web"
    );
    assert_eq!(repo.find_by_id(tenant.id, root.id).await?.unwrap().path, "/Eng");
    assert_eq!(
        repo.find_by_id(tenant.id, sibling.id).await?.unwrap().path,
        "/Engage"
    );
    assert_eq!(
        repo.find_by_id(tenant.id, twin_child.id).await?.unwrap().path,
        "/Eng/Web"
    );

    Ok(())
}

/// Tests dropping a removed unit from descendant paths.
///
/// Expected: Ok with grandchild path collapsed onto the grandparent
#[tokio::test]
async fn collapses_removed_segment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;

    let root = OrgUnitFactory::new(db, tenant.id).name("A").build().await?;
    let middle = OrgUnitFactory::new(db, tenant.id)
        .name("B")
        .parent(&root)
        .build()
        .await?;
    let leaf = OrgUnitFactory::new(db, tenant.id)
        .name("C")
        .parent(&middle)
        .build()
        .await?;

    let repo = OrgUnitRepository::new(db);
    repo.rewrite_descendant_paths(tenant.id, &[leaf.ref_id], "/A/B", "/A")
        .await?;

    assert_eq!(repo.find_by_id(tenant.id, leaf.id).await?.unwrap().path, "/A/C");

    Ok(())
}

/// Tests rewriting with no descendants.
///
/// Expected: Ok(0) without touching any row
#[tokio::test]
async fn no_descendants_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;

    let root = OrgUnitFactory::new(db, tenant.id).name("A").build().await?;
    OrgUnitFactory::new(db, tenant.id)
        .name("B")
        .parent(&root)
        .build()
        .await?;

    let rewritten = OrgUnitRepository::new(db)
        .rewrite_descendant_paths(tenant.id, &[], "/A", "/Z")
        .await?;

    assert_eq!(rewritten, 0);

    Ok(())
}
