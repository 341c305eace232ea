use super::*;

/// Tests a partial update only touches the provided fields.
///
/// Expected: Ok(Some) with new name and unchanged description
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let category = OuCategoryFactory::new(db, tenant.id)
        .name("Teams")
        .description("People")
        .build()
        .await?;

    let repo = OuCategoryRepository::new(db);
    let updated = repo
        .update(
            tenant.id,
            category.id,
            UpdateOuCategoryParams {
                name: Some("Squads".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Squads");
    assert_eq!(updated.description.as_deref(), Some("People"));
    assert!(updated.enabled);

    Ok(())
}

/// Tests updating a category of another tenant.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_other_tenant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let other = factory::create_tenant(db).await?;
    let category = factory::create_category(db, other.id).await?;

    let repo = OuCategoryRepository::new(db);
    let result = repo
        .update(tenant.id, category.id, UpdateOuCategoryParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
