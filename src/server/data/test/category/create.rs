use super::*;

fn params(tenant_id: i32, name: &str) -> CreateOuCategoryParams {
    CreateOuCategoryParams {
        tenant_id,
        name: name.to_string(),
        description: Some("Delivery teams".to_string()),
        enabled: true,
        is_predefined: false,
        workspace_id: 3,
        root_ou_name: None,
    }
}

/// Tests creating a category and finding it by its unique key.
///
/// Expected: Ok with the stored category found by tenant, workspace and name
#[tokio::test]
async fn creates_and_finds_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;

    let repo = OuCategoryRepository::new(db);
    let created = repo.create(&params(tenant.id, "Teams")).await?;

    let found = repo.find_by_name(tenant.id, 3, "Teams").await?;
    assert_eq!(found.map(|c| c.id), Some(created.id));

    assert!(repo.find_by_name(tenant.id, 4, "Teams").await?.is_none());

    Ok(())
}
