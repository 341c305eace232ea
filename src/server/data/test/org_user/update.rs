use super::*;

/// Tests replacing attributes while keeping other fields.
///
/// Expected: Ok(Some) with new attributes and the original name
#[tokio::test]
async fn replaces_attributes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let user = OrgUserFactory::new(db, tenant.id)
        .full_name("Ann")
        .attributes(json!({"team": "web"}))
        .build()
        .await?;

    let repo = OrgUserRepository::new(db);
    let updated = repo
        .update(
            tenant.id,
            user.id,
            UpdateOrgUserParams {
                attributes: Some(json!({"team": "data", "level": 3})),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.full_name, "Ann");
    assert_eq!(updated.attributes, json!({"team": "data", "level": 3}));

    Ok(())
}
