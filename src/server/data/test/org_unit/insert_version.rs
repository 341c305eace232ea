use super::*;

/// Tests inserting a version with managers and sections.
///
/// Verifies the row is stored inactive and that duplicate manager ids are
/// collapsed while sections keep their order.
///
/// Expected: Ok with inactive row, two managers and both sections
#[tokio::test]
async fn inserts_inactive_version_with_children() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let alice = factory::create_org_user(db, tenant.id).await?;
    let bob = factory::create_org_user(db, tenant.id).await?;

    let params = OrgUnitParams {
        name: "Platform".to_string(),
        description: Some("Platform team".to_string()),
        parent_ref_id: None,
        tag_ids: vec![3, 1],
        ou_category_id: None,
        default_dashboard_id: None,
        managers: vec![bob.id, alice.id, bob.id],
        sections: vec![
            OrgUnitSection {
                integration_id: Some(11),
                integration_filters: json!({"repo": ["api"]}),
                dynamic_users_definition: json!({}),
                user_ids: vec![alice.id],
                default_section: true,
            },
            OrgUnitSection {
                integration_id: Some(12),
                integration_filters: json!({}),
                dynamic_users_definition: json!({"team": "platform"}),
                user_ids: Vec::new(),
                default_section: false,
            },
        ],
    };

    let repo = OrgUnitRepository::new(db);
    let unit = repo
        .insert_version(InsertOrgUnitVersion {
            tenant_id: tenant.id,
            ref_id: 1,
            version: 1,
            path: "/Platform".to_string(),
            ou_category_id: None,
            params: &params,
        })
        .await?;

    assert!(!unit.active);
    assert_eq!(unit.path, "/Platform");
    assert_eq!(unit.tag_ids, json!([3, 1]));

    let managers = repo.managers_by_unit(&[unit.id]).await?;
    let mut expected = vec![alice.id, bob.id];
    expected.sort_unstable();
    assert_eq!(managers.get(&unit.id), Some(&expected));

    let sections = repo.sections_by_unit(&[unit.id]).await?;
    let sections = sections.get(&unit.id).unwrap();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].integration_id, Some(11));
    assert_eq!(sections[0].user_ids, json!([alice.id]));
    assert_eq!(sections[1].dynamic_users_definition, json!({"team": "platform"}));

    Ok(())
}
