use super::*;

fn org_user(id: i32, attributes: serde_json::Value) -> OrgUser {
    OrgUser {
        id,
        tenant_id: 1,
        full_name: format!("User {}", id),
        email: format!("user{}@example.com", id),
        attributes,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn resolve_members_unions_static_and_dynamic() {
    let users = vec![
        org_user(1, json!({"team": "web"})),
        org_user(2, json!({"team": "data"})),
        org_user(3, json!({"team": "web", "site": "berlin"})),
    ];
    let sections = vec![
        section(vec![2], json!({})),
        section(vec![], json!({"team": "web"})),
    ];

    assert_eq!(resolve_members(&sections, &users), vec![1, 2, 3]);
}

#[test]
fn resolve_members_requires_every_dynamic_key() {
    let users = vec![
        org_user(1, json!({"team": "web"})),
        org_user(2, json!({"team": "web", "site": "berlin"})),
    ];
    let sections = vec![section(vec![], json!({"team": "web", "site": "berlin"}))];

    assert_eq!(resolve_members(&sections, &users), vec![2]);
}

/// Tests members stored for a unit with static and dynamic sections.
///
/// Expected: Ok with the statically listed user and the attribute match
#[tokio::test]
async fn members_of_active_version() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let listed = OrgUserFactory::new(db, tenant.id)
        .attributes(json!({"team": "data"}))
        .build()
        .await?;
    let matched = OrgUserFactory::new(db, tenant.id)
        .attributes(json!({"team": "web"}))
        .build()
        .await?;
    OrgUserFactory::new(db, tenant.id)
        .attributes(json!({"team": "ops"}))
        .build()
        .await?;

    let service = OrgUnitService::new(db);
    let created = service
        .create_unit(
            tenant.id,
            OrgUnitParams {
                sections: vec![
                    section(vec![listed.id], json!({})),
                    section(vec![], json!({"team": "web"})),
                ],
                ..unit("Web")
            },
        )
        .await?;

    let members = service.members(tenant.id, created.ref_id).await?;

    let mut ids: Vec<i32> = members.iter().map(|m| m.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![listed.id, matched.id]);

    Ok(())
}

/// Tests reading sections stored directly on a version.
///
/// Expected: Ok with the section's integration id on the loaded unit
#[tokio::test]
async fn get_loads_sections() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;

    let stored = OrgUnitFactory::new(db, tenant.id).name("Web").build().await?;
    add_section(db, stored.id, Some(12), vec![], json!({})).await?;

    let loaded = OrgUnitService::new(db)
        .get(tenant.id, stored.ref_id, None)
        .await?;

    assert_eq!(loaded.sections.len(), 1);
    assert_eq!(loaded.sections[0].integration_id, Some(12));

    Ok(())
}

/// Tests that an org user created after the unit joins through its attributes.
///
/// Expected: Ok with the new org user listed as a member
#[tokio::test]
async fn members_include_org_users_created_later() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;

    let service = OrgUnitService::new(db);
    let created = service
        .create_unit(
            tenant.id,
            OrgUnitParams {
                sections: vec![section(vec![], json!({"team": "web"}))],
                ..unit("Web")
            },
        )
        .await?;
    assert!(service.members(tenant.id, created.ref_id).await?.is_empty());

    let joined = OrgUserService::new(db)
        .create(CreateOrgUserParams {
            tenant_id: tenant.id,
            full_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            attributes: json!({"team": "web"}),
        })
        .await?;

    let members = service.members(tenant.id, created.ref_id).await?;

    let ids: Vec<i32> = members.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![joined.id]);

    Ok(())
}

/// Tests that changing or removing an org user updates membership.
///
/// Verifies a user whose attributes stop matching leaves the unit, and a
/// statically listed user that is deleted is no longer reported.
///
/// Expected: Ok with only the remaining matching user
#[tokio::test]
async fn members_follow_org_user_changes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_org_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let mover = OrgUserFactory::new(db, tenant.id)
        .attributes(json!({"team": "web"}))
        .build()
        .await?;
    let stayer = OrgUserFactory::new(db, tenant.id)
        .attributes(json!({"team": "web"}))
        .build()
        .await?;
    let listed = OrgUserFactory::new(db, tenant.id).build().await?;

    let service = OrgUnitService::new(db);
    let created = service
        .create_unit(
            tenant.id,
            OrgUnitParams {
                sections: vec![
                    section(vec![listed.id], json!({})),
                    section(vec![], json!({"team": "web"})),
                ],
                ..unit("Web")
            },
        )
        .await?;

    let org_users = OrgUserService::new(db);
    org_users
        .update(
            tenant.id,
            mover.id,
            UpdateOrgUserParams {
                attributes: Some(json!({"team": "ops"})),
                ..Default::default()
            },
        )
        .await?;
    org_users.delete(tenant.id, listed.id).await?;

    let members = service.members(tenant.id, created.ref_id).await?;

    let ids: Vec<i32> = members.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![stayer.id]);

    Ok(())
}
