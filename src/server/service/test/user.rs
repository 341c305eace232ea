use super::*;

fn params(tenant_id: i32, email: &str, role: Role) -> CreateUserParams {
    CreateUserParams {
        tenant_id,
        email: email.to_string(),
        name: "New User".to_string(),
        role,
        password: "secret".to_string(),
    }
}

async fn actor(db: &sea_orm::DatabaseConnection, tenant_id: i32, role: &str) -> Result<User, AppError> {
    let entity = UserFactory::new(db, tenant_id).role(role).build().await?;
    User::from_entity(entity)
}

/// Tests creating a user in the admin's tenant.
///
/// Expected: Ok with the user listed for the tenant
#[tokio::test]
async fn creates_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let admin = actor(db, tenant.id, "ADMIN").await?;

    let service = UserService::new(db);
    let created = service
        .create(&admin, params(tenant.id, "auditor@example.com", Role::Auditor))
        .await?;

    assert_eq!(created.role, Role::Auditor);
    let page = service.get_all(tenant.id, 0, 10).await?;
    assert_eq!(page.total, 2);

    Ok(())
}

/// Tests creating a user with an email already used in the tenant.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let admin = actor(db, tenant.id, "ADMIN").await?;

    let service = UserService::new(db);
    service
        .create(&admin, params(tenant.id, "dup@example.com", Role::Auditor))
        .await?;
    let result = service
        .create(&admin, params(tenant.id, "dup@example.com", Role::Auditor))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that only super admins may create super admins.
///
/// Expected: Err(AccessDenied) for an admin, Ok for a super admin
#[tokio::test]
async fn super_admin_creation_requires_super_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tenant = factory::create_tenant(db).await?;
    let admin = actor(db, tenant.id, "ADMIN").await?;
    let root = actor(db, tenant.id, "SUPER_ADMIN").await?;

    let service = UserService::new(db);
    let denied = service
        .create(&admin, params(tenant.id, "boss@example.com", Role::SuperAdmin))
        .await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let created = service
        .create(&root, params(tenant.id, "boss@example.com", Role::SuperAdmin))
        .await?;
    assert_eq!(created.role, Role::SuperAdmin);

    Ok(())
}
