use super::*;

fn params(company: &str) -> CreateTenantParams {
    CreateTenantParams {
        company: company.to_string(),
        name: "Acme Inc".to_string(),
        admin_email: "admin@acme.test".to_string(),
        admin_name: "Admin".to_string(),
        admin_password: "secret".to_string(),
    }
}

/// Tests creating a tenant with its first admin.
///
/// Expected: Ok with the admin in the new tenant and able to log in
#[tokio::test]
async fn creates_tenant_with_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (tenant, admin) = TenantService::new(db)
        .create(params("acme"), Role::Admin)
        .await?;

    assert_eq!(tenant.company, "acme");
    assert_eq!(admin.tenant_id, tenant.id);
    assert_eq!(admin.role, Role::Admin);

    let keys = keys();
    let (user, _) = AuthService::new(db, &keys)
        .login("acme", "admin@acme.test", "secret")
        .await?;
    assert_eq!(user.id, admin.id);

    Ok(())
}

/// Tests creating a tenant whose company is already taken.
///
/// Expected: Err(BadRequest("Company already exists"))
#[tokio::test]
async fn rejects_duplicate_company() -> Result<(), AppError> {
    let test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TenantService::new(db);
    service.create(params("acme"), Role::Admin).await?;
    let result = service.create(params("acme"), Role::Admin).await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Company already exists"),
        other => panic!("expected BadRequest, got {:?}", other),
    }

    Ok(())
}

/// Tests company slug validation.
///
/// Expected: Err(BadRequest) for empty, uppercase and spaced companies
#[tokio::test]
async fn rejects_invalid_company_slug() -> Result<(), AppError> {
    let test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TenantService::new(db);
    for company in ["", "Acme", "acme inc"] {
        let result = service.create(params(company), Role::Admin).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))), "{}", company);
    }
    assert!(!service.any_exists().await?);

    Ok(())
}

/// Tests listing tenants with pagination metadata.
///
/// Expected: Ok with 3 tenants over 2 pages of 2
#[tokio::test]
async fn lists_tenants_paginated() -> Result<(), AppError> {
    let test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_tenant(db).await?;
    }

    let page = TenantService::new(db).get_all(0, 2).await?;

    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.tenants.len(), 2);

    Ok(())
}
