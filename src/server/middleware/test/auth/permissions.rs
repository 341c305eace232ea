use super::*;

async fn require_as(role: &str, permission: Permission) -> Result<Result<User, AppError>, AppError> {
    let mut test = TestBuilder::new().with_tenant_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let tenant = factory::create_tenant(db).await?;
    let user = factory::user::UserFactory::new(db, tenant.id)
        .role(role)
        .build()
        .await?;

    AuthSession::new(session).set_user_id(user.id).await?;
    let credentials = Credentials {
        session: session.clone(),
        bearer: None,
    };
    let jwt = keys();

    Ok(AuthGuard::new(db, &jwt, &credentials)
        .require(&[permission])
        .await)
}

/// Tests an auditor can read but not administer.
///
/// Expected: Ok for Read, Err(AccessDenied) for OrgAdmin
#[tokio::test]
async fn auditor_reads_only() -> Result<(), AppError> {
    assert!(require_as("AUDITOR", Permission::Read).await?.is_ok());
    assert!(matches!(
        require_as("AUDITOR", Permission::OrgAdmin).await?,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests a public dashboard user can only view dashboards.
///
/// Expected: Ok for DashboardView, Err(AccessDenied) for Read
#[tokio::test]
async fn public_dashboard_user_views_dashboards_only() -> Result<(), AppError> {
    assert!(require_as("PUBLIC_DASHBOARD", Permission::DashboardView)
        .await?
        .is_ok());
    assert!(matches!(
        require_as("PUBLIC_DASHBOARD", Permission::Read).await?,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests org admins manage org units but not tenant configuration.
///
/// Expected: Ok for OrgAdmin, Err(AccessDenied) for Admin
#[tokio::test]
async fn org_admin_user_limited_to_org_admin() -> Result<(), AppError> {
    assert!(require_as("ORG_ADMIN_USER", Permission::OrgAdmin)
        .await?
        .is_ok());
    assert!(matches!(
        require_as("ORG_ADMIN_USER", Permission::Admin).await?,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests only super admins hold the super admin permission.
///
/// Expected: Ok for SUPER_ADMIN, Err(AccessDenied) for ADMIN
#[tokio::test]
async fn super_admin_required_for_tenant_management() -> Result<(), AppError> {
    assert!(require_as("SUPER_ADMIN", Permission::SuperAdmin)
        .await?
        .is_ok());
    assert!(matches!(
        require_as("ADMIN", Permission::SuperAdmin).await?,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests a stored role that is not recognized.
///
/// Expected: Err(InternalErr(UnknownRole))
#[tokio::test]
async fn unknown_role_is_internal_error() -> Result<(), AppError> {
    let result = require_as("WIZARD", Permission::DashboardView).await?;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
