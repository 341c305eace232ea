use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PaginationParams},
        tenant::{CreateTenantDto, PaginatedTenantsDto, TenantDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Credentials, Permission},
        model::{tenant::CreateTenantParams, user::Role},
        service::tenant::TenantService,
        state::AppState,
    },
};

/// Tag for grouping tenant endpoints in OpenAPI documentation
pub static TENANT_TAG: &str = "tenant";

/// Create a tenant together with its first admin user.
///
/// # Access Control
/// - `SuperAdmin` - Only super admins can provision tenants
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `credentials` - Caller session or bearer token
/// - `payload` - Company slug, display name and admin credentials
///
/// # Returns
/// - `201 Created` - The new tenant
/// - `400 Bad Request` - Invalid slug, blank admin credentials or company already exists
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a super admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/tenants",
    tag = TENANT_TAG,
    request_body = CreateTenantDto,
    responses(
        (status = 201, description = "Successfully created tenant", body = TenantDto),
        (status = 400, description = "Invalid tenant data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a super admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tenant(
    State(state): State<AppState>,
    credentials: Credentials,
    Json(payload): Json<CreateTenantDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::SuperAdmin])
        .await?;

    let service = TenantService::new(&state.db);

    let (tenant, admin) = service
        .create(CreateTenantParams::from_dto(payload), Role::Admin)
        .await?;

    tracing::info!(
        "Created tenant {} ({}) with admin user {}",
        tenant.company,
        tenant.id,
        admin.id
    );

    Ok((StatusCode::CREATED, Json(tenant.into_dto())))
}

/// Get paginated tenants ordered by company.
///
/// # Access Control
/// - `SuperAdmin`
#[utoipa::path(
    get,
    path = "/api/tenants",
    tag = TENANT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved tenants", body = PaginatedTenantsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a super admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tenants(
    State(state): State<AppState>,
    credentials: Credentials,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::SuperAdmin])
        .await?;

    let tenants = TenantService::new(&state.db)
        .get_all(params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(tenants.into_dto())))
}
