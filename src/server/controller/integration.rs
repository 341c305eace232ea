use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        integration::{
            CreateIntegrationDto, IntegrationDto, IntegrationFilterDto, PaginatedIntegrationsDto,
            UpdateIntegrationDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Credentials, Permission},
        model::integration::{
            CreateIntegrationParams, IntegrationFilter, UpdateIntegrationParams,
        },
        service::integration::IntegrationService,
        state::AppState,
    },
};

/// Tag for grouping integration endpoints in OpenAPI documentation
pub static INTEGRATION_TAG: &str = "integration";

/// Register an integration.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - Integration registered
/// - `400 Bad Request` - Blank or too long name, blank application, or name taken
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an administrator
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/integrations",
    tag = INTEGRATION_TAG,
    request_body = CreateIntegrationDto,
    responses(
        (status = 201, description = "Successfully created integration", body = IntegrationDto),
        (status = 400, description = "Invalid integration data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_integration(
    State(state): State<AppState>,
    credentials: Credentials,
    Json(payload): Json<CreateIntegrationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Admin])
        .await?;

    let integration = IntegrationService::new(&state.db)
        .create(CreateIntegrationParams::from_dto(user.tenant_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(integration.into_dto())))
}

/// Get paginated integrations ordered by name.
///
/// # Access Control
/// - `Read`
#[utoipa::path(
    get,
    path = "/api/integrations",
    tag = INTEGRATION_TAG,
    params(
        ("application" = Option<String>, Query, description = "Application, e.g. github"),
        ("name" = Option<String>, Query, description = "Name substring"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("page_size" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved integrations", body = PaginatedIntegrationsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_integrations(
    State(state): State<AppState>,
    credentials: Credentials,
    Query(filter): Query<IntegrationFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Read])
        .await?;

    let integrations = IntegrationService::new(&state.db)
        .list(user.tenant_id, &IntegrationFilter::from_dto(filter))
        .await?;

    Ok((StatusCode::OK, Json(integrations.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/integrations/{id}",
    tag = INTEGRATION_TAG,
    params(
        ("id" = i32, Path, description = "Integration ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved integration", body = IntegrationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Integration not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_integration(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Read])
        .await?;

    let integration = IntegrationService::new(&state.db)
        .get(user.tenant_id, id)
        .await?;

    Ok((StatusCode::OK, Json(integration.into_dto())))
}

/// Update an integration. Omitted fields keep their value.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/integrations/{id}",
    tag = INTEGRATION_TAG,
    params(
        ("id" = i32, Path, description = "Integration ID")
    ),
    request_body = UpdateIntegrationDto,
    responses(
        (status = 200, description = "Successfully updated integration", body = IntegrationDto),
        (status = 400, description = "Invalid integration data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Integration not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_integration(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateIntegrationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Admin])
        .await?;

    let integration = IntegrationService::new(&state.db)
        .update(user.tenant_id, id, UpdateIntegrationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(integration.into_dto())))
}

/// Delete an integration with its deployments and incidents.
///
/// Org unit sections scoped to the integration lose that scope.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/integrations/{id}",
    tag = INTEGRATION_TAG,
    params(
        ("id" = i32, Path, description = "Integration ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted integration"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Integration not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_integration(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Admin])
        .await?;

    IntegrationService::new(&state.db)
        .delete(user.tenant_id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
