use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        workspace::{
            CreateWorkspaceDto, PaginatedWorkspacesDto, UpdateWorkspaceDto, WorkspaceDto,
            WorkspaceFilterDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Credentials, Permission},
        model::workspace::{CreateWorkspaceParams, UpdateWorkspaceParams, WorkspaceFilter},
        service::workspace::WorkspaceService,
        state::AppState,
    },
};

/// Tag for grouping workspace endpoints in OpenAPI documentation
pub static WORKSPACE_TAG: &str = "workspace";

/// Create a workspace linked to registered integrations.
///
/// The key is stored uppercase. Name and key must both be unused in the tenant.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - Workspace created
/// - `400 Bad Request` - Blank or used name or key, unknown owner or integration
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an administrator
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/workspaces",
    tag = WORKSPACE_TAG,
    request_body = CreateWorkspaceDto,
    responses(
        (status = 201, description = "Successfully created workspace", body = WorkspaceDto),
        (status = 400, description = "Invalid workspace data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_workspace(
    State(state): State<AppState>,
    credentials: Credentials,
    Json(payload): Json<CreateWorkspaceDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Admin])
        .await?;

    let workspace = WorkspaceService::new(&state.db)
        .create(CreateWorkspaceParams::from_dto(user.tenant_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(workspace.into_dto())))
}

/// Get paginated workspaces ordered by name.
///
/// # Access Control
/// - `Read`
#[utoipa::path(
    get,
    path = "/api/workspaces",
    tag = WORKSPACE_TAG,
    params(
        ("name" = Option<String>, Query, description = "Name substring"),
        ("disabled" = Option<bool>, Query, description = "Disabled flag"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("page_size" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved workspaces", body = PaginatedWorkspacesDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_workspaces(
    State(state): State<AppState>,
    credentials: Credentials,
    Query(filter): Query<WorkspaceFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Read])
        .await?;

    let workspaces = WorkspaceService::new(&state.db)
        .list(user.tenant_id, &WorkspaceFilter::from_dto(filter))
        .await?;

    Ok((StatusCode::OK, Json(workspaces.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/workspaces/{id}",
    tag = WORKSPACE_TAG,
    params(
        ("id" = i32, Path, description = "Workspace ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved workspace", body = WorkspaceDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Workspace not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_workspace(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Read])
        .await?;

    let workspace = WorkspaceService::new(&state.db)
        .get(user.tenant_id, id)
        .await?;

    Ok((StatusCode::OK, Json(workspace.into_dto())))
}

/// Update a workspace. Omitted fields keep their value; `integration_ids`
/// replaces the links when present.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/workspaces/{id}",
    tag = WORKSPACE_TAG,
    params(
        ("id" = i32, Path, description = "Workspace ID")
    ),
    request_body = UpdateWorkspaceDto,
    responses(
        (status = 200, description = "Successfully updated workspace", body = WorkspaceDto),
        (status = 400, description = "Invalid workspace data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Workspace not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_workspace(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateWorkspaceDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Admin])
        .await?;

    let workspace = WorkspaceService::new(&state.db)
        .update(user.tenant_id, id, UpdateWorkspaceParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(workspace.into_dto())))
}

/// Delete a workspace and its org unit categories.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/workspaces/{id}",
    tag = WORKSPACE_TAG,
    params(
        ("id" = i32, Path, description = "Workspace ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted workspace"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Workspace not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_workspace(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Admin])
        .await?;

    WorkspaceService::new(&state.db)
        .delete(user.tenant_id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
