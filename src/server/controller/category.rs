use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DeletedDto, ErrorDto},
        category::{
            CreateOuCategoryDto, OuCategoryDto, OuCategoryFilterDto, PaginatedOuCategoriesDto,
            UpdateOuCategoryDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Credentials, Permission},
        model::category::{CreateOuCategoryParams, OuCategoryFilter, UpdateOuCategoryParams},
        service::category::OuCategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// Create an org unit category, or return the existing one with the same name.
///
/// A category is identified by its name within a workspace. When a category with
/// that name already exists it is returned unchanged with `200 OK`. A newly
/// inserted category gets a root org unit when `root_ou_name` is given.
///
/// # Access Control
/// - `OrgAdmin`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `credentials` - Caller session or bearer token
/// - `payload` - Category definition and optional root org unit name
///
/// # Returns
/// - `201 Created` - Category inserted
/// - `200 OK` - Category already existed
/// - `400 Bad Request` - Blank name, unknown workspace or invalid root org unit name
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User cannot manage the organization
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/org/categories",
    tag = CATEGORY_TAG,
    request_body = CreateOuCategoryDto,
    responses(
        (status = 201, description = "Successfully created category", body = OuCategoryDto),
        (status = 200, description = "Category already exists", body = OuCategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    credentials: Credentials,
    Json(payload): Json<CreateOuCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::OrgAdmin])
        .await?;

    let params = CreateOuCategoryParams::from_dto(user.tenant_id, payload);
    let (category, created) = OuCategoryService::new(&state.db).create(params).await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(category.into_dto())))
}

/// Get paginated categories ordered by creation.
///
/// # Access Control
/// - `Read`
#[utoipa::path(
    get,
    path = "/api/org/categories",
    tag = CATEGORY_TAG,
    params(
        ("workspace_id" = Option<i32>, Query, description = "Workspace ID"),
        ("name" = Option<String>, Query, description = "Name substring"),
        ("enabled" = Option<bool>, Query, description = "Enabled flag"),
        ("is_predefined" = Option<bool>, Query, description = "Predefined flag"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("page_size" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved categories", body = PaginatedOuCategoriesDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
    credentials: Credentials,
    Query(filter): Query<OuCategoryFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Read])
        .await?;

    let categories = OuCategoryService::new(&state.db)
        .list(user.tenant_id, &OuCategoryFilter::from_dto(filter))
        .await?;

    Ok((StatusCode::OK, Json(categories.into_dto())))
}

/// Delete several categories at once. Unknown ids are ignored.
///
/// Org units of the deleted categories are kept without a category.
///
/// # Access Control
/// - `OrgAdmin`
#[utoipa::path(
    delete,
    path = "/api/org/categories",
    tag = CATEGORY_TAG,
    request_body = Vec<i32>,
    responses(
        (status = 200, description = "Number of deleted categories", body = DeletedDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_categories(
    State(state): State<AppState>,
    credentials: Credentials,
    Json(ids): Json<Vec<i32>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::OrgAdmin])
        .await?;

    let deleted = OuCategoryService::new(&state.db)
        .bulk_delete(user.tenant_id, &ids)
        .await?;

    Ok((StatusCode::OK, Json(DeletedDto { deleted })))
}

#[utoipa::path(
    get,
    path = "/api/org/categories/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved category", body = OuCategoryDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Read])
        .await?;

    let category = OuCategoryService::new(&state.db)
        .get(user.tenant_id, id)
        .await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Update a category. Omitted fields keep their value.
///
/// # Access Control
/// - `OrgAdmin`
#[utoipa::path(
    put,
    path = "/api/org/categories/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    request_body = UpdateOuCategoryDto,
    responses(
        (status = 200, description = "Successfully updated category", body = OuCategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOuCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::OrgAdmin])
        .await?;

    let category = OuCategoryService::new(&state.db)
        .update(user.tenant_id, id, UpdateOuCategoryParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/org/categories/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted category"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::OrgAdmin])
        .await?;

    OuCategoryService::new(&state.db)
        .delete(user.tenant_id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the categories of a workspace that have an org unit mapped to a dashboard.
///
/// # Access Control
/// - `Read`
#[utoipa::path(
    get,
    path = "/api/org/workspaces/{workspace_id}/dashboards/{dashboard_id}/categories",
    tag = CATEGORY_TAG,
    params(
        ("workspace_id" = i32, Path, description = "Workspace ID"),
        ("dashboard_id" = i32, Path, description = "Dashboard ID")
    ),
    responses(
        (status = 200, description = "Categories with org units on the dashboard", body = Vec<OuCategoryDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Workspace not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories_by_dashboard(
    State(state): State<AppState>,
    credentials: Credentials,
    Path((workspace_id, dashboard_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Read])
        .await?;

    let categories = OuCategoryService::new(&state.db)
        .list_by_dashboard(user.tenant_id, workspace_id, dashboard_id)
        .await?;

    let categories: Vec<OuCategoryDto> = categories
        .into_iter()
        .map(|category| category.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(categories)))
}
