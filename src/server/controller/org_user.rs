use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        org_user::{
            CreateOrgUserDto, OrgUserDto, OrgUserFilterDto, PaginatedOrgUsersDto,
            UpdateOrgUserDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Credentials, Permission},
        model::org_user::{CreateOrgUserParams, OrgUserFilter, UpdateOrgUserParams},
        service::org_user::OrgUserService,
        state::AppState,
    },
};

/// Tag for grouping org user endpoints in OpenAPI documentation
pub static ORG_USER_TAG: &str = "org_user";

/// Create an org user.
///
/// Org users are the people modelled in the organization hierarchy. They do not
/// log in.
///
/// # Access Control
/// - `OrgAdmin`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `credentials` - Caller session or bearer token
/// - `payload` - Full name, email and free-form attributes
///
/// # Returns
/// - `201 Created` - The created org user
/// - `400 Bad Request` - Blank fields, non-object attributes or email already used
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User cannot manage the organization
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/org-users",
    tag = ORG_USER_TAG,
    request_body = CreateOrgUserDto,
    responses(
        (status = 201, description = "Successfully created org user", body = OrgUserDto),
        (status = 400, description = "Invalid org user data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_org_user(
    State(state): State<AppState>,
    credentials: Credentials,
    Json(payload): Json<CreateOrgUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::OrgAdmin])
        .await?;

    let org_user = OrgUserService::new(&state.db)
        .create(CreateOrgUserParams::from_dto(user.tenant_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(org_user.into_dto())))
}

/// Get paginated org users, optionally filtered by email or name substring.
///
/// # Access Control
/// - `Read`
#[utoipa::path(
    get,
    path = "/api/org-users",
    tag = ORG_USER_TAG,
    params(
        ("email" = Option<String>, Query, description = "Case-insensitive email substring"),
        ("full_name" = Option<String>, Query, description = "Case-insensitive name substring"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("page_size" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved org users", body = PaginatedOrgUsersDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_org_users(
    State(state): State<AppState>,
    credentials: Credentials,
    Query(filter): Query<OrgUserFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Read])
        .await?;

    let org_users = OrgUserService::new(&state.db)
        .get_paginated(user.tenant_id, OrgUserFilter::from_dto(filter))
        .await?;

    Ok((StatusCode::OK, Json(org_users.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/org-users/{id}",
    tag = ORG_USER_TAG,
    params(
        ("id" = i32, Path, description = "Org user ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved org user", body = OrgUserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Org user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_org_user(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Read])
        .await?;

    let org_user = OrgUserService::new(&state.db)
        .get(user.tenant_id, id)
        .await?;

    Ok((StatusCode::OK, Json(org_user.into_dto())))
}

/// Update an org user. Omitted fields keep their value.
///
/// # Access Control
/// - `OrgAdmin`
///
/// # Returns
/// - `200 OK` - The updated org user
/// - `400 Bad Request` - Email already used or non-object attributes
/// - `404 Not Found` - No org user with that id in the tenant
#[utoipa::path(
    put,
    path = "/api/org-users/{id}",
    tag = ORG_USER_TAG,
    params(
        ("id" = i32, Path, description = "Org user ID")
    ),
    request_body = UpdateOrgUserDto,
    responses(
        (status = 200, description = "Successfully updated org user", body = OrgUserDto),
        (status = 400, description = "Invalid org user data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Org user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_org_user(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrgUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::OrgAdmin])
        .await?;

    let org_user = OrgUserService::new(&state.db)
        .update(user.tenant_id, id, UpdateOrgUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(org_user.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/org-users/{id}",
    tag = ORG_USER_TAG,
    params(
        ("id" = i32, Path, description = "Org user ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted org user"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Org user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_org_user(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::OrgAdmin])
        .await?;

    OrgUserService::new(&state.db)
        .delete(user.tenant_id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
