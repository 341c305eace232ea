use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PaginationParams},
        user::{CreateUserDto, PaginatedUsersDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Credentials, Permission},
        model::user::CreateUserParams,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Create a login user in the caller's tenant.
///
/// # Access Control
/// - `Admin` - Admins create users; only super admins may create super admins
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `credentials` - Caller session or bearer token
/// - `payload` - Email, display name, role and password
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Blank email or password, or email already taken
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin, or is creating a super admin without being one
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    credentials: Credentials,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateUserParams::from_dto(actor.tenant_id, payload);
    let user = UserService::new(&state.db).create(&actor, params).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Get paginated users of the caller's tenant.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved users", body = PaginatedUsersDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    credentials: Credentials,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .get_all(actor.tenant_id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}
