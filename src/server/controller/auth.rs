use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, LoginResponseDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Credentials, Permission},
            session::AuthSession,
        },
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with company, email and password.
///
/// On success the user id is stored in the session cookie and a bearer token is
/// returned for clients that do not keep cookies.
///
/// # Arguments
/// - `state` - Application state containing the database connection and JWT keys
/// - `credentials` - Caller session the user id is written to
/// - `payload` - Company slug, email and password
///
/// # Returns
/// - `200 OK` - Token and the logged in user
/// - `401 Unauthorized` - Unknown company, unknown email or wrong password
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    credentials: Credentials,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt);

    let (user, token) = service
        .login(
            payload.company.trim(),
            &payload.email.trim().to_lowercase(),
            &payload.password,
        )
        .await?;

    AuthSession::new(&credentials.session)
        .set_user_id(user.id)
        .await?;

    tracing::info!("User {} logged in to tenant {}", user.id, user.tenant_id);

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            token,
            user: user.into_dto(),
        }),
    ))
}

/// Clear the caller's session.
///
/// Bearer tokens stay valid until they expire.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cleared"),
    ),
)]
pub async fn logout(credentials: Credentials) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&credentials.session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the authenticated user.
///
/// # Access Control
/// - Any authenticated user, including public dashboard users
///
/// # Returns
/// - `200 OK` - The caller
/// - `401 Unauthorized` - No valid session or token
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Authenticated user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    credentials: Credentials,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &credentials)
        .require(&[Permission::DashboardView])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
