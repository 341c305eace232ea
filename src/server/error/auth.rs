use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Neither a bearer token nor a session user was supplied.
    #[error("No authenticated user in session or bearer token")]
    UserNotInSession,

    /// The authenticated user id no longer exists.
    #[error("User {0} from session or token not found in database")]
    UserNotInDatabase(i32),

    /// The bearer token failed signature, expiry or claim validation.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// Login attempt with an unknown company, unknown email or wrong password.
    #[error("Invalid credentials for {company}/{email}")]
    InvalidCredentials { company: String, email: String },

    /// The user is authenticated but their role lacks the required permission.
    ///
    /// # Fields
    /// - User id that was denied
    /// - Description of the missing permission, logged server-side
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Details are logged at debug level while the client only receives a generic message.
///
/// # Returns
/// - 401 Unauthorized - Missing, invalid or stale credentials
/// - 403 Forbidden - Authenticated but insufficient role
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) | Self::InvalidToken(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::InvalidCredentials { .. } => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Insufficient permissions"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
