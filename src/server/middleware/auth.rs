//! Request authentication and role-based authorization.
//!
//! Callers authenticate either with an `Authorization: Bearer <jwt>` header or a
//! session cookie. The bearer token wins when both are present. Handlers extract
//! [`Credentials`] and resolve them through [`AuthGuard::require`].

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
};
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::{Role, User},
    util::jwt::JwtKeys,
};

/// Capability required by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Read tenant data: org units, categories, org users, metrics.
    Read,
    /// Manage the org unit hierarchy and org users.
    OrgAdmin,
    /// Manage tenant configuration such as categories, dashboards and login users.
    Admin,
    /// Manage tenants across the installation.
    SuperAdmin,
    /// View dashboards. Public dashboard users are limited to public ones.
    DashboardView,
}

impl Permission {
    pub fn granted_to(&self, role: Role) -> bool {
        match self {
            Self::Read => role != Role::PublicDashboard,
            Self::OrgAdmin => matches!(role, Role::Admin | Role::SuperAdmin | Role::OrgAdminUser),
            Self::Admin => matches!(role, Role::Admin | Role::SuperAdmin),
            Self::SuperAdmin => role == Role::SuperAdmin,
            Self::DashboardView => true,
        }
    }
}

/// Raw caller credentials taken from the request.
pub struct Credentials {
    pub session: Session,
    pub bearer: Option<String>,
}

impl<S> FromRequestParts<S> for Credentials
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        let bearer = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());

        Ok(Self { session, bearer })
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtKeys,
    credentials: &'a Credentials,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtKeys, credentials: &'a Credentials) -> Self {
        Self {
            db,
            jwt,
            credentials,
        }
    }

    /// Resolves the calling user and checks every permission against their role.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding all permissions
    /// - `Err(AppError::AuthErr(UserNotInSession))` - No token and no session user
    /// - `Err(AppError::AuthErr(InvalidToken))` - Bad signature, expired, or tenant mismatch
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - User was deleted
    /// - `Err(AppError::AuthErr(AccessDenied))` - Role lacks a permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let (user_id, token_tenant_id) = match &self.credentials.bearer {
            Some(token) => {
                let claims = self
                    .jwt
                    .verify(token)
                    .map_err(|e| AuthError::InvalidToken(e.to_string()))?;
                (claims.sub, Some(claims.tenant_id))
            }
            None => {
                let Some(user_id) = AuthSession::new(&self.credentials.session)
                    .get_user_id()
                    .await?
                else {
                    return Err(AuthError::UserNotInSession.into());
                };
                (user_id, None)
            }
        };

        let Some(entity) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if token_tenant_id.is_some_and(|tenant_id| tenant_id != entity.tenant_id) {
            return Err(AuthError::InvalidToken(format!(
                "token tenant does not match user {}",
                user_id
            ))
            .into());
        }

        let user = User::from_entity(entity)?;

        for permission in permissions {
            if !permission.granted_to(user.role) {
                return Err(AuthError::AccessDenied(
                    user.id,
                    format!(
                        "{:?} permission required, user has role {}",
                        permission,
                        user.role.as_str()
                    ),
                )
                .into());
            }
        }

        Ok(user)
    }
}
