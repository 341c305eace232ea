//! Login user domain models and parameters.
//!
//! Users authenticate against a tenant and carry one role that decides which
//! permissions the auth guard grants them.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{CreateUserDto, PaginatedUsersDto, RoleDto, UserDto},
    server::error::{internal::InternalError, AppError},
};

/// Role of a login user within its tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    SuperAdmin,
    OrgAdminUser,
    Auditor,
    PublicDashboard,
}

impl Role {
    /// Name stored in the `user.role` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::SuperAdmin => "SUPER_ADMIN",
            Self::OrgAdminUser => "ORG_ADMIN_USER",
            Self::Auditor => "AUDITOR",
            Self::PublicDashboard => "PUBLIC_DASHBOARD",
        }
    }

    /// Parses a stored role name, returning `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ADMIN" => Some(Self::Admin),
            "SUPER_ADMIN" => Some(Self::SuperAdmin),
            "ORG_ADMIN_USER" => Some(Self::OrgAdminUser),
            "AUDITOR" => Some(Self::Auditor),
            "PUBLIC_DASHBOARD" => Some(Self::PublicDashboard),
            _ => None,
        }
    }
}

impl From<RoleDto> for Role {
    fn from(dto: RoleDto) -> Self {
        match dto {
            RoleDto::Admin => Self::Admin,
            RoleDto::SuperAdmin => Self::SuperAdmin,
            RoleDto::OrgAdminUser => Self::OrgAdminUser,
            RoleDto::Auditor => Self::Auditor,
            RoleDto::PublicDashboard => Self::PublicDashboard,
        }
    }
}

impl From<Role> for RoleDto {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => Self::Admin,
            Role::SuperAdmin => Self::SuperAdmin,
            Role::OrgAdminUser => Self::OrgAdminUser,
            Role::Auditor => Self::Auditor,
            Role::PublicDashboard => Self::PublicDashboard,
        }
    }
}

/// Authenticated login user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub tenant_id: i32,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(UnknownRole))` - Stored role name is not recognized
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = Role::from_name(&entity.role).ok_or_else(|| InternalError::UnknownRole {
            user_id: entity.id,
            role: entity.role.clone(),
        })?;

        Ok(Self {
            id: entity.id,
            tenant_id: entity.tenant_id,
            email: entity.email,
            name: entity.name,
            role,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            tenant_id: self.tenant_id,
            email: self.email,
            name: self.name,
            role: self.role.into(),
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a login user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub tenant_id: i32,
    pub email: String,
    pub name: String,
    pub role: Role,
    /// Plain-text password, hashed before it is stored.
    pub password: String,
}

impl CreateUserParams {
    pub fn from_dto(tenant_id: i32, dto: CreateUserDto) -> Self {
        Self {
            tenant_id,
            email: dto.email.trim().to_lowercase(),
            name: dto.name,
            role: dto.role.into(),
            password: dto.password,
        }
    }
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
