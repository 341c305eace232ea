//! Org user domain models and parameters.
//!
//! Org users are the people of a customer's organization. They are referenced by
//! org units as managers and members and are unrelated to login users.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::model::org_user::{
    CreateOrgUserDto, OrgUserDto, OrgUserFilterDto, PaginatedOrgUsersDto, UpdateOrgUserDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct OrgUser {
    pub id: i32,
    pub tenant_id: i32,
    pub full_name: String,
    pub email: String,
    pub attributes: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrgUser {
    pub fn from_entity(entity: entity::org_user::Model) -> Self {
        Self {
            id: entity.id,
            tenant_id: entity.tenant_id,
            full_name: entity.full_name,
            email: entity.email,
            attributes: entity.attributes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> OrgUserDto {
        OrgUserDto {
            id: self.id,
            full_name: self.full_name,
            email: self.email,
            attributes: self.attributes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateOrgUserParams {
    pub tenant_id: i32,
    pub full_name: String,
    pub email: String,
    pub attributes: Value,
}

impl CreateOrgUserParams {
    pub fn from_dto(tenant_id: i32, dto: CreateOrgUserDto) -> Self {
        Self {
            tenant_id,
            full_name: dto.full_name,
            email: dto.email.trim().to_lowercase(),
            attributes: dto.attributes.unwrap_or_else(|| Value::Object(Map::new())),
        }
    }
}

/// Partial update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateOrgUserParams {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub attributes: Option<Value>,
}

impl UpdateOrgUserParams {
    pub fn from_dto(dto: UpdateOrgUserDto) -> Self {
        Self {
            full_name: dto.full_name,
            email: dto.email.map(|e| e.trim().to_lowercase()),
            attributes: dto.attributes,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OrgUserFilter {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub page: u64,
    pub per_page: u64,
}

impl OrgUserFilter {
    pub fn from_dto(dto: OrgUserFilterDto) -> Self {
        Self {
            email: dto.email,
            full_name: dto.full_name,
            page: dto.page,
            per_page: dto.page_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedOrgUsers {
    pub org_users: Vec<OrgUser>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedOrgUsers {
    pub fn into_dto(self) -> PaginatedOrgUsersDto {
        PaginatedOrgUsersDto {
            org_users: self.org_users.into_iter().map(OrgUser::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
