//! Tenant (company) domain models.

use chrono::{DateTime, Utc};

use crate::model::tenant::{CreateTenantDto, PaginatedTenantsDto, TenantDto};

/// Isolation boundary for one customer. Every tenant-scoped row references it.
#[derive(Debug, Clone, PartialEq)]
pub struct Tenant {
    pub id: i32,
    /// Lowercase slug used at login.
    pub company: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Tenant {
    pub fn from_entity(entity: entity::tenant::Model) -> Self {
        Self {
            id: entity.id,
            company: entity.company,
            name: entity.name,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> TenantDto {
        TenantDto {
            id: self.id,
            company: self.company,
            name: self.name,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a tenant together with its first administrator.
#[derive(Debug, Clone)]
pub struct CreateTenantParams {
    pub company: String,
    pub name: String,
    pub admin_email: String,
    pub admin_name: String,
    pub admin_password: String,
}

impl CreateTenantParams {
    pub fn from_dto(dto: CreateTenantDto) -> Self {
        Self {
            company: dto.company.trim().to_string(),
            name: dto.name,
            admin_email: dto.admin_email.trim().to_lowercase(),
            admin_name: dto.admin_name,
            admin_password: dto.admin_password,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedTenants {
    pub tenants: Vec<Tenant>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedTenants {
    pub fn into_dto(self) -> PaginatedTenantsDto {
        PaginatedTenantsDto {
            tenants: self.tenants.into_iter().map(Tenant::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
