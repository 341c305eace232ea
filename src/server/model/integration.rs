//! Integration domain models.
//!
//! An integration is a configured connection to an external tool. Deployments,
//! incidents and org unit sections refer to it by id.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::model::integration::{
    CreateIntegrationDto, IntegrationDto, IntegrationFilterDto, PaginatedIntegrationsDto,
    UpdateIntegrationDto,
};

/// Longest accepted integration name.
pub const MAX_NAME_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct Integration {
    pub id: i32,
    pub tenant_id: i32,
    pub name: String,
    pub application: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub status: String,
    pub metadata: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Integration {
    pub fn from_entity(entity: entity::integration::Model) -> Self {
        Self {
            id: entity.id,
            tenant_id: entity.tenant_id,
            name: entity.name,
            application: entity.application,
            description: entity.description,
            url: entity.url,
            status: entity.status,
            metadata: entity.metadata,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> IntegrationDto {
        IntegrationDto {
            id: self.id,
            name: self.name,
            application: self.application,
            description: self.description,
            url: self.url,
            status: self.status,
            metadata: self.metadata,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateIntegrationParams {
    pub tenant_id: i32,
    pub name: String,
    pub application: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub status: String,
    pub metadata: Value,
}

impl CreateIntegrationParams {
    pub fn from_dto(tenant_id: i32, dto: CreateIntegrationDto) -> Self {
        Self {
            tenant_id,
            name: dto.name.trim().to_string(),
            application: dto.application.trim().to_lowercase(),
            description: dto.description,
            url: dto.url,
            status: dto.status.unwrap_or_else(|| "active".to_string()),
            metadata: dto.metadata.unwrap_or_else(|| json!({})),
        }
    }
}

/// Partial update; `None` leaves the field unchanged. The application is fixed.
#[derive(Debug, Clone, Default)]
pub struct UpdateIntegrationParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub status: Option<String>,
    pub metadata: Option<Value>,
}

impl UpdateIntegrationParams {
    pub fn from_dto(dto: UpdateIntegrationDto) -> Self {
        Self {
            name: dto.name.map(|n| n.trim().to_string()),
            description: dto.description,
            url: dto.url,
            status: dto.status,
            metadata: dto.metadata,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IntegrationFilter {
    pub application: Option<String>,
    pub name: Option<String>,
    pub page: u64,
    pub per_page: u64,
}

impl IntegrationFilter {
    pub fn from_dto(dto: IntegrationFilterDto) -> Self {
        Self {
            application: dto.application.map(|a| a.trim().to_lowercase()),
            name: dto.name,
            page: dto.page,
            per_page: dto.page_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedIntegrations {
    pub integrations: Vec<Integration>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedIntegrations {
    pub fn into_dto(self) -> PaginatedIntegrationsDto {
        PaginatedIntegrationsDto {
            integrations: self
                .integrations
                .into_iter()
                .map(Integration::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
