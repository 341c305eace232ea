//! Workspace domain models.
//!
//! A workspace groups integrations and org unit categories under one product
//! view. Categories carry their workspace id.

use chrono::{DateTime, Utc};

use crate::model::workspace::{
    CreateWorkspaceDto, PaginatedWorkspacesDto, UpdateWorkspaceDto, WorkspaceDto,
    WorkspaceFilterDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    pub id: i32,
    pub tenant_id: i32,
    pub name: String,
    pub key: String,
    pub description: Option<String>,
    pub owner_id: Option<i32>,
    pub disabled: bool,
    pub demo: bool,
    /// Ascending.
    pub integration_ids: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Workspace {
    pub fn from_entity(entity: entity::workspace::Model, mut integration_ids: Vec<i32>) -> Self {
        integration_ids.sort_unstable();

        Self {
            id: entity.id,
            tenant_id: entity.tenant_id,
            name: entity.name,
            key: entity.key,
            description: entity.description,
            owner_id: entity.owner_id,
            disabled: entity.disabled,
            demo: entity.demo,
            integration_ids,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> WorkspaceDto {
        WorkspaceDto {
            id: self.id,
            name: self.name,
            key: self.key,
            description: self.description,
            owner_id: self.owner_id,
            disabled: self.disabled,
            demo: self.demo,
            integration_ids: self.integration_ids,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Normalizes a workspace key: trimmed and uppercase.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_uppercase()
}

#[derive(Debug, Clone)]
pub struct CreateWorkspaceParams {
    pub tenant_id: i32,
    pub name: String,
    pub key: String,
    pub description: Option<String>,
    pub owner_id: Option<i32>,
    pub demo: bool,
    pub integration_ids: Vec<i32>,
}

impl CreateWorkspaceParams {
    pub fn from_dto(tenant_id: i32, dto: CreateWorkspaceDto) -> Self {
        Self {
            tenant_id,
            name: dto.name.trim().to_string(),
            key: normalize_key(&dto.key),
            description: dto.description,
            owner_id: dto.owner_id,
            demo: dto.demo.unwrap_or(false),
            integration_ids: dto.integration_ids,
        }
    }
}

/// Partial update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateWorkspaceParams {
    pub name: Option<String>,
    pub key: Option<String>,
    pub description: Option<String>,
    pub owner_id: Option<i32>,
    pub disabled: Option<bool>,
    pub integration_ids: Option<Vec<i32>>,
}

impl UpdateWorkspaceParams {
    pub fn from_dto(dto: UpdateWorkspaceDto) -> Self {
        Self {
            name: dto.name.map(|n| n.trim().to_string()),
            key: dto.key.as_deref().map(normalize_key),
            description: dto.description,
            owner_id: dto.owner_id,
            disabled: dto.disabled,
            integration_ids: dto.integration_ids,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct WorkspaceFilter {
    pub name: Option<String>,
    pub disabled: Option<bool>,
    pub page: u64,
    pub per_page: u64,
}

impl WorkspaceFilter {
    pub fn from_dto(dto: WorkspaceFilterDto) -> Self {
        Self {
            name: dto.name,
            disabled: dto.disabled,
            page: dto.page,
            per_page: dto.page_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedWorkspaces {
    pub workspaces: Vec<Workspace>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedWorkspaces {
    pub fn into_dto(self) -> PaginatedWorkspacesDto {
        PaginatedWorkspacesDto {
            workspaces: self
                .workspaces
                .into_iter()
                .map(Workspace::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
