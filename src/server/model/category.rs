//! Org unit category domain models.
//!
//! A category groups org units into one hierarchy within a workspace (for example
//! "Teams" or "Projects"). Reads enrich the category with a summary of its active units.

use chrono::{DateTime, Utc};

use crate::model::category::{
    CreateOuCategoryDto, OuCategoryDto, OuCategoryFilterDto, PaginatedOuCategoriesDto,
    UpdateOuCategoryDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct OuCategory {
    pub id: i32,
    pub tenant_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub is_predefined: bool,
    pub enabled: bool,
    pub workspace_id: i32,
    pub root_ou_id: Option<i32>,
    pub root_ou_ref_id: Option<i32>,
    pub ou_ref_ids: Vec<i32>,
    pub count_of_ous: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OuCategory {
    /// Builds the category with its unit summary.
    ///
    /// `units` are the active org units assigned to the category. The first unit without
    /// a parent is reported as the root.
    pub fn from_entity(
        entity: entity::ou_category::Model,
        units: &[entity::org_unit::Model],
    ) -> Self {
        let root = units.iter().find(|u| u.parent_ref_id.is_none());
        let mut ou_ref_ids: Vec<i32> = units.iter().map(|u| u.ref_id).collect();
        ou_ref_ids.sort_unstable();
        ou_ref_ids.dedup();

        Self {
            id: entity.id,
            tenant_id: entity.tenant_id,
            name: entity.name,
            description: entity.description,
            is_predefined: entity.is_predefined,
            enabled: entity.enabled,
            workspace_id: entity.workspace_id,
            root_ou_id: root.map(|u| u.id),
            root_ou_ref_id: root.map(|u| u.ref_id),
            count_of_ous: ou_ref_ids.len() as u64,
            ou_ref_ids,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> OuCategoryDto {
        OuCategoryDto {
            id: self.id,
            name: self.name,
            description: self.description,
            is_predefined: self.is_predefined,
            enabled: self.enabled,
            workspace_id: self.workspace_id,
            root_ou_id: self.root_ou_id,
            root_ou_ref_id: self.root_ou_ref_id,
            ou_ref_ids: self.ou_ref_ids,
            count_of_ous: self.count_of_ous,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateOuCategoryParams {
    pub tenant_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub enabled: bool,
    pub is_predefined: bool,
    pub workspace_id: i32,
    pub root_ou_name: Option<String>,
}

impl CreateOuCategoryParams {
    pub fn from_dto(tenant_id: i32, dto: CreateOuCategoryDto) -> Self {
        Self {
            tenant_id,
            name: dto.name.trim().to_string(),
            description: dto.description,
            enabled: dto.enabled.unwrap_or(true),
            is_predefined: dto.is_predefined.unwrap_or(false),
            workspace_id: dto.workspace_id,
            root_ou_name: dto
                .root_ou_name
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        }
    }
}

/// Partial update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateOuCategoryParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub enabled: Option<bool>,
}

impl UpdateOuCategoryParams {
    pub fn from_dto(dto: UpdateOuCategoryDto) -> Self {
        Self {
            name: dto.name.map(|n| n.trim().to_string()),
            description: dto.description,
            enabled: dto.enabled,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OuCategoryFilter {
    pub workspace_id: Option<i32>,
    pub name: Option<String>,
    pub enabled: Option<bool>,
    pub is_predefined: Option<bool>,
    pub page: u64,
    pub per_page: u64,
}

impl OuCategoryFilter {
    pub fn from_dto(dto: OuCategoryFilterDto) -> Self {
        Self {
            workspace_id: dto.workspace_id,
            name: dto.name,
            enabled: dto.enabled,
            is_predefined: dto.is_predefined,
            page: dto.page,
            per_page: dto.page_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedOuCategories {
    pub categories: Vec<OuCategory>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedOuCategories {
    pub fn into_dto(self) -> PaginatedOuCategoriesDto {
        PaginatedOuCategoriesDto {
            categories: self
                .categories
                .into_iter()
                .map(OuCategory::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
