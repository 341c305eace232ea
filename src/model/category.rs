use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::default_entries;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OuCategoryDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub is_predefined: bool,
    pub enabled: bool,
    pub workspace_id: i32,
    /// Row id of the active root org unit (no parent) in this category.
    pub root_ou_id: Option<i32>,
    pub root_ou_ref_id: Option<i32>,
    /// Ref ids of all active org units in this category.
    pub ou_ref_ids: Vec<i32>,
    pub count_of_ous: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOuCategoryDto {
    pub name: String,
    pub description: Option<String>,
    pub enabled: Option<bool>,
    pub is_predefined: Option<bool>,
    pub workspace_id: i32,
    /// When set and the category is newly created, a root org unit with this name is created in it.
    pub root_ou_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateOuCategoryDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct OuCategoryFilterDto {
    pub workspace_id: Option<i32>,
    pub name: Option<String>,
    pub enabled: Option<bool>,
    pub is_predefined: Option<bool>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub page_size: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedOuCategoriesDto {
    pub categories: Vec<OuCategoryDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
