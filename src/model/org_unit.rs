use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::model::api::default_entries;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrgUnitSectionDto {
    pub integration_id: Option<i32>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub integration_filters: Value,
    /// Attribute matcher: org users whose attributes contain every key/value pair are members.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub dynamic_users_definition: Value,
    #[serde(default)]
    pub user_ids: Vec<i32>,
    #[serde(default)]
    pub default_section: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrgUnitDto {
    pub id: i32,
    pub ref_id: i32,
    pub version: i32,
    pub name: String,
    pub description: Option<String>,
    pub parent_ref_id: Option<i32>,
    pub tag_ids: Vec<i32>,
    pub active: bool,
    pub path: String,
    pub ou_category_id: Option<i32>,
    pub default_dashboard_id: Option<i32>,
    pub managers: Vec<i32>,
    pub sections: Vec<OrgUnitSectionDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOrgUnitDto {
    pub name: String,
    pub description: Option<String>,
    pub parent_ref_id: Option<i32>,
    #[serde(default)]
    pub tag_ids: Vec<i32>,
    pub ou_category_id: Option<i32>,
    pub default_dashboard_id: Option<i32>,
    #[serde(default)]
    pub managers: Vec<i32>,
    #[serde(default)]
    pub sections: Vec<OrgUnitSectionDto>,
}

/// Full replacement of an org unit's definition, stored as a new version.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateOrgUnitDto {
    pub ref_id: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub parent_ref_id: Option<i32>,
    #[serde(default)]
    pub tag_ids: Vec<i32>,
    pub ou_category_id: Option<i32>,
    pub default_dashboard_id: Option<i32>,
    #[serde(default)]
    pub managers: Vec<i32>,
    #[serde(default)]
    pub sections: Vec<OrgUnitSectionDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct OrgUnitFilterFieldsDto {
    pub name: Option<String>,
    pub ref_ids: Option<Vec<i32>>,
    pub parent_ref_ids: Option<Vec<i32>>,
    pub manager_ids: Option<Vec<i32>>,
    pub version: Option<i32>,
    /// Defaults to `true` when omitted.
    pub active: Option<bool>,
    /// Path prefix.
    pub path: Option<String>,
    pub ou_category_ids: Option<Vec<i32>>,
    pub default_dashboard_id: Option<i32>,
    pub dashboard_id: Option<i32>,
    pub workspace_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct OrgUnitListRequestDto {
    #[serde(default)]
    pub filter: OrgUnitFilterFieldsDto,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub page_size: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedOrgUnitsDto {
    pub org_units: Vec<OrgUnitDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrgUnitVersionDto {
    pub id: i32,
    pub version: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActivateVersionDto {
    pub ou_ref_id: i32,
    pub active_version: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValuesRequestDto {
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValueCountDto {
    pub key: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldValuesDto {
    pub field: String,
    pub values: Vec<ValueCountDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChildrenDto {
    pub ref_ids: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrgUnitDashboardDto {
    pub dashboard_id: i32,
    pub name: String,
    pub dashboard_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardMappingDto {
    pub dashboard_id: i32,
    #[serde(default)]
    pub dashboard_order: i32,
}
