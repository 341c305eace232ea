use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::default_entries;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WorkspaceDto {
    pub id: i32,
    pub name: String,
    /// Short unique identifier, stored uppercase.
    pub key: String,
    pub description: Option<String>,
    pub owner_id: Option<i32>,
    pub disabled: bool,
    pub demo: bool,
    pub integration_ids: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateWorkspaceDto {
    pub name: String,
    pub key: String,
    pub description: Option<String>,
    pub owner_id: Option<i32>,
    pub demo: Option<bool>,
    #[serde(default)]
    pub integration_ids: Vec<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateWorkspaceDto {
    pub name: Option<String>,
    pub key: Option<String>,
    pub description: Option<String>,
    pub owner_id: Option<i32>,
    pub disabled: Option<bool>,
    /// Replaces the linked integrations when present.
    pub integration_ids: Option<Vec<i32>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct WorkspaceFilterDto {
    pub name: Option<String>,
    pub disabled: Option<bool>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub page_size: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedWorkspacesDto {
    pub workspaces: Vec<WorkspaceDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
