use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::model::api::default_entries;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WidgetDto {
    pub id: i32,
    pub dashboard_id: i32,
    pub name: String,
    pub widget_type: String,
    #[schema(value_type = Object)]
    pub query: Value,
    #[schema(value_type = Object)]
    pub metadata: Value,
    #[schema(value_type = Object)]
    pub display_info: Value,
    pub precalculate: bool,
    pub precalculate_frequency_in_mins: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardDto {
    pub id: i32,
    pub name: String,
    pub dashboard_type: String,
    pub owner_id: Option<i32>,
    #[schema(value_type = Object)]
    pub query: Value,
    #[schema(value_type = Object)]
    pub metadata: Value,
    pub public: bool,
    pub demo: bool,
    pub widgets: Vec<WidgetDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDashboardDto {
    pub name: String,
    pub dashboard_type: String,
    #[schema(value_type = Option<Object>)]
    pub query: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Value>,
    pub public: Option<bool>,
    pub demo: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateDashboardDto {
    pub name: Option<String>,
    pub dashboard_type: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub query: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Value>,
    pub public: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DashboardFilterDto {
    pub name: Option<String>,
    pub dashboard_type: Option<String>,
    pub public: Option<bool>,
    pub owner_id: Option<i32>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub page_size: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedDashboardsDto {
    /// Dashboards without their widgets.
    pub dashboards: Vec<DashboardDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateWidgetDto {
    pub name: String,
    pub widget_type: String,
    #[schema(value_type = Option<Object>)]
    pub query: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub display_info: Option<Value>,
    pub precalculate: Option<bool>,
    pub precalculate_frequency_in_mins: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateWidgetDto {
    pub name: Option<String>,
    pub widget_type: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub query: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub display_info: Option<Value>,
    pub precalculate: Option<bool>,
    pub precalculate_frequency_in_mins: Option<i32>,
}
