//! Dashboard and widget domain models.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::model::dashboard::{
    CreateDashboardDto, CreateWidgetDto, DashboardDto, DashboardFilterDto,
    PaginatedDashboardsDto, UpdateDashboardDto, UpdateWidgetDto, WidgetDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    pub id: i32,
    pub dashboard_id: i32,
    pub name: String,
    pub widget_type: String,
    pub query: Value,
    pub metadata: Value,
    pub display_info: Value,
    pub precalculate: bool,
    pub precalculate_frequency_in_mins: i32,
    pub created_at: DateTime<Utc>,
}

impl Widget {
    pub fn from_entity(entity: entity::widget::Model) -> Self {
        Self {
            id: entity.id,
            dashboard_id: entity.dashboard_id,
            name: entity.name,
            widget_type: entity.widget_type,
            query: entity.query,
            metadata: entity.metadata,
            display_info: entity.display_info,
            precalculate: entity.precalculate,
            precalculate_frequency_in_mins: entity.precalculate_frequency_in_mins,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> WidgetDto {
        WidgetDto {
            id: self.id,
            dashboard_id: self.dashboard_id,
            name: self.name,
            widget_type: self.widget_type,
            query: self.query,
            metadata: self.metadata,
            display_info: self.display_info,
            precalculate: self.precalculate,
            precalculate_frequency_in_mins: self.precalculate_frequency_in_mins,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub id: i32,
    pub tenant_id: i32,
    pub name: String,
    pub dashboard_type: String,
    pub owner_id: Option<i32>,
    pub query: Value,
    pub metadata: Value,
    pub public: bool,
    pub demo: bool,
    /// Empty in list results.
    pub widgets: Vec<Widget>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Dashboard {
    pub fn from_entity(entity: entity::dashboard::Model, widgets: Vec<Widget>) -> Self {
        Self {
            id: entity.id,
            tenant_id: entity.tenant_id,
            name: entity.name,
            dashboard_type: entity.dashboard_type,
            owner_id: entity.owner_id,
            query: entity.query,
            metadata: entity.metadata,
            public: entity.public,
            demo: entity.demo,
            widgets,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> DashboardDto {
        DashboardDto {
            id: self.id,
            name: self.name,
            dashboard_type: self.dashboard_type,
            owner_id: self.owner_id,
            query: self.query,
            metadata: self.metadata,
            public: self.public,
            demo: self.demo,
            widgets: self.widgets.into_iter().map(Widget::into_dto).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDashboardParams {
    pub tenant_id: i32,
    pub owner_id: i32,
    pub name: String,
    pub dashboard_type: String,
    pub query: Value,
    pub metadata: Value,
    pub public: bool,
    pub demo: bool,
}

impl CreateDashboardParams {
    pub fn from_dto(tenant_id: i32, owner_id: i32, dto: CreateDashboardDto) -> Self {
        Self {
            tenant_id,
            owner_id,
            name: dto.name.trim().to_string(),
            dashboard_type: dto.dashboard_type.trim().to_string(),
            query: dto.query.unwrap_or_else(|| json!({})),
            metadata: dto.metadata.unwrap_or_else(|| json!({})),
            public: dto.public.unwrap_or(false),
            demo: dto.demo.unwrap_or(false),
        }
    }
}

/// Partial update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateDashboardParams {
    pub name: Option<String>,
    pub dashboard_type: Option<String>,
    pub query: Option<Value>,
    pub metadata: Option<Value>,
    pub public: Option<bool>,
}

impl UpdateDashboardParams {
    pub fn from_dto(dto: UpdateDashboardDto) -> Self {
        Self {
            name: dto.name.map(|n| n.trim().to_string()),
            dashboard_type: dto.dashboard_type.map(|t| t.trim().to_string()),
            query: dto.query,
            metadata: dto.metadata,
            public: dto.public,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DashboardFilter {
    pub name: Option<String>,
    pub dashboard_type: Option<String>,
    pub public: Option<bool>,
    pub owner_id: Option<i32>,
    pub page: u64,
    pub per_page: u64,
}

impl DashboardFilter {
    pub fn from_dto(dto: DashboardFilterDto) -> Self {
        Self {
            name: dto.name,
            dashboard_type: dto.dashboard_type,
            public: dto.public,
            owner_id: dto.owner_id,
            page: dto.page,
            per_page: dto.page_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedDashboards {
    pub dashboards: Vec<Dashboard>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedDashboards {
    pub fn into_dto(self) -> PaginatedDashboardsDto {
        PaginatedDashboardsDto {
            dashboards: self
                .dashboards
                .into_iter()
                .map(Dashboard::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateWidgetParams {
    pub name: String,
    pub widget_type: String,
    pub query: Value,
    pub metadata: Value,
    pub display_info: Value,
    pub precalculate: bool,
    pub precalculate_frequency_in_mins: i32,
}

impl CreateWidgetParams {
    pub fn from_dto(dto: CreateWidgetDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            widget_type: dto.widget_type.trim().to_string(),
            query: dto.query.unwrap_or_else(|| json!({})),
            metadata: dto.metadata.unwrap_or_else(|| json!({})),
            display_info: dto.display_info.unwrap_or_else(|| json!({})),
            precalculate: dto.precalculate.unwrap_or(false),
            precalculate_frequency_in_mins: dto.precalculate_frequency_in_mins.unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateWidgetParams {
    pub name: Option<String>,
    pub widget_type: Option<String>,
    pub query: Option<Value>,
    pub metadata: Option<Value>,
    pub display_info: Option<Value>,
    pub precalculate: Option<bool>,
    pub precalculate_frequency_in_mins: Option<i32>,
}

impl UpdateWidgetParams {
    pub fn from_dto(dto: UpdateWidgetDto) -> Self {
        Self {
            name: dto.name.map(|n| n.trim().to_string()),
            widget_type: dto.widget_type.map(|t| t.trim().to_string()),
            query: dto.query,
            metadata: dto.metadata,
            display_info: dto.display_info,
            precalculate: dto.precalculate,
            precalculate_frequency_in_mins: dto.precalculate_frequency_in_mins,
        }
    }
}
