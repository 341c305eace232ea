//! Dashboard and widget management.
//!
//! Callers with the `PUBLIC_DASHBOARD` role only ever see public dashboards;
//! private ones are reported as missing.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::dashboard::DashboardRepository,
    error::AppError,
    model::{
        dashboard::{
            CreateDashboardParams, CreateWidgetParams, Dashboard, DashboardFilter,
            PaginatedDashboards, UpdateDashboardParams, UpdateWidgetParams, Widget,
        },
        total_pages,
        user::{Role, User},
    },
};

const MAX_NAME_LENGTH: usize = 100;

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a dashboard owned by the caller.
    ///
    /// # Returns
    /// - `Ok(Dashboard)` - The created dashboard without widgets
    /// - `Err(AppError::BadRequest)` - Name outside 1..=100 characters or blank type
    pub async fn create(&self, params: CreateDashboardParams) -> Result<Dashboard, AppError> {
        validate_name(&params.name)?;
        validate_type(&params.dashboard_type)?;

        let dashboard = DashboardRepository::new(self.db).create(params).await?;
        tracing::info!(
            tenant_id = dashboard.tenant_id,
            dashboard_id = dashboard.id,
            "Created dashboard {}",
            dashboard.name
        );

        Ok(dashboard)
    }

    /// Gets a dashboard with its widgets as seen by `viewer`.
    pub async fn get(&self, viewer: &User, id: i32) -> Result<Dashboard, AppError> {
        let dashboard = DashboardRepository::new(self.db)
            .get_by_id(viewer.tenant_id, id)
            .await?
            .ok_or_else(dashboard_not_found)?;

        if public_only(viewer) && !dashboard.public {
            return Err(dashboard_not_found());
        }

        Ok(dashboard)
    }

    pub async fn update(
        &self,
        tenant_id: i32,
        id: i32,
        params: UpdateDashboardParams,
    ) -> Result<Dashboard, AppError> {
        if let Some(name) = &params.name {
            validate_name(name)?;
        }
        if let Some(dashboard_type) = &params.dashboard_type {
            validate_type(dashboard_type)?;
        }

        DashboardRepository::new(self.db)
            .update(tenant_id, id, params)
            .await?
            .ok_or_else(dashboard_not_found)
    }

    /// Deletes one dashboard.
    ///
    /// Widgets and org unit mappings go with it; org units using it as their
    /// default dashboard keep existing without one.
    pub async fn delete(&self, tenant_id: i32, id: i32) -> Result<(), AppError> {
        let deleted = DashboardRepository::new(self.db)
            .delete(tenant_id, &[id])
            .await?;
        if deleted == 0 {
            return Err(dashboard_not_found());
        }

        Ok(())
    }

    pub async fn bulk_delete(&self, tenant_id: i32, ids: &[i32]) -> Result<u64, AppError> {
        Ok(DashboardRepository::new(self.db)
            .delete(tenant_id, ids)
            .await?)
    }

    /// Lists dashboards visible to `viewer`, ordered by name.
    pub async fn list(
        &self,
        viewer: &User,
        filter: &DashboardFilter,
    ) -> Result<PaginatedDashboards, AppError> {
        let (dashboards, total) = DashboardRepository::new(self.db)
            .get_paginated(viewer.tenant_id, filter, public_only(viewer))
            .await?;

        Ok(PaginatedDashboards {
            dashboards,
            total,
            page: filter.page,
            per_page: filter.per_page,
            total_pages: total_pages(total, filter.per_page),
        })
    }

    pub async fn get_widgets(&self, viewer: &User, dashboard_id: i32) -> Result<Vec<Widget>, AppError> {
        let dashboard = self.get(viewer, dashboard_id).await?;
        Ok(dashboard.widgets)
    }

    pub async fn get_widget(
        &self,
        viewer: &User,
        dashboard_id: i32,
        widget_id: i32,
    ) -> Result<Widget, AppError> {
        self.get(viewer, dashboard_id).await?;

        DashboardRepository::new(self.db)
            .get_widget(dashboard_id, widget_id)
            .await?
            .ok_or_else(widget_not_found)
    }

    /// Adds a widget to a dashboard of the tenant.
    ///
    /// # Returns
    /// - `Ok(Widget)` - The created widget
    /// - `Err(AppError::BadRequest)` - Blank widget name or type
    /// - `Err(AppError::NotFound)` - No such dashboard in the tenant
    pub async fn create_widget(
        &self,
        tenant_id: i32,
        dashboard_id: i32,
        params: CreateWidgetParams,
    ) -> Result<Widget, AppError> {
        if params.name.is_empty() || params.widget_type.is_empty() {
            return Err(AppError::BadRequest(
                "Widget name and widget_type must not be empty".to_string(),
            ));
        }
        self.ensure_dashboard(tenant_id, dashboard_id).await?;

        Ok(DashboardRepository::new(self.db)
            .create_widget(dashboard_id, params)
            .await?)
    }

    pub async fn update_widget(
        &self,
        tenant_id: i32,
        dashboard_id: i32,
        widget_id: i32,
        params: UpdateWidgetParams,
    ) -> Result<Widget, AppError> {
        let blank = |value: &Option<String>| value.as_ref().is_some_and(|v| v.is_empty());
        if blank(&params.name) || blank(&params.widget_type) {
            return Err(AppError::BadRequest(
                "Widget name and widget_type must not be empty".to_string(),
            ));
        }
        self.ensure_dashboard(tenant_id, dashboard_id).await?;

        DashboardRepository::new(self.db)
            .update_widget(dashboard_id, widget_id, params)
            .await?
            .ok_or_else(widget_not_found)
    }

    pub async fn delete_widget(
        &self,
        tenant_id: i32,
        dashboard_id: i32,
        widget_id: i32,
    ) -> Result<(), AppError> {
        self.ensure_dashboard(tenant_id, dashboard_id).await?;

        let deleted = DashboardRepository::new(self.db)
            .delete_widget(dashboard_id, widget_id)
            .await?;
        if deleted == 0 {
            return Err(widget_not_found());
        }

        Ok(())
    }

    async fn ensure_dashboard(&self, tenant_id: i32, dashboard_id: i32) -> Result<(), AppError> {
        let found = DashboardRepository::new(self.db)
            .find_by_ids(tenant_id, &[dashboard_id])
            .await?;
        if found.is_empty() {
            return Err(dashboard_not_found());
        }

        Ok(())
    }
}

fn public_only(viewer: &User) -> bool {
    viewer.role == Role::PublicDashboard
}

fn validate_name(name: &str) -> Result<(), AppError> {
    let length = name.chars().count();
    if length == 0 || length > MAX_NAME_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Dashboard name must be between 1 and {} characters",
            MAX_NAME_LENGTH
        )));
    }

    Ok(())
}

fn validate_type(dashboard_type: &str) -> Result<(), AppError> {
    if dashboard_type.is_empty() {
        return Err(AppError::BadRequest(
            "Dashboard type must not be empty".to_string(),
        ));
    }

    Ok(())
}

fn dashboard_not_found() -> AppError {
    AppError::NotFound("Dashboard not found".to_string())
}

fn widget_not_found() -> AppError {
    AppError::NotFound("Widget not found".to_string())
}
