//! Dashboard and widget data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::dashboard::{
        CreateDashboardParams, CreateWidgetParams, Dashboard, DashboardFilter,
        UpdateDashboardParams, UpdateWidgetParams, Widget,
    },
    util::parse::search_term,
};

pub struct DashboardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DashboardRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateDashboardParams) -> Result<Dashboard, DbErr> {
        let now = Utc::now();
        let entity = entity::dashboard::ActiveModel {
            tenant_id: ActiveValue::Set(params.tenant_id),
            name: ActiveValue::Set(params.name),
            dashboard_type: ActiveValue::Set(params.dashboard_type),
            owner_id: ActiveValue::Set(Some(params.owner_id)),
            query: ActiveValue::Set(params.query),
            metadata: ActiveValue::Set(params.metadata),
            public: ActiveValue::Set(params.public),
            demo: ActiveValue::Set(params.demo),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Dashboard::from_entity(entity, Vec::new()))
    }

    /// Gets a dashboard with its widgets ordered by id.
    pub async fn get_by_id(&self, tenant_id: i32, id: i32) -> Result<Option<Dashboard>, DbErr> {
        let Some(entity) = self.find_entity(tenant_id, id).await? else {
            return Ok(None);
        };

        let widgets = self.get_widgets(entity.id).await?;
        Ok(Some(Dashboard::from_entity(entity, widgets)))
    }

    async fn find_entity(
        &self,
        tenant_id: i32,
        id: i32,
    ) -> Result<Option<entity::dashboard::Model>, DbErr> {
        entity::prelude::Dashboard::find_by_id(id)
            .filter(entity::dashboard::Column::TenantId.eq(tenant_id))
            .one(self.db)
            .await
    }

    /// Dashboards of the tenant with the given ids, without widgets.
    pub async fn find_by_ids(&self, tenant_id: i32, ids: &[i32]) -> Result<Vec<Dashboard>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Dashboard::find()
            .filter(entity::dashboard::Column::TenantId.eq(tenant_id))
            .filter(entity::dashboard::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::dashboard::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|e| Dashboard::from_entity(e, Vec::new()))
            .collect())
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Dashboard))` - The updated dashboard with widgets
    /// - `Ok(None)` - No dashboard with that id in the tenant
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        tenant_id: i32,
        id: i32,
        params: UpdateDashboardParams,
    ) -> Result<Option<Dashboard>, DbErr> {
        let Some(existing) = self.find_entity(tenant_id, id).await? else {
            return Ok(None);
        };

        let mut active: entity::dashboard::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(dashboard_type) = params.dashboard_type {
            active.dashboard_type = ActiveValue::Set(dashboard_type);
        }
        if let Some(query) = params.query {
            active.query = ActiveValue::Set(query);
        }
        if let Some(metadata) = params.metadata {
            active.metadata = ActiveValue::Set(metadata);
        }
        if let Some(public) = params.public {
            active.public = ActiveValue::Set(public);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        let widgets = self.get_widgets(entity.id).await?;
        Ok(Some(Dashboard::from_entity(entity, widgets)))
    }

    /// Deletes dashboards of the tenant. Widgets and org unit mappings go with them.
    pub async fn delete(&self, tenant_id: i32, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Dashboard::delete_many()
            .filter(entity::dashboard::Column::TenantId.eq(tenant_id))
            .filter(entity::dashboard::Column::Id.is_in(ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets dashboards matching the filter ordered by name then id, without widgets.
    ///
    /// `public_only` restricts the result to public dashboards regardless of the filter.
    pub async fn get_paginated(
        &self,
        tenant_id: i32,
        filter: &DashboardFilter,
        public_only: bool,
    ) -> Result<(Vec<Dashboard>, u64), DbErr> {
        let mut query = entity::prelude::Dashboard::find()
            .filter(entity::dashboard::Column::TenantId.eq(tenant_id));

        if let Some(name) = search_term(filter.name.as_deref()) {
            query = query.filter(entity::dashboard::Column::Name.contains(name));
        }
        if let Some(dashboard_type) = search_term(filter.dashboard_type.as_deref()) {
            query = query.filter(entity::dashboard::Column::DashboardType.eq(dashboard_type));
        }
        if public_only {
            query = query.filter(entity::dashboard::Column::Public.eq(true));
        } else if let Some(public) = filter.public {
            query = query.filter(entity::dashboard::Column::Public.eq(public));
        }
        if let Some(owner_id) = filter.owner_id {
            query = query.filter(entity::dashboard::Column::OwnerId.eq(owner_id));
        }

        let paginator = query
            .order_by_asc(entity::dashboard::Column::Name)
            .order_by_asc(entity::dashboard::Column::Id)
            .paginate(self.db, filter.per_page);

        let total = paginator.num_items().await?;
        let dashboards = paginator
            .fetch_page(filter.page)
            .await?
            .into_iter()
            .map(|e| Dashboard::from_entity(e, Vec::new()))
            .collect();

        Ok((dashboards, total))
    }

    pub async fn get_widgets(&self, dashboard_id: i32) -> Result<Vec<Widget>, DbErr> {
        let entities = entity::prelude::Widget::find()
            .filter(entity::widget::Column::DashboardId.eq(dashboard_id))
            .order_by_asc(entity::widget::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Widget::from_entity).collect())
    }

    pub async fn get_widget(
        &self,
        dashboard_id: i32,
        widget_id: i32,
    ) -> Result<Option<Widget>, DbErr> {
        let entity = self.find_widget_entity(dashboard_id, widget_id).await?;
        Ok(entity.map(Widget::from_entity))
    }

    async fn find_widget_entity(
        &self,
        dashboard_id: i32,
        widget_id: i32,
    ) -> Result<Option<entity::widget::Model>, DbErr> {
        entity::prelude::Widget::find_by_id(widget_id)
            .filter(entity::widget::Column::DashboardId.eq(dashboard_id))
            .one(self.db)
            .await
    }

    pub async fn create_widget(
        &self,
        dashboard_id: i32,
        params: CreateWidgetParams,
    ) -> Result<Widget, DbErr> {
        let entity = entity::widget::ActiveModel {
            dashboard_id: ActiveValue::Set(dashboard_id),
            name: ActiveValue::Set(params.name),
            widget_type: ActiveValue::Set(params.widget_type),
            query: ActiveValue::Set(params.query),
            metadata: ActiveValue::Set(params.metadata),
            display_info: ActiveValue::Set(params.display_info),
            precalculate: ActiveValue::Set(params.precalculate),
            precalculate_frequency_in_mins: ActiveValue::Set(
                params.precalculate_frequency_in_mins,
            ),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Widget::from_entity(entity))
    }

    pub async fn update_widget(
        &self,
        dashboard_id: i32,
        widget_id: i32,
        params: UpdateWidgetParams,
    ) -> Result<Option<Widget>, DbErr> {
        let Some(existing) = self.find_widget_entity(dashboard_id, widget_id).await? else {
            return Ok(None);
        };

        let mut active: entity::widget::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(widget_type) = params.widget_type {
            active.widget_type = ActiveValue::Set(widget_type);
        }
        if let Some(query) = params.query {
            active.query = ActiveValue::Set(query);
        }
        if let Some(metadata) = params.metadata {
            active.metadata = ActiveValue::Set(metadata);
        }
        if let Some(display_info) = params.display_info {
            active.display_info = ActiveValue::Set(display_info);
        }
        if let Some(precalculate) = params.precalculate {
            active.precalculate = ActiveValue::Set(precalculate);
        }
        if let Some(frequency) = params.precalculate_frequency_in_mins {
            active.precalculate_frequency_in_mins = ActiveValue::Set(frequency);
        }

        Ok(Some(Widget::from_entity(active.update(self.db).await?)))
    }

    pub async fn delete_widget(&self, dashboard_id: i32, widget_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Widget::delete_many()
            .filter(entity::widget::Column::DashboardId.eq(dashboard_id))
            .filter(entity::widget::Column::Id.eq(widget_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
