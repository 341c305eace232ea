//! Integration data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::integration::{
        CreateIntegrationParams, Integration, IntegrationFilter, UpdateIntegrationParams,
    },
    util::parse::search_term,
};

pub struct IntegrationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> IntegrationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an integration.
    ///
    /// # Returns
    /// - `Ok(Integration)` - The created integration
    /// - `Err(DbErr)` - Database error, including a duplicate name in the tenant
    pub async fn create(&self, params: CreateIntegrationParams) -> Result<Integration, DbErr> {
        let now = Utc::now();
        let entity = entity::integration::ActiveModel {
            tenant_id: ActiveValue::Set(params.tenant_id),
            name: ActiveValue::Set(params.name),
            application: ActiveValue::Set(params.application),
            description: ActiveValue::Set(params.description),
            url: ActiveValue::Set(params.url),
            status: ActiveValue::Set(params.status),
            metadata: ActiveValue::Set(params.metadata),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Integration::from_entity(entity))
    }

    pub async fn get_by_id(&self, tenant_id: i32, id: i32) -> Result<Option<Integration>, DbErr> {
        let entity = entity::prelude::Integration::find_by_id(id)
            .filter(entity::integration::Column::TenantId.eq(tenant_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Integration::from_entity))
    }

    pub async fn find_by_name(
        &self,
        tenant_id: i32,
        name: &str,
    ) -> Result<Option<Integration>, DbErr> {
        let entity = entity::prelude::Integration::find()
            .filter(entity::integration::Column::TenantId.eq(tenant_id))
            .filter(entity::integration::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Integration::from_entity))
    }

    /// Ids among `ids` that exist in the tenant.
    pub async fn existing_ids(&self, tenant_id: i32, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::Integration::find()
            .filter(entity::integration::Column::TenantId.eq(tenant_id))
            .filter(entity::integration::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.id).collect())
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Integration))` - The updated integration
    /// - `Ok(None)` - No integration with that id in the tenant
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        tenant_id: i32,
        id: i32,
        params: UpdateIntegrationParams,
    ) -> Result<Option<Integration>, DbErr> {
        let Some(existing) = entity::prelude::Integration::find_by_id(id)
            .filter(entity::integration::Column::TenantId.eq(tenant_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::integration::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(url) = params.url {
            active.url = ActiveValue::Set(Some(url));
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status);
        }
        if let Some(metadata) = params.metadata {
            active.metadata = ActiveValue::Set(metadata);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Integration::from_entity(active.update(self.db).await?)))
    }

    /// Deletes an integration of the tenant. Workspace links go with it.
    pub async fn delete(&self, tenant_id: i32, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Integration::delete_many()
            .filter(entity::integration::Column::TenantId.eq(tenant_id))
            .filter(entity::integration::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets integrations matching the filter ordered by name.
    pub async fn get_paginated(
        &self,
        tenant_id: i32,
        filter: &IntegrationFilter,
    ) -> Result<(Vec<Integration>, u64), DbErr> {
        let mut query = entity::prelude::Integration::find()
            .filter(entity::integration::Column::TenantId.eq(tenant_id));

        if let Some(application) = search_term(filter.application.as_deref()) {
            query = query.filter(entity::integration::Column::Application.eq(application));
        }
        if let Some(name) = search_term(filter.name.as_deref()) {
            query = query.filter(entity::integration::Column::Name.contains(name));
        }

        let paginator = query
            .order_by_asc(entity::integration::Column::Name)
            .order_by_asc(entity::integration::Column::Id)
            .paginate(self.db, filter.per_page);

        let total = paginator.num_items().await?;
        let integrations = paginator
            .fetch_page(filter.page)
            .await?
            .into_iter()
            .map(Integration::from_entity)
            .collect();

        Ok((integrations, total))
    }
}
