//! Org unit category data repository.
//!
//! Category reads return entity models; the service attaches the unit summary
//! before converting to [`OuCategory`](crate::server::model::category::OuCategory).

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::category::{CreateOuCategoryParams, OuCategoryFilter, UpdateOuCategoryParams},
    util::parse::search_term,
};

pub struct OuCategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OuCategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new category.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created category
    /// - `Err(DbErr)` - Database error, including a duplicate name in the workspace
    pub async fn create(
        &self,
        params: &CreateOuCategoryParams,
    ) -> Result<entity::ou_category::Model, DbErr> {
        let now = Utc::now();
        entity::ou_category::ActiveModel {
            tenant_id: ActiveValue::Set(params.tenant_id),
            name: ActiveValue::Set(params.name.clone()),
            description: ActiveValue::Set(params.description.clone()),
            is_predefined: ActiveValue::Set(params.is_predefined),
            enabled: ActiveValue::Set(params.enabled),
            workspace_id: ActiveValue::Set(params.workspace_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a category by its unique key of tenant, workspace and name.
    pub async fn find_by_name(
        &self,
        tenant_id: i32,
        workspace_id: i32,
        name: &str,
    ) -> Result<Option<entity::ou_category::Model>, DbErr> {
        entity::prelude::OuCategory::find()
            .filter(entity::ou_category::Column::TenantId.eq(tenant_id))
            .filter(entity::ou_category::Column::WorkspaceId.eq(workspace_id))
            .filter(entity::ou_category::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        tenant_id: i32,
        id: i32,
    ) -> Result<Option<entity::ou_category::Model>, DbErr> {
        entity::prelude::OuCategory::find_by_id(id)
            .filter(entity::ou_category::Column::TenantId.eq(tenant_id))
            .one(self.db)
            .await
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated category
    /// - `Ok(None)` - No category with that id in the tenant
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        tenant_id: i32,
        id: i32,
        params: UpdateOuCategoryParams,
    ) -> Result<Option<entity::ou_category::Model>, DbErr> {
        let Some(existing) = self.get_by_id(tenant_id, id).await? else {
            return Ok(None);
        };

        let mut active: entity::ou_category::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(enabled) = params.enabled {
            active.enabled = ActiveValue::Set(enabled);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes the given categories of the tenant. Org units referencing them keep
    /// existing with their category cleared.
    pub async fn delete(&self, tenant_id: i32, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::OuCategory::delete_many()
            .filter(entity::ou_category::Column::TenantId.eq(tenant_id))
            .filter(entity::ou_category::Column::Id.is_in(ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets categories matching the filter, oldest first.
    pub async fn get_paginated(
        &self,
        tenant_id: i32,
        filter: &OuCategoryFilter,
    ) -> Result<(Vec<entity::ou_category::Model>, u64), DbErr> {
        let mut query = entity::prelude::OuCategory::find()
            .filter(entity::ou_category::Column::TenantId.eq(tenant_id));

        if let Some(workspace_id) = filter.workspace_id {
            query = query.filter(entity::ou_category::Column::WorkspaceId.eq(workspace_id));
        }
        if let Some(name) = search_term(filter.name.as_deref()) {
            query = query.filter(entity::ou_category::Column::Name.contains(name));
        }
        if let Some(enabled) = filter.enabled {
            query = query.filter(entity::ou_category::Column::Enabled.eq(enabled));
        }
        if let Some(is_predefined) = filter.is_predefined {
            query = query.filter(entity::ou_category::Column::IsPredefined.eq(is_predefined));
        }

        let paginator = query
            .order_by_asc(entity::ou_category::Column::CreatedAt)
            .order_by_asc(entity::ou_category::Column::Id)
            .paginate(self.db, filter.per_page);

        let total = paginator.num_items().await?;
        let categories = paginator.fetch_page(filter.page).await?;

        Ok((categories, total))
    }

    /// Gets categories of a workspace by id, oldest first.
    pub async fn find_by_ids(
        &self,
        tenant_id: i32,
        workspace_id: i32,
        ids: &[i32],
    ) -> Result<Vec<entity::ou_category::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::OuCategory::find()
            .filter(entity::ou_category::Column::TenantId.eq(tenant_id))
            .filter(entity::ou_category::Column::WorkspaceId.eq(workspace_id))
            .filter(entity::ou_category::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::ou_category::Column::CreatedAt)
            .order_by_asc(entity::ou_category::Column::Id)
            .all(self.db)
            .await
    }

    /// Ids of all categories in a workspace.
    pub async fn ids_in_workspace(
        &self,
        tenant_id: i32,
        workspace_id: i32,
    ) -> Result<Vec<i32>, DbErr> {
        let categories = entity::prelude::OuCategory::find()
            .filter(entity::ou_category::Column::TenantId.eq(tenant_id))
            .filter(entity::ou_category::Column::WorkspaceId.eq(workspace_id))
            .all(self.db)
            .await?;

        Ok(categories.into_iter().map(|c| c.id).collect())
    }
}
