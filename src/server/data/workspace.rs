//! Workspace data repository.
//!
//! Reads return [`Workspace`] with its linked integration ids loaded.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::workspace::{
        CreateWorkspaceParams, UpdateWorkspaceParams, Workspace, WorkspaceFilter,
    },
    util::parse::search_term,
};

pub struct WorkspaceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WorkspaceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a workspace and links its integrations.
    ///
    /// # Returns
    /// - `Ok(Workspace)` - The created workspace
    /// - `Err(DbErr)` - Database error, including a duplicate name or key in the tenant
    pub async fn create(&self, params: &CreateWorkspaceParams) -> Result<Workspace, DbErr> {
        let now = Utc::now();
        let entity = entity::workspace::ActiveModel {
            tenant_id: ActiveValue::Set(params.tenant_id),
            name: ActiveValue::Set(params.name.clone()),
            key: ActiveValue::Set(params.key.clone()),
            description: ActiveValue::Set(params.description.clone()),
            owner_id: ActiveValue::Set(params.owner_id),
            disabled: ActiveValue::Set(false),
            demo: ActiveValue::Set(params.demo),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.replace_integrations(entity.id, &params.integration_ids)
            .await?;

        Ok(Workspace::from_entity(
            entity,
            params.integration_ids.clone(),
        ))
    }

    pub async fn get_by_id(&self, tenant_id: i32, id: i32) -> Result<Option<Workspace>, DbErr> {
        let Some(entity) = self.find_entity(tenant_id, id).await? else {
            return Ok(None);
        };

        let mut links = self.integration_ids_by_workspace(&[entity.id]).await?;
        let integration_ids = links.remove(&entity.id).unwrap_or_default();

        Ok(Some(Workspace::from_entity(entity, integration_ids)))
    }

    /// Whether the workspace exists in the tenant.
    pub async fn exists(&self, tenant_id: i32, id: i32) -> Result<bool, DbErr> {
        Ok(self.find_entity(tenant_id, id).await?.is_some())
    }

    /// Id of the workspace with this name, if any.
    pub async fn find_id_by_name(&self, tenant_id: i32, name: &str) -> Result<Option<i32>, DbErr> {
        let entity = entity::prelude::Workspace::find()
            .filter(entity::workspace::Column::TenantId.eq(tenant_id))
            .filter(entity::workspace::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(|w| w.id))
    }

    /// Id of the workspace with this key, if any.
    pub async fn find_id_by_key(&self, tenant_id: i32, key: &str) -> Result<Option<i32>, DbErr> {
        let entity = entity::prelude::Workspace::find()
            .filter(entity::workspace::Column::TenantId.eq(tenant_id))
            .filter(entity::workspace::Column::Key.eq(key))
            .one(self.db)
            .await?;

        Ok(entity.map(|w| w.id))
    }

    /// Applies a partial update. Present `integration_ids` replace the links.
    ///
    /// # Returns
    /// - `Ok(Some(Workspace))` - The updated workspace
    /// - `Ok(None)` - No workspace with that id in the tenant
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        tenant_id: i32,
        id: i32,
        params: UpdateWorkspaceParams,
    ) -> Result<Option<Workspace>, DbErr> {
        let Some(existing) = self.find_entity(tenant_id, id).await? else {
            return Ok(None);
        };

        let mut active: entity::workspace::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(key) = params.key {
            active.key = ActiveValue::Set(key);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(owner_id) = params.owner_id {
            active.owner_id = ActiveValue::Set(Some(owner_id));
        }
        if let Some(disabled) = params.disabled {
            active.disabled = ActiveValue::Set(disabled);
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        if let Some(integration_ids) = &params.integration_ids {
            self.replace_integrations(id, integration_ids).await?;
        }

        self.get_by_id(tenant_id, id).await
    }

    /// Deletes a workspace of the tenant. Integration links go with it.
    pub async fn delete(&self, tenant_id: i32, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Workspace::delete_many()
            .filter(entity::workspace::Column::TenantId.eq(tenant_id))
            .filter(entity::workspace::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets workspaces matching the filter ordered by name.
    pub async fn get_paginated(
        &self,
        tenant_id: i32,
        filter: &WorkspaceFilter,
    ) -> Result<(Vec<Workspace>, u64), DbErr> {
        let mut query = entity::prelude::Workspace::find()
            .filter(entity::workspace::Column::TenantId.eq(tenant_id));

        if let Some(name) = search_term(filter.name.as_deref()) {
            query = query.filter(entity::workspace::Column::Name.contains(name));
        }
        if let Some(disabled) = filter.disabled {
            query = query.filter(entity::workspace::Column::Disabled.eq(disabled));
        }

        let paginator = query
            .order_by_asc(entity::workspace::Column::Name)
            .order_by_asc(entity::workspace::Column::Id)
            .paginate(self.db, filter.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(filter.page).await?;

        let ids: Vec<i32> = entities.iter().map(|w| w.id).collect();
        let mut links = self.integration_ids_by_workspace(&ids).await?;
        let workspaces = entities
            .into_iter()
            .map(|entity| {
                let integration_ids = links.remove(&entity.id).unwrap_or_default();
                Workspace::from_entity(entity, integration_ids)
            })
            .collect();

        Ok((workspaces, total))
    }

    /// Linked integration ids keyed by workspace id.
    pub async fn integration_ids_by_workspace(
        &self,
        workspace_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        if workspace_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::WorkspaceIntegration::find()
            .filter(
                entity::workspace_integration::Column::WorkspaceId.is_in(workspace_ids.to_vec()),
            )
            .all(self.db)
            .await?;

        let mut by_workspace: HashMap<i32, Vec<i32>> = HashMap::new();
        for row in rows {
            by_workspace
                .entry(row.workspace_id)
                .or_default()
                .push(row.integration_id);
        }

        Ok(by_workspace)
    }

    /// Replaces the integration links of a workspace.
    pub async fn replace_integrations(
        &self,
        workspace_id: i32,
        integration_ids: &[i32],
    ) -> Result<(), DbErr> {
        entity::prelude::WorkspaceIntegration::delete_many()
            .filter(entity::workspace_integration::Column::WorkspaceId.eq(workspace_id))
            .exec(self.db)
            .await?;

        for integration_id in integration_ids {
            entity::workspace_integration::ActiveModel {
                workspace_id: ActiveValue::Set(workspace_id),
                integration_id: ActiveValue::Set(*integration_id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    async fn find_entity(
        &self,
        tenant_id: i32,
        id: i32,
    ) -> Result<Option<entity::workspace::Model>, DbErr> {
        entity::prelude::Workspace::find_by_id(id)
            .filter(entity::workspace::Column::TenantId.eq(tenant_id))
            .one(self.db)
            .await
    }
}
