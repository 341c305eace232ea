//! Workspace management.
//!
//! Names and keys are unique within a tenant. Linked integrations must be
//! registered in the same tenant, and deleting a workspace removes its org unit
//! categories.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        category::OuCategoryRepository, user::UserRepository, workspace::WorkspaceRepository,
    },
    error::AppError,
    model::{
        total_pages,
        workspace::{
            CreateWorkspaceParams, PaginatedWorkspaces, UpdateWorkspaceParams, Workspace,
            WorkspaceFilter,
        },
    },
    service::integration::ensure_integrations_exist,
};

pub struct WorkspaceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkspaceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a workspace linked to the given integrations.
    ///
    /// # Returns
    /// - `Ok(Workspace)` - The created workspace
    /// - `Err(AppError::BadRequest)` - Blank name or key, name or key already used
    ///   in the tenant, unknown owner or unknown integration ids
    pub async fn create(&self, params: CreateWorkspaceParams) -> Result<Workspace, AppError> {
        if params.name.is_empty() || params.key.is_empty() {
            return Err(AppError::BadRequest(
                "Workspace name and key must not be empty".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        ensure_unique(&txn, params.tenant_id, None, Some(&params.name), Some(&params.key))
            .await?;
        if let Some(owner_id) = params.owner_id {
            ensure_owner_exists(&txn, params.tenant_id, owner_id).await?;
        }
        ensure_integrations_exist(&txn, params.tenant_id, &params.integration_ids).await?;

        let workspace = WorkspaceRepository::new(&txn).create(&params).await?;

        txn.commit().await?;

        tracing::info!(
            tenant_id = workspace.tenant_id,
            workspace_id = workspace.id,
            "Created workspace {} ({})",
            workspace.name,
            workspace.key
        );

        Ok(workspace)
    }

    pub async fn get(&self, tenant_id: i32, id: i32) -> Result<Workspace, AppError> {
        WorkspaceRepository::new(self.db)
            .get_by_id(tenant_id, id)
            .await?
            .ok_or_else(not_found)
    }

    /// Applies a partial update. Present `integration_ids` replace the links.
    ///
    /// # Returns
    /// - `Ok(Workspace)` - The updated workspace
    /// - `Err(AppError::BadRequest)` - Blank or already used name or key, unknown
    ///   owner or unknown integration ids
    /// - `Err(AppError::NotFound)` - No workspace with that id in the tenant
    pub async fn update(
        &self,
        tenant_id: i32,
        id: i32,
        params: UpdateWorkspaceParams,
    ) -> Result<Workspace, AppError> {
        let blank = |value: &Option<String>| value.as_ref().is_some_and(|v| v.is_empty());
        if blank(&params.name) || blank(&params.key) {
            return Err(AppError::BadRequest(
                "Workspace name and key must not be empty".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let repo = WorkspaceRepository::new(&txn);
        if !repo.exists(tenant_id, id).await? {
            return Err(not_found());
        }
        ensure_unique(
            &txn,
            tenant_id,
            Some(id),
            params.name.as_deref(),
            params.key.as_deref(),
        )
        .await?;
        if let Some(owner_id) = params.owner_id {
            ensure_owner_exists(&txn, tenant_id, owner_id).await?;
        }
        if let Some(integration_ids) = &params.integration_ids {
            ensure_integrations_exist(&txn, tenant_id, integration_ids).await?;
        }

        let workspace = repo
            .update(tenant_id, id, params)
            .await?
            .ok_or_else(not_found)?;

        txn.commit().await?;

        Ok(workspace)
    }

    /// Deletes a workspace and its org unit categories in one transaction.
    ///
    /// Org units of those categories are kept without a category.
    pub async fn delete(&self, tenant_id: i32, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let repo = WorkspaceRepository::new(&txn);
        if !repo.exists(tenant_id, id).await? {
            return Err(not_found());
        }

        let category_repo = OuCategoryRepository::new(&txn);
        let category_ids = category_repo.ids_in_workspace(tenant_id, id).await?;
        let categories = category_repo.delete(tenant_id, &category_ids).await?;
        repo.delete(tenant_id, id).await?;

        txn.commit().await?;

        tracing::info!(tenant_id, workspace_id = id, categories, "Deleted workspace");

        Ok(())
    }

    pub async fn list(
        &self,
        tenant_id: i32,
        filter: &WorkspaceFilter,
    ) -> Result<PaginatedWorkspaces, AppError> {
        let (workspaces, total) = WorkspaceRepository::new(self.db)
            .get_paginated(tenant_id, filter)
            .await?;

        Ok(PaginatedWorkspaces {
            workspaces,
            total,
            page: filter.page,
            per_page: filter.per_page,
            total_pages: total_pages(total, filter.per_page),
        })
    }
}

/// Rejects a workspace id that is not a workspace of the tenant.
///
/// # Returns
/// - `Ok(())` - The workspace exists
/// - `Err(AppError::BadRequest)` - Unknown workspace
pub(crate) async fn ensure_workspace_exists<C: ConnectionTrait>(
    db: &C,
    tenant_id: i32,
    workspace_id: i32,
) -> Result<(), AppError> {
    if WorkspaceRepository::new(db)
        .exists(tenant_id, workspace_id)
        .await?
    {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Workspace {} not found",
            workspace_id
        )))
    }
}

/// Rejects a name or key already used by another workspace of the tenant.
async fn ensure_unique<C: ConnectionTrait>(
    db: &C,
    tenant_id: i32,
    own_id: Option<i32>,
    name: Option<&str>,
    key: Option<&str>,
) -> Result<(), AppError> {
    let repo = WorkspaceRepository::new(db);
    let taken_by_other = |found: Option<i32>| found.is_some_and(|id| Some(id) != own_id);

    if let Some(name) = name {
        if taken_by_other(repo.find_id_by_name(tenant_id, name).await?) {
            return Err(AppError::BadRequest(
                "Workspace with this name already exists".to_string(),
            ));
        }
    }
    if let Some(key) = key {
        if taken_by_other(repo.find_id_by_key(tenant_id, key).await?) {
            return Err(AppError::BadRequest(
                "Workspace with this key already exists".to_string(),
            ));
        }
    }

    Ok(())
}

async fn ensure_owner_exists<C: ConnectionTrait>(
    db: &C,
    tenant_id: i32,
    owner_id: i32,
) -> Result<(), AppError> {
    let owner = UserRepository::new(db).find_by_id(owner_id).await?;
    if owner.is_some_and(|user| user.tenant_id == tenant_id) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!("User {} not found", owner_id)))
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Workspace not found".to_string())
}
