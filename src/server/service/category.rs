//! Org unit category management.
//!
//! Categories are returned enriched with a summary of their active org units.

use std::collections::{HashMap, HashSet};

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        category::OuCategoryRepository, org_unit::OrgUnitRepository,
        workspace::WorkspaceRepository,
    },
    error::AppError,
    model::{
        category::{
            CreateOuCategoryParams, OuCategory, OuCategoryFilter, PaginatedOuCategories,
            UpdateOuCategoryParams,
        },
        org_unit::OrgUnitParams,
        total_pages,
    },
    service::{
        org_unit::{activate, insert_version},
        workspace::ensure_workspace_exists,
    },
};

pub struct OuCategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OuCategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a category unless one with the same name exists in the workspace.
    ///
    /// A newly inserted category with `root_ou_name` also gets an active root org
    /// unit, written in the same transaction.
    ///
    /// # Returns
    /// - `Ok((OuCategory, true))` - The category was inserted
    /// - `Ok((OuCategory, false))` - An existing category was returned unchanged
    /// - `Err(AppError::BadRequest)` - Blank name, unknown workspace or invalid root
    ///   unit name
    pub async fn create(
        &self,
        params: CreateOuCategoryParams,
    ) -> Result<(OuCategory, bool), AppError> {
        if params.name.is_empty() {
            return Err(AppError::BadRequest(
                "Category name must not be empty".to_string(),
            ));
        }
        ensure_workspace_exists(self.db, params.tenant_id, params.workspace_id).await?;

        let existing = OuCategoryRepository::new(self.db)
            .find_by_name(params.tenant_id, params.workspace_id, &params.name)
            .await?;
        if let Some(existing) = existing {
            return Ok((self.enrich_one(existing).await?, false));
        }

        let txn = self.db.begin().await?;

        let category = OuCategoryRepository::new(&txn).create(&params).await?;
        if let Some(root_name) = &params.root_ou_name {
            let root = OrgUnitParams::root(root_name.clone(), category.id);
            let unit = insert_version(&txn, params.tenant_id, None, &root).await?;
            activate(&txn, unit).await?;
        }

        txn.commit().await?;

        tracing::info!(
            tenant_id = params.tenant_id,
            category_id = category.id,
            "Created org unit category {}",
            category.name
        );

        Ok((self.enrich_one(category).await?, true))
    }

    pub async fn get(&self, tenant_id: i32, id: i32) -> Result<OuCategory, AppError> {
        let category = OuCategoryRepository::new(self.db)
            .get_by_id(tenant_id, id)
            .await?
            .ok_or_else(not_found)?;

        self.enrich_one(category).await
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(OuCategory)` - The updated category
    /// - `Err(AppError::BadRequest)` - The new name is blank or taken by another
    ///   category of the same workspace
    /// - `Err(AppError::NotFound)` - No category with that id in the tenant
    pub async fn update(
        &self,
        tenant_id: i32,
        id: i32,
        params: UpdateOuCategoryParams,
    ) -> Result<OuCategory, AppError> {
        if params.name.as_ref().is_some_and(|name| name.is_empty()) {
            return Err(AppError::BadRequest(
                "Category name must not be empty".to_string(),
            ));
        }

        let repo = OuCategoryRepository::new(self.db);
        if let Some(name) = &params.name {
            let current = repo.get_by_id(tenant_id, id).await?.ok_or_else(not_found)?;
            let clash = repo
                .find_by_name(tenant_id, current.workspace_id, name)
                .await?
                .is_some_and(|other| other.id != id);
            if clash {
                return Err(AppError::BadRequest(
                    "Category with this name already exists in the workspace".to_string(),
                ));
            }
        }

        let category = repo
            .update(tenant_id, id, params)
            .await?
            .ok_or_else(not_found)?;

        self.enrich_one(category).await
    }

    pub async fn delete(&self, tenant_id: i32, id: i32) -> Result<(), AppError> {
        let deleted = OuCategoryRepository::new(self.db)
            .delete(tenant_id, &[id])
            .await?;
        if deleted == 0 {
            return Err(not_found());
        }

        Ok(())
    }

    /// Deletes every listed category of the tenant, ignoring unknown ids.
    pub async fn bulk_delete(&self, tenant_id: i32, ids: &[i32]) -> Result<u64, AppError> {
        Ok(OuCategoryRepository::new(self.db)
            .delete(tenant_id, ids)
            .await?)
    }

    pub async fn list(
        &self,
        tenant_id: i32,
        filter: &OuCategoryFilter,
    ) -> Result<PaginatedOuCategories, AppError> {
        let (categories, total) = OuCategoryRepository::new(self.db)
            .get_paginated(tenant_id, filter)
            .await?;

        Ok(PaginatedOuCategories {
            categories: self.enrich(tenant_id, categories).await?,
            total,
            page: filter.page,
            per_page: filter.per_page,
            total_pages: total_pages(total, filter.per_page),
        })
    }

    /// Categories of a workspace with at least one active org unit mapped to the dashboard.
    ///
    /// # Returns
    /// - `Ok(Vec<OuCategory>)` - Matching categories, oldest first
    /// - `Err(AppError::NotFound)` - No workspace with that id in the tenant
    pub async fn list_by_dashboard(
        &self,
        tenant_id: i32,
        workspace_id: i32,
        dashboard_id: i32,
    ) -> Result<Vec<OuCategory>, AppError> {
        if !WorkspaceRepository::new(self.db)
            .exists(tenant_id, workspace_id)
            .await?
        {
            return Err(AppError::NotFound("Workspace not found".to_string()));
        }

        let category_repo = OuCategoryRepository::new(self.db);
        let unit_repo = OrgUnitRepository::new(self.db);

        let mapped: HashSet<i32> = unit_repo
            .unit_ids_with_dashboard(dashboard_id)
            .await?
            .into_iter()
            .collect();
        if mapped.is_empty() {
            return Ok(Vec::new());
        }

        let workspace_categories = category_repo
            .ids_in_workspace(tenant_id, workspace_id)
            .await?;
        let mut category_ids: Vec<i32> = unit_repo
            .find_active_in_categories(tenant_id, &workspace_categories)
            .await?
            .into_iter()
            .filter(|unit| mapped.contains(&unit.id))
            .filter_map(|unit| unit.ou_category_id)
            .collect();
        category_ids.sort_unstable();
        category_ids.dedup();

        let categories = category_repo
            .find_by_ids(tenant_id, workspace_id, &category_ids)
            .await?;

        self.enrich(tenant_id, categories).await
    }

    async fn enrich_one(
        &self,
        category: entity::ou_category::Model,
    ) -> Result<OuCategory, AppError> {
        let tenant_id = category.tenant_id;
        self.enrich(tenant_id, vec![category])
            .await?
            .pop()
            .ok_or_else(not_found)
    }

    /// Attaches the active org units of each category, loaded in one query.
    async fn enrich(
        &self,
        tenant_id: i32,
        categories: Vec<entity::ou_category::Model>,
    ) -> Result<Vec<OuCategory>, AppError> {
        let ids: Vec<i32> = categories.iter().map(|c| c.id).collect();
        let units = OrgUnitRepository::new(self.db)
            .find_active_in_categories(tenant_id, &ids)
            .await?;

        let mut by_category: HashMap<i32, Vec<entity::org_unit::Model>> = HashMap::new();
        for unit in units {
            if let Some(category_id) = unit.ou_category_id {
                by_category.entry(category_id).or_default().push(unit);
            }
        }

        Ok(categories
            .into_iter()
            .map(|category| {
                let units = by_category.remove(&category.id).unwrap_or_default();
                OuCategory::from_entity(category, &units)
            })
            .collect())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Category not found".to_string())
}
