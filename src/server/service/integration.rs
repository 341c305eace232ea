//! Integration registry.
//!
//! Other writes that carry an integration id (workspace links, org unit
//! sections, deployments and incidents) are checked against this registry with
//! [`ensure_integrations_exist`].

use std::collections::HashSet;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        dora::DoraRepository, integration::IntegrationRepository, org_unit::OrgUnitRepository,
    },
    error::AppError,
    model::{
        integration::{
            CreateIntegrationParams, Integration, IntegrationFilter, PaginatedIntegrations,
            UpdateIntegrationParams, MAX_NAME_LEN,
        },
        total_pages,
    },
};

pub struct IntegrationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IntegrationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers an integration.
    ///
    /// # Returns
    /// - `Ok(Integration)` - The created integration
    /// - `Err(AppError::BadRequest)` - Blank or too long name, blank application,
    ///   or the name is taken in the tenant
    pub async fn create(&self, params: CreateIntegrationParams) -> Result<Integration, AppError> {
        validate_name(&params.name)?;
        if params.application.is_empty() {
            return Err(AppError::BadRequest(
                "Integration application must not be empty".to_string(),
            ));
        }

        let repo = IntegrationRepository::new(self.db);
        if repo
            .find_by_name(params.tenant_id, &params.name)
            .await?
            .is_some()
        {
            return Err(name_taken());
        }

        let integration = repo.create(params).await?;

        tracing::info!(
            tenant_id = integration.tenant_id,
            integration_id = integration.id,
            "Created {} integration {}",
            integration.application,
            integration.name
        );

        Ok(integration)
    }

    pub async fn get(&self, tenant_id: i32, id: i32) -> Result<Integration, AppError> {
        IntegrationRepository::new(self.db)
            .get_by_id(tenant_id, id)
            .await?
            .ok_or_else(not_found)
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Integration)` - The updated integration
    /// - `Err(AppError::BadRequest)` - The new name is blank, too long or taken
    /// - `Err(AppError::NotFound)` - No integration with that id in the tenant
    pub async fn update(
        &self,
        tenant_id: i32,
        id: i32,
        params: UpdateIntegrationParams,
    ) -> Result<Integration, AppError> {
        let repo = IntegrationRepository::new(self.db);
        if let Some(name) = &params.name {
            validate_name(name)?;
            let clash = repo
                .find_by_name(tenant_id, name)
                .await?
                .is_some_and(|other| other.id != id);
            if clash {
                return Err(name_taken());
            }
        }

        repo.update(tenant_id, id, params)
            .await?
            .ok_or_else(not_found)
    }

    /// Deletes an integration together with the records that reference it.
    ///
    /// Deployments and incidents of the integration are deleted, org unit
    /// sections lose their integration scope and workspace links are removed,
    /// all in one transaction.
    ///
    /// # Returns
    /// - `Ok(())` - The integration is gone
    /// - `Err(AppError::NotFound)` - No integration with that id in the tenant
    pub async fn delete(&self, tenant_id: i32, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let repo = IntegrationRepository::new(&txn);
        repo.get_by_id(tenant_id, id)
            .await?
            .ok_or_else(not_found)?;

        let records = DoraRepository::new(&txn)
            .delete_by_integration(tenant_id, id)
            .await?;
        let sections = OrgUnitRepository::new(&txn)
            .clear_section_integration(id)
            .await?;
        repo.delete(tenant_id, id).await?;

        txn.commit().await?;

        tracing::info!(
            tenant_id,
            integration_id = id,
            records,
            sections,
            "Deleted integration"
        );

        Ok(())
    }

    pub async fn list(
        &self,
        tenant_id: i32,
        filter: &IntegrationFilter,
    ) -> Result<PaginatedIntegrations, AppError> {
        let (integrations, total) = IntegrationRepository::new(self.db)
            .get_paginated(tenant_id, filter)
            .await?;

        Ok(PaginatedIntegrations {
            integrations,
            total,
            page: filter.page,
            per_page: filter.per_page,
            total_pages: total_pages(total, filter.per_page),
        })
    }
}

/// Rejects ids that are not integrations of the tenant.
///
/// # Returns
/// - `Ok(())` - Every id is known, or `ids` is empty
/// - `Err(AppError::BadRequest)` - Lists the unknown ids in ascending order
pub(crate) async fn ensure_integrations_exist<C: ConnectionTrait>(
    db: &C,
    tenant_id: i32,
    ids: &[i32],
) -> Result<(), AppError> {
    let mut requested = ids.to_vec();
    requested.sort_unstable();
    requested.dedup();

    let known: HashSet<i32> = IntegrationRepository::new(db)
        .existing_ids(tenant_id, &requested)
        .await?
        .into_iter()
        .collect();
    let missing: Vec<i32> = requested
        .into_iter()
        .filter(|id| !known.contains(id))
        .collect();

    if !missing.is_empty() {
        return Err(AppError::BadRequest(format!(
            "Unknown integration ids: {:?}",
            missing
        )));
    }

    Ok(())
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.is_empty() {
        return Err(AppError::BadRequest(
            "Integration name must not be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::BadRequest(format!(
            "Integration name must be at most {} characters",
            MAX_NAME_LEN
        )));
    }

    Ok(())
}

fn name_taken() -> AppError {
    AppError::BadRequest("Integration with this name already exists".to_string())
}

fn not_found() -> AppError {
    AppError::NotFound("Integration not found".to_string())
}
