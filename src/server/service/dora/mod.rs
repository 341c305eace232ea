//! DORA metrics over recorded deployments and incidents.
//!
//! Queries may be scoped to an org unit, in which case only records of the
//! integrations referenced by the unit's sections count. A unit without any
//! integration ids scopes to all records of the tenant.

pub mod calculation;

#[cfg(test)]
mod test;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{dora::DoraRepository, org_unit::OrgUnitRepository},
    error::AppError,
    model::dora::{
        ChangeFailureRate, DeploymentFrequency, DoraQuery, DurationStats, Interval,
        RecordDeploymentParams, RecordIncidentParams,
    },
    service::integration::ensure_integrations_exist,
};

pub struct DoraService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DoraService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a deployment of a registered integration.
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored deployment
    /// - `Err(AppError::BadRequest)` - Blank service or environment, or unknown integration
    pub async fn record_deployment(
        &self,
        params: RecordDeploymentParams,
    ) -> Result<entity::deployment::Model, AppError> {
        if params.service.trim().is_empty() || params.environment.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Deployment service and environment must not be empty".to_string(),
            ));
        }
        ensure_integrations_exist(self.db, params.tenant_id, &[params.integration_id]).await?;

        Ok(DoraRepository::new(self.db)
            .record_deployment(params)
            .await?)
    }

    pub async fn record_incident(
        &self,
        params: RecordIncidentParams,
    ) -> Result<entity::incident::Model, AppError> {
        if params.service.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Incident service must not be empty".to_string(),
            ));
        }
        ensure_integrations_exist(self.db, params.tenant_id, &[params.integration_id]).await?;

        Ok(DoraRepository::new(self.db).record_incident(params).await?)
    }

    pub async fn deployment_frequency(
        &self,
        query: &DoraQuery,
        interval: Interval,
    ) -> Result<DeploymentFrequency, AppError> {
        let deployments = self.deployments(query).await?;
        let deployed_at: Vec<_> = deployments.iter().map(|d| d.deployed_at).collect();

        Ok(calculation::deployment_frequency(
            &deployed_at,
            &query.range,
            interval,
        ))
    }

    /// Change failure rate over deployments in range.
    ///
    /// # Returns
    /// - `Ok(ChangeFailureRate)` - Counts, plus rate and band unless `is_absolute`
    /// - `Err(AppError::NotFound)` - The scoping org unit does not exist
    /// - `Err(AppError::BadRequest)` - Failures exist without deployments
    pub async fn change_failure_rate(
        &self,
        query: &DoraQuery,
        is_absolute: bool,
    ) -> Result<ChangeFailureRate, AppError> {
        let deployments = self.deployments(query).await?;
        let failed = deployments.iter().filter(|d| d.failed).count() as u64;

        calculation::change_failure_rate(failed, deployments.len() as u64, is_absolute)
    }

    /// Time from first commit to deployment, over deployments that know their first commit.
    pub async fn lead_time(&self, query: &DoraQuery) -> Result<DurationStats, AppError> {
        let samples = self
            .deployments(query)
            .await?
            .into_iter()
            .filter_map(|d| {
                d.first_commit_at
                    .map(|commit| (d.deployed_at - commit).num_seconds())
            })
            .collect();

        Ok(calculation::duration_stats(
            samples,
            calculation::lead_time_band,
        ))
    }

    /// Time to restore over incidents opened in range that have been resolved.
    pub async fn mean_time_to_restore(&self, query: &DoraQuery) -> Result<DurationStats, AppError> {
        let integration_ids = self.scope(query).await?;
        let samples = DoraRepository::new(self.db)
            .incidents_opened_between(
                query.tenant_id,
                integration_ids.as_deref(),
                query.range.start,
                query.range.end,
            )
            .await?
            .into_iter()
            .filter_map(|i| {
                i.resolved_at
                    .map(|resolved| (resolved - i.opened_at).num_seconds())
            })
            .collect();

        Ok(calculation::duration_stats(
            samples,
            calculation::restore_time_band,
        ))
    }

    async fn deployments(
        &self,
        query: &DoraQuery,
    ) -> Result<Vec<entity::deployment::Model>, AppError> {
        let integration_ids = self.scope(query).await?;

        Ok(DoraRepository::new(self.db)
            .deployments_between(
                query.tenant_id,
                integration_ids.as_deref(),
                query.range.start,
                query.range.end,
            )
            .await?)
    }

    /// Integration ids the query is restricted to, `None` for all.
    async fn scope(&self, query: &DoraQuery) -> Result<Option<Vec<i32>>, AppError> {
        let Some(ref_id) = query.ou_ref_id else {
            return Ok(None);
        };

        let repo = OrgUnitRepository::new(self.db);
        let unit = repo
            .find_active(query.tenant_id, ref_id)
            .await?
            .ok_or_else(|| AppError::NotFound("OU not found".to_string()))?;

        let mut integration_ids: Vec<i32> = repo
            .sections_by_unit(&[unit.id])
            .await?
            .remove(&unit.id)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|section| section.integration_id)
            .collect();
        integration_ids.sort_unstable();
        integration_ids.dedup();

        if integration_ids.is_empty() {
            return Ok(None);
        }

        Ok(Some(integration_ids))
    }
}
