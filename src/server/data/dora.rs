//! Deployment and incident records backing the DORA metrics.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::dora::{RecordDeploymentParams, RecordIncidentParams};

pub struct DoraRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DoraRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn record_deployment(
        &self,
        params: RecordDeploymentParams,
    ) -> Result<entity::deployment::Model, DbErr> {
        entity::deployment::ActiveModel {
            tenant_id: ActiveValue::Set(params.tenant_id),
            integration_id: ActiveValue::Set(params.integration_id),
            service: ActiveValue::Set(params.service),
            environment: ActiveValue::Set(params.environment),
            deployed_at: ActiveValue::Set(params.deployed_at),
            first_commit_at: ActiveValue::Set(params.first_commit_at),
            failed: ActiveValue::Set(params.failed),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn record_incident(
        &self,
        params: RecordIncidentParams,
    ) -> Result<entity::incident::Model, DbErr> {
        entity::incident::ActiveModel {
            tenant_id: ActiveValue::Set(params.tenant_id),
            integration_id: ActiveValue::Set(params.integration_id),
            service: ActiveValue::Set(params.service),
            opened_at: ActiveValue::Set(params.opened_at),
            resolved_at: ActiveValue::Set(params.resolved_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Deletes every deployment and incident recorded for an integration.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted deployments and incidents combined
    /// - `Err(DbErr)` - Database error during either delete
    pub async fn delete_by_integration(
        &self,
        tenant_id: i32,
        integration_id: i32,
    ) -> Result<u64, DbErr> {
        let deployments = entity::prelude::Deployment::delete_many()
            .filter(entity::deployment::Column::TenantId.eq(tenant_id))
            .filter(entity::deployment::Column::IntegrationId.eq(integration_id))
            .exec(self.db)
            .await?;
        let incidents = entity::prelude::Incident::delete_many()
            .filter(entity::incident::Column::TenantId.eq(tenant_id))
            .filter(entity::incident::Column::IntegrationId.eq(integration_id))
            .exec(self.db)
            .await?;

        Ok(deployments.rows_affected + incidents.rows_affected)
    }

    /// Deployments with `start <= deployed_at < end`, oldest first.
    ///
    /// `integration_ids` of `None` means every integration of the tenant.
    pub async fn deployments_between(
        &self,
        tenant_id: i32,
        integration_ids: Option<&[i32]>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<entity::deployment::Model>, DbErr> {
        let mut query = entity::prelude::Deployment::find()
            .filter(entity::deployment::Column::TenantId.eq(tenant_id))
            .filter(entity::deployment::Column::DeployedAt.gte(start))
            .filter(entity::deployment::Column::DeployedAt.lt(end));

        if let Some(ids) = integration_ids {
            query = query.filter(entity::deployment::Column::IntegrationId.is_in(ids.to_vec()));
        }

        query
            .order_by_asc(entity::deployment::Column::DeployedAt)
            .order_by_asc(entity::deployment::Column::Id)
            .all(self.db)
            .await
    }

    /// Incidents opened with `start <= opened_at < end`, oldest first.
    pub async fn incidents_opened_between(
        &self,
        tenant_id: i32,
        integration_ids: Option<&[i32]>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<entity::incident::Model>, DbErr> {
        let mut query = entity::prelude::Incident::find()
            .filter(entity::incident::Column::TenantId.eq(tenant_id))
            .filter(entity::incident::Column::OpenedAt.gte(start))
            .filter(entity::incident::Column::OpenedAt.lt(end));

        if let Some(ids) = integration_ids {
            query = query.filter(entity::incident::Column::IntegrationId.is_in(ids.to_vec()));
        }

        query
            .order_by_asc(entity::incident::Column::OpenedAt)
            .order_by_asc(entity::incident::Column::Id)
            .all(self.db)
            .await
    }
}
