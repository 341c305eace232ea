//! Deployment and incident factories for DORA metric tests.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating deployment records.
pub struct DeploymentFactory<'a> {
    db: &'a DatabaseConnection,
    tenant_id: i32,
    integration_id: i32,
    service: String,
    deployed_at: DateTime<Utc>,
    first_commit_at: Option<DateTime<Utc>>,
    failed: bool,
}

impl<'a> DeploymentFactory<'a> {
    /// Creates a new DeploymentFactory.
    ///
    /// Defaults:
    /// - integration_id: `1`
    /// - service: `"api"`
    /// - deployed_at: `deployed_at` argument
    /// - no first commit, not failed
    pub fn new(db: &'a DatabaseConnection, tenant_id: i32, deployed_at: DateTime<Utc>) -> Self {
        Self {
            db,
            tenant_id,
            integration_id: 1,
            service: "api".to_string(),
            deployed_at,
            first_commit_at: None,
            failed: false,
        }
    }

    pub fn integration_id(mut self, integration_id: i32) -> Self {
        self.integration_id = integration_id;
        self
    }

    pub fn service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    pub fn first_commit_at(mut self, first_commit_at: DateTime<Utc>) -> Self {
        self.first_commit_at = Some(first_commit_at);
        self
    }

    pub fn failed(mut self, failed: bool) -> Self {
        self.failed = failed;
        self
    }

    pub async fn build(self) -> Result<entity::deployment::Model, DbErr> {
        entity::deployment::ActiveModel {
            tenant_id: ActiveValue::Set(self.tenant_id),
            integration_id: ActiveValue::Set(self.integration_id),
            service: ActiveValue::Set(self.service),
            environment: ActiveValue::Set("production".to_string()),
            deployed_at: ActiveValue::Set(self.deployed_at),
            first_commit_at: ActiveValue::Set(self.first_commit_at),
            failed: ActiveValue::Set(self.failed),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an incident record.
///
/// # Arguments
/// - `opened_at` - When the incident was opened
/// - `resolved_at` - When it was resolved, `None` while still open
pub async fn create_incident(
    db: &DatabaseConnection,
    tenant_id: i32,
    integration_id: i32,
    opened_at: DateTime<Utc>,
    resolved_at: Option<DateTime<Utc>>,
) -> Result<entity::incident::Model, DbErr> {
    entity::incident::ActiveModel {
        tenant_id: ActiveValue::Set(tenant_id),
        integration_id: ActiveValue::Set(integration_id),
        service: ActiveValue::Set("api".to_string()),
        opened_at: ActiveValue::Set(opened_at),
        resolved_at: ActiveValue::Set(resolved_at),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
