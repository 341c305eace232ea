//! Workspace factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating workspaces and their integration links.
pub struct WorkspaceFactory<'a> {
    db: &'a DatabaseConnection,
    tenant_id: i32,
    name: String,
    key: String,
    integration_ids: Vec<i32>,
}

impl<'a> WorkspaceFactory<'a> {
    /// Creates a new WorkspaceFactory.
    ///
    /// Defaults:
    /// - name: `"Workspace {id}"`
    /// - key: `"WS{id}"`
    /// - no owner, no integrations, enabled
    pub fn new(db: &'a DatabaseConnection, tenant_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            tenant_id,
            name: format!("Workspace {}", id),
            key: format!("WS{}", id),
            integration_ids: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn integrations(mut self, integration_ids: Vec<i32>) -> Self {
        self.integration_ids = integration_ids;
        self
    }

    pub async fn build(self) -> Result<entity::workspace::Model, DbErr> {
        let now = Utc::now();
        let workspace = entity::workspace::ActiveModel {
            tenant_id: ActiveValue::Set(self.tenant_id),
            name: ActiveValue::Set(self.name),
            key: ActiveValue::Set(self.key),
            description: ActiveValue::Set(None),
            owner_id: ActiveValue::Set(None),
            disabled: ActiveValue::Set(false),
            demo: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for integration_id in self.integration_ids {
            entity::workspace_integration::ActiveModel {
                workspace_id: ActiveValue::Set(workspace.id),
                integration_id: ActiveValue::Set(integration_id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(workspace)
    }
}

/// Creates a workspace with default values and no integrations.
pub async fn create_workspace(
    db: &DatabaseConnection,
    tenant_id: i32,
) -> Result<entity::workspace::Model, DbErr> {
    WorkspaceFactory::new(db, tenant_id).build().await
}
