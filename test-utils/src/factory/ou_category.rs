//! OU category factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating org unit categories.
pub struct OuCategoryFactory<'a> {
    db: &'a DatabaseConnection,
    tenant_id: i32,
    name: String,
    description: Option<String>,
    workspace_id: i32,
    is_predefined: bool,
    enabled: bool,
    created_at: DateTime<Utc>,
}

impl<'a> OuCategoryFactory<'a> {
    /// Creates a new OuCategoryFactory.
    ///
    /// Defaults:
    /// - name: `"Category {id}"`
    /// - workspace_id: `1`
    /// - is_predefined: `false`
    /// - enabled: `true`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, tenant_id: i32) -> Self {
        Self {
            db,
            tenant_id,
            name: format!("Category {}", next_id()),
            description: None,
            workspace_id: 1,
            is_predefined: false,
            enabled: true,
            created_at: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn workspace_id(mut self, workspace_id: i32) -> Self {
        self.workspace_id = workspace_id;
        self
    }

    pub fn predefined(mut self, is_predefined: bool) -> Self {
        self.is_predefined = is_predefined;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Overrides the creation timestamp, used to control list ordering.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::ou_category::Model, DbErr> {
        entity::ou_category::ActiveModel {
            tenant_id: ActiveValue::Set(self.tenant_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            is_predefined: ActiveValue::Set(self.is_predefined),
            enabled: ActiveValue::Set(self.enabled),
            workspace_id: ActiveValue::Set(self.workspace_id),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category in workspace 1 with default values.
pub async fn create_category(
    db: &DatabaseConnection,
    tenant_id: i32,
) -> Result<entity::ou_category::Model, DbErr> {
    OuCategoryFactory::new(db, tenant_id).build().await
}
