//! Integration factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating registered integrations.
pub struct IntegrationFactory<'a> {
    db: &'a DatabaseConnection,
    tenant_id: i32,
    name: String,
    application: String,
}

impl<'a> IntegrationFactory<'a> {
    /// Creates a new IntegrationFactory.
    ///
    /// Defaults:
    /// - name: `"Integration {id}"`
    /// - application: `"github"`
    /// - status: `"active"`, empty metadata
    pub fn new(db: &'a DatabaseConnection, tenant_id: i32) -> Self {
        Self {
            db,
            tenant_id,
            name: format!("Integration {}", next_id()),
            application: "github".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn application(mut self, application: impl Into<String>) -> Self {
        self.application = application.into();
        self
    }

    pub async fn build(self) -> Result<entity::integration::Model, DbErr> {
        let now = Utc::now();
        entity::integration::ActiveModel {
            tenant_id: ActiveValue::Set(self.tenant_id),
            name: ActiveValue::Set(self.name),
            application: ActiveValue::Set(self.application),
            description: ActiveValue::Set(None),
            url: ActiveValue::Set(None),
            status: ActiveValue::Set("active".to_string()),
            metadata: ActiveValue::Set(json!({})),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a github integration with default values.
pub async fn create_integration(
    db: &DatabaseConnection,
    tenant_id: i32,
) -> Result<entity::integration::Model, DbErr> {
    IntegrationFactory::new(db, tenant_id).build().await
}
