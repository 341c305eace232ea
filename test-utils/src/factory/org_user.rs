//! Org user factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::{json, Value};

/// Factory for creating people of the organization.
pub struct OrgUserFactory<'a> {
    db: &'a DatabaseConnection,
    tenant_id: i32,
    full_name: String,
    email: String,
    attributes: Value,
}

impl<'a> OrgUserFactory<'a> {
    /// Creates a new OrgUserFactory.
    ///
    /// Defaults:
    /// - full_name: `"Person {id}"`
    /// - email: `"person{id}@example.com"`
    /// - attributes: `{}`
    pub fn new(db: &'a DatabaseConnection, tenant_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            tenant_id,
            full_name: format!("Person {}", id),
            email: format!("person{}@example.com", id),
            attributes: json!({}),
        }
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the attribute object matched by dynamic membership definitions.
    pub fn attributes(mut self, attributes: Value) -> Self {
        self.attributes = attributes;
        self
    }

    pub async fn build(self) -> Result<entity::org_user::Model, DbErr> {
        let now = Utc::now();
        entity::org_user::ActiveModel {
            tenant_id: ActiveValue::Set(self.tenant_id),
            full_name: ActiveValue::Set(self.full_name),
            email: ActiveValue::Set(self.email),
            attributes: ActiveValue::Set(self.attributes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an org user with default values.
pub async fn create_org_user(
    db: &DatabaseConnection,
    tenant_id: i32,
) -> Result<entity::org_user::Model, DbErr> {
    OrgUserFactory::new(db, tenant_id).build().await
}
