//! Tenant factory for creating test companies.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tenants.
///
/// # Example
///
/// ```rust,ignore
/// let tenant = TenantFactory::new(&db).company("acme").build().await?;
/// ```
pub struct TenantFactory<'a> {
    db: &'a DatabaseConnection,
    company: String,
    name: String,
}

impl<'a> TenantFactory<'a> {
    /// Creates a new TenantFactory with default values.
    ///
    /// Defaults:
    /// - company: `"company{id}"`
    /// - name: `"Company {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            company: format!("company{}", id),
            name: format!("Company {}", id),
        }
    }

    /// Sets the company slug.
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the tenant.
    pub async fn build(self) -> Result<entity::tenant::Model, DbErr> {
        entity::tenant::ActiveModel {
            company: ActiveValue::Set(self.company),
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tenant with default values.
pub async fn create_tenant(db: &DatabaseConnection) -> Result<entity::tenant::Model, DbErr> {
    TenantFactory::new(db).build().await
}
