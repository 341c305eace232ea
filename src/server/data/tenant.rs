//! Tenant data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::tenant::Tenant;

pub struct TenantRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TenantRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a tenant. The company slug is stored lowercase.
    ///
    /// # Returns
    /// - `Ok(Tenant)` - The created tenant
    /// - `Err(DbErr)` - Database error, including a duplicate company slug
    pub async fn create(&self, company: &str, name: &str) -> Result<Tenant, DbErr> {
        let entity = entity::tenant::ActiveModel {
            company: ActiveValue::Set(company.to_lowercase()),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Tenant::from_entity(entity))
    }

    /// Finds a tenant by its login slug, ignoring case.
    pub async fn find_by_company(&self, company: &str) -> Result<Option<Tenant>, DbErr> {
        let entity = entity::prelude::Tenant::find()
            .filter(entity::tenant::Column::Company.eq(company.trim().to_lowercase()))
            .one(self.db)
            .await?;

        Ok(entity.map(Tenant::from_entity))
    }

    pub async fn any_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::Tenant::find().count(self.db).await?;
        Ok(count > 0)
    }

    /// Gets tenants ordered by company slug.
    ///
    /// # Returns
    /// - `Ok((tenants, total))` - Tenants on the requested page and the total tenant count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Tenant>, u64), DbErr> {
        let paginator = entity::prelude::Tenant::find()
            .order_by_asc(entity::tenant::Column::Company)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let tenants = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Tenant::from_entity)
            .collect();

        Ok((tenants, total))
    }
}
