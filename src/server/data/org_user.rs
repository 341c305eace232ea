//! Org user data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::org_user::{CreateOrgUserParams, OrgUser, OrgUserFilter, UpdateOrgUserParams},
    util::parse::search_term,
};

pub struct OrgUserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrgUserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateOrgUserParams) -> Result<OrgUser, DbErr> {
        let now = Utc::now();
        let entity = entity::org_user::ActiveModel {
            tenant_id: ActiveValue::Set(params.tenant_id),
            full_name: ActiveValue::Set(params.full_name),
            email: ActiveValue::Set(params.email),
            attributes: ActiveValue::Set(params.attributes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(OrgUser::from_entity(entity))
    }

    pub async fn get_by_id(&self, tenant_id: i32, id: i32) -> Result<Option<OrgUser>, DbErr> {
        let entity = entity::prelude::OrgUser::find_by_id(id)
            .filter(entity::org_user::Column::TenantId.eq(tenant_id))
            .one(self.db)
            .await?;

        Ok(entity.map(OrgUser::from_entity))
    }

    /// Finds an org user of the tenant by email, ignoring case.
    pub async fn find_by_email(
        &self,
        tenant_id: i32,
        email: &str,
    ) -> Result<Option<OrgUser>, DbErr> {
        let entity = entity::prelude::OrgUser::find()
            .filter(entity::org_user::Column::TenantId.eq(tenant_id))
            .filter(entity::org_user::Column::Email.eq(email.trim().to_lowercase()))
            .one(self.db)
            .await?;

        Ok(entity.map(OrgUser::from_entity))
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(OrgUser))` - The updated org user
    /// - `Ok(None)` - No org user with that id in the tenant
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        tenant_id: i32,
        id: i32,
        params: UpdateOrgUserParams,
    ) -> Result<Option<OrgUser>, DbErr> {
        let Some(existing) = entity::prelude::OrgUser::find_by_id(id)
            .filter(entity::org_user::Column::TenantId.eq(tenant_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::org_user::ActiveModel = existing.into();
        if let Some(full_name) = params.full_name {
            active.full_name = ActiveValue::Set(full_name);
        }
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(attributes) = params.attributes {
            active.attributes = ActiveValue::Set(attributes);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Ok(Some(OrgUser::from_entity(entity)))
    }

    pub async fn delete(&self, tenant_id: i32, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::OrgUser::delete_many()
            .filter(entity::org_user::Column::TenantId.eq(tenant_id))
            .filter(entity::org_user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets org users matching the filter, ordered by full name then id.
    pub async fn get_paginated(
        &self,
        tenant_id: i32,
        filter: &OrgUserFilter,
    ) -> Result<(Vec<OrgUser>, u64), DbErr> {
        let mut query = entity::prelude::OrgUser::find()
            .filter(entity::org_user::Column::TenantId.eq(tenant_id));

        if let Some(email) = search_term(filter.email.as_deref()) {
            query = query.filter(entity::org_user::Column::Email.contains(email));
        }
        if let Some(full_name) = search_term(filter.full_name.as_deref()) {
            query = query.filter(entity::org_user::Column::FullName.contains(full_name));
        }

        let paginator = query
            .order_by_asc(entity::org_user::Column::FullName)
            .order_by_asc(entity::org_user::Column::Id)
            .paginate(self.db, filter.per_page);

        let total = paginator.num_items().await?;
        let org_users = paginator
            .fetch_page(filter.page)
            .await?
            .into_iter()
            .map(OrgUser::from_entity)
            .collect();

        Ok((org_users, total))
    }

    /// Gets all org users of the tenant, used for dynamic section matching.
    pub async fn get_all(&self, tenant_id: i32) -> Result<Vec<OrgUser>, DbErr> {
        let entities = entity::prelude::OrgUser::find()
            .filter(entity::org_user::Column::TenantId.eq(tenant_id))
            .order_by_asc(entity::org_user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(OrgUser::from_entity).collect())
    }

    /// Gets the org users with the given ids that belong to the tenant, ordered by id.
    pub async fn find_by_ids(&self, tenant_id: i32, ids: &[i32]) -> Result<Vec<OrgUser>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::OrgUser::find()
            .filter(entity::org_user::Column::TenantId.eq(tenant_id))
            .filter(entity::org_user::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::org_user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(OrgUser::from_entity).collect())
    }
}
