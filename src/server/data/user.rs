//! Login user data repository.
//!
//! Returns entity models because the password hash is needed at login and role
//! parsing is fallible; the service layer converts to [`User`](crate::server::model::user::User).

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::CreateUserParams;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a user with an already hashed password.
    pub async fn create(
        &self,
        params: &CreateUserParams,
        password_hash: String,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            tenant_id: ActiveValue::Set(params.tenant_id),
            email: ActiveValue::Set(params.email.clone()),
            name: ActiveValue::Set(params.name.clone()),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            password_hash: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a user of a tenant by email, ignoring case.
    pub async fn find_by_email(
        &self,
        tenant_id: i32,
        email: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::TenantId.eq(tenant_id))
            .filter(entity::user::Column::Email.eq(email.trim().to_lowercase()))
            .one(self.db)
            .await
    }

    /// Gets the users of a tenant ordered by email.
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users on the requested page and the tenant's user count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        tenant_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::user::Model>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .filter(entity::user::Column::TenantId.eq(tenant_id))
            .order_by_asc(entity::user::Column::Email)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator.fetch_page(page).await?;

        Ok((users, total))
    }

    /// Deletes a user of the tenant, returning the number of rows removed.
    pub async fn delete(&self, tenant_id: i32, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_many()
            .filter(entity::user::Column::TenantId.eq(tenant_id))
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
