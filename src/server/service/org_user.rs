//! Org user management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::org_user::OrgUserRepository,
    error::AppError,
    model::{
        org_user::{
            CreateOrgUserParams, OrgUser, OrgUserFilter, PaginatedOrgUsers, UpdateOrgUserParams,
        },
        total_pages,
    },
};

pub struct OrgUserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrgUserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an org user.
    ///
    /// # Returns
    /// - `Ok(OrgUser)` - The created org user
    /// - `Err(AppError::BadRequest)` - Blank name or email, non-object attributes,
    ///   or the email is already used in the tenant
    pub async fn create(&self, params: CreateOrgUserParams) -> Result<OrgUser, AppError> {
        if params.full_name.trim().is_empty() || params.email.is_empty() {
            return Err(AppError::BadRequest(
                "Org user full_name and email must not be empty".to_string(),
            ));
        }
        if !params.attributes.is_object() {
            return Err(AppError::BadRequest(
                "Org user attributes must be a JSON object".to_string(),
            ));
        }

        self.ensure_email_free(params.tenant_id, &params.email, None)
            .await?;

        Ok(OrgUserRepository::new(self.db).create(params).await?)
    }

    pub async fn get(&self, tenant_id: i32, id: i32) -> Result<OrgUser, AppError> {
        OrgUserRepository::new(self.db)
            .get_by_id(tenant_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Org user not found".to_string()))
    }

    /// Applies a partial update, keeping emails unique within the tenant.
    pub async fn update(
        &self,
        tenant_id: i32,
        id: i32,
        params: UpdateOrgUserParams,
    ) -> Result<OrgUser, AppError> {
        if let Some(email) = &params.email {
            self.ensure_email_free(tenant_id, email, Some(id)).await?;
        }
        if params.attributes.as_ref().is_some_and(|a| !a.is_object()) {
            return Err(AppError::BadRequest(
                "Org user attributes must be a JSON object".to_string(),
            ));
        }

        OrgUserRepository::new(self.db)
            .update(tenant_id, id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Org user not found".to_string()))
    }

    pub async fn delete(&self, tenant_id: i32, id: i32) -> Result<(), AppError> {
        let deleted = OrgUserRepository::new(self.db).delete(tenant_id, id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Org user not found".to_string()));
        }

        Ok(())
    }

    pub async fn get_paginated(
        &self,
        tenant_id: i32,
        filter: OrgUserFilter,
    ) -> Result<PaginatedOrgUsers, AppError> {
        let (org_users, total) = OrgUserRepository::new(self.db)
            .get_paginated(tenant_id, &filter)
            .await?;

        Ok(PaginatedOrgUsers {
            org_users,
            total,
            page: filter.page,
            per_page: filter.per_page,
            total_pages: total_pages(total, filter.per_page),
        })
    }

    async fn ensure_email_free(
        &self,
        tenant_id: i32,
        email: &str,
        except_id: Option<i32>,
    ) -> Result<(), AppError> {
        let existing = OrgUserRepository::new(self.db)
            .find_by_email(tenant_id, email)
            .await?;

        let taken = existing.is_some_and(|u| Some(u.id) != except_id);
        if taken {
            return Err(AppError::BadRequest(
                "Org user with this email already exists".to_string(),
            ));
        }

        Ok(())
    }
}
