//! Tenant provisioning.
//!
//! A tenant is always created together with its first login user so the new
//! company can sign in immediately.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{tenant::TenantRepository, user::UserRepository},
    error::AppError,
    model::{
        tenant::{CreateTenantParams, PaginatedTenants, Tenant},
        total_pages,
        user::{CreateUserParams, Role, User},
    },
    util::password::hash_password,
};

pub struct TenantService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TenantService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a tenant and its first user with `admin_role`.
    ///
    /// # Returns
    /// - `Ok((Tenant, User))` - The tenant and its first user
    /// - `Err(AppError::BadRequest)` - Invalid slug, blank admin credentials,
    ///   or the company already exists
    pub async fn create(
        &self,
        params: CreateTenantParams,
        admin_role: Role,
    ) -> Result<(Tenant, User), AppError> {
        if !is_valid_company(&params.company) {
            return Err(AppError::BadRequest(
                "Company must be a lowercase slug of letters, digits, '-' or '_'".to_string(),
            ));
        }
        if params.admin_email.is_empty() || params.admin_password.is_empty() {
            return Err(AppError::BadRequest(
                "Admin email and password must not be empty".to_string(),
            ));
        }

        let password_hash = hash_password(params.admin_password.clone()).await?;

        let txn = self.db.begin().await?;

        let tenant_repo = TenantRepository::new(&txn);
        if tenant_repo.find_by_company(&params.company).await?.is_some() {
            return Err(AppError::BadRequest("Company already exists".to_string()));
        }
        let tenant = tenant_repo.create(&params.company, &params.name).await?;

        let admin = UserRepository::new(&txn)
            .create(
                &CreateUserParams {
                    tenant_id: tenant.id,
                    email: params.admin_email,
                    name: params.admin_name,
                    role: admin_role,
                    password: params.admin_password,
                },
                password_hash,
            )
            .await?;

        txn.commit().await?;

        Ok((tenant, User::from_entity(admin)?))
    }

    /// Whether any tenant has been provisioned yet.
    pub async fn any_exists(&self) -> Result<bool, AppError> {
        Ok(TenantRepository::new(self.db).any_exists().await?)
    }

    pub async fn get_all(&self, page: u64, per_page: u64) -> Result<PaginatedTenants, AppError> {
        let (tenants, total) = TenantRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(PaginatedTenants {
            tenants,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }
}

fn is_valid_company(company: &str) -> bool {
    !company.is_empty()
        && company
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}
