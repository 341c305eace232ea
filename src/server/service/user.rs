//! Login user management within a tenant.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        total_pages,
        user::{CreateUserParams, PaginatedUsers, Role, User},
    },
    util::password::hash_password,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a login user in the actor's tenant.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Blank email or password, or email already taken
    /// - `Err(AppError::AuthErr(AccessDenied))` - Non super admin creating a super admin
    pub async fn create(&self, actor: &User, params: CreateUserParams) -> Result<User, AppError> {
        if params.email.is_empty() {
            return Err(AppError::BadRequest("Email must not be empty".to_string()));
        }
        if params.password.is_empty() {
            return Err(AppError::BadRequest("Password must not be empty".to_string()));
        }
        if params.role == Role::SuperAdmin && actor.role != Role::SuperAdmin {
            return Err(AuthError::AccessDenied(
                actor.id,
                "only super admins may create super admin users".to_string(),
            )
            .into());
        }

        let repo = UserRepository::new(self.db);
        if repo
            .find_by_email(params.tenant_id, &params.email)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(
                "User with this email already exists".to_string(),
            ));
        }

        let password_hash = hash_password(params.password.clone()).await?;
        let entity = repo.create(&params, password_hash).await?;

        User::from_entity(entity)
    }

    /// Gets the users of a tenant ordered by email.
    pub async fn get_all(
        &self,
        tenant_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedUsers, AppError> {
        let (entities, total) = UserRepository::new(self.db)
            .get_all_paginated(tenant_id, page, per_page)
            .await?;

        let users = entities
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }
}
