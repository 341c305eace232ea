//! Password login and token issuance.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{tenant::TenantRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::User,
    util::{jwt::JwtKeys, password::verify_password},
};

/// Service verifying login credentials and issuing bearer tokens.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtKeys,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtKeys) -> Self {
        Self { db, jwt }
    }

    /// Verifies a company, email and password triple.
    ///
    /// Unknown company, unknown email and wrong password all produce the same
    /// error so callers cannot tell which part was wrong.
    ///
    /// # Returns
    /// - `Ok((User, String))` - The authenticated user and a freshly signed token
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Any credential mismatch
    /// - `Err(AppError::HashErr)` - Stored hash could not be parsed
    pub async fn login(
        &self,
        company: &str,
        email: &str,
        password: &str,
    ) -> Result<(User, String), AppError> {
        let invalid = || AuthError::InvalidCredentials {
            company: company.to_string(),
            email: email.to_string(),
        };

        let Some(tenant) = TenantRepository::new(self.db)
            .find_by_company(company)
            .await?
        else {
            return Err(invalid().into());
        };

        let Some(entity) = UserRepository::new(self.db)
            .find_by_email(tenant.id, email)
            .await?
        else {
            return Err(invalid().into());
        };

        if !verify_password(password.to_string(), entity.password_hash.clone()).await? {
            return Err(invalid().into());
        }

        let user = User::from_entity(entity)?;
        let token = self.jwt.issue(&user)?;

        Ok((user, token))
    }
}
