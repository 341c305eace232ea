//! User factory for creating test login accounts.
//!
//! Passwords are hashed with the minimum bcrypt cost to keep tests fast.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Password assigned to factory users unless overridden.
pub const DEFAULT_PASSWORD: &str = "correct-horse-battery";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let auditor = UserFactory::new(&db, tenant.id)
///     .email("auditor@example.com")
///     .role("AUDITOR")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    tenant_id: i32,
    email: String,
    name: String,
    role: String,
    password: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"`
    /// - name: `"User {id}"`
    /// - role: `"ADMIN"`
    /// - password: [`DEFAULT_PASSWORD`]
    pub fn new(db: &'a DatabaseConnection, tenant_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            tenant_id,
            email: format!("user{}@example.com", id),
            name: format!("User {}", id),
            role: "ADMIN".to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }

    /// Sets the login email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the role name, e.g. `"AUDITOR"` or `"PUBLIC_DASHBOARD"`.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets the plain-text password to hash.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Hashing or insert failed
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let password_hash = bcrypt::hash(&self.password, 4)
            .map_err(|e| DbErr::Custom(format!("Failed to hash password: {}", e)))?;

        entity::user::ActiveModel {
            tenant_id: ActiveValue::Set(self.tenant_id),
            email: ActiveValue::Set(self.email),
            name: ActiveValue::Set(self.name),
            role: ActiveValue::Set(self.role),
            password_hash: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an `ADMIN` user of the tenant with default values.
pub async fn create_user(
    db: &DatabaseConnection,
    tenant_id: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, tenant_id).build().await
}
