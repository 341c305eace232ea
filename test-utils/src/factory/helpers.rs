//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to derive unique company slugs, emails and names across factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a tenant together with an `ADMIN` user of that tenant.
///
/// # Returns
/// - `Ok((tenant, admin))` - The created tenant and its admin user
/// - `Err(DbErr)` - Database error during creation
pub async fn create_tenant_with_admin(
    db: &DatabaseConnection,
) -> Result<(entity::tenant::Model, entity::user::Model), DbErr> {
    let tenant = crate::factory::tenant::create_tenant(db).await?;
    let admin = crate::factory::user::UserFactory::new(db, tenant.id)
        .role("ADMIN")
        .build()
        .await?;

    Ok((tenant, admin))
}
