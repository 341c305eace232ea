use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    model::{tenant::CreateTenantParams, user::Role},
    service::tenant::TenantService,
};

/// Installs the global `tracing` subscriber.
///
/// Filter directives come from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up to date
/// before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions expire after seven days of inactivity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the router
/// - `Err(AppError::InternalError)` - The session table could not be created
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Session store migration failed: {}", e)))?;

    Ok(SessionManagerLayer::new(store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Creates the configured bootstrap tenant with a super admin when no tenant exists.
///
/// Does nothing when bootstrap variables are unset or a tenant is already present.
pub async fn bootstrap_tenant(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let Some(bootstrap) = &config.bootstrap else {
        return Ok(());
    };

    let service = TenantService::new(db);
    if service.any_exists().await? {
        return Ok(());
    }

    let (tenant, admin) = service
        .create(
            CreateTenantParams {
                company: bootstrap.company.clone(),
                name: bootstrap.company.clone(),
                admin_email: bootstrap.admin_email.trim().to_lowercase(),
                admin_name: "Administrator".to_string(),
                admin_password: bootstrap.admin_password.clone(),
            },
            Role::SuperAdmin,
        )
        .await?;

    tracing::info!(
        "Bootstrapped tenant {} with super admin {} (user {})",
        tenant.company,
        admin.email,
        admin.id
    );

    Ok(())
}
