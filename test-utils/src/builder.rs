use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Tenant, User};
///
/// let test = TestBuilder::new()
///     .with_table(Tenant)
///     .with_table(User)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Foreign keys declared on the entity's relations are included, so
    /// tables must be added in dependency order (referenced tables first).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tenant and login user tables.
    ///
    /// Every tenant-scoped table references these, so all other convenience
    /// methods start with them.
    pub fn with_tenant_tables(self) -> Self {
        self.with_table(Tenant).with_table(User)
    }

    /// Adds all tables required for organization modelling.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Tenant, User
    /// - Integration, Workspace and their links
    /// - OrgUser
    /// - OuCategory
    /// - Dashboard, Widget
    /// - OrgUnit and its managers, sections and dashboard mappings
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_org_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_org_tables(self) -> Self {
        self.with_tenant_tables()
            .with_table(Integration)
            .with_table(Workspace)
            .with_table(WorkspaceIntegration)
            .with_table(OrgUser)
            .with_table(OuCategory)
            .with_table(Dashboard)
            .with_table(Widget)
            .with_table(OrgUnit)
            .with_table(OrgUnitManager)
            .with_table(OrgUnitSection)
            .with_table(OrgUnitDashboard)
    }

    /// Adds the organization tables plus deployment and incident records.
    ///
    /// DORA calculations may be scoped to an org unit, which is why the
    /// organization tables are included.
    pub fn with_dora_tables(self) -> Self {
        self.with_org_tables()
            .with_table(Deployment)
            .with_table(Incident)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`. Tables are created in the order
    /// they were added to the builder.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
