//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for customization
//! and a `create_*` convenience function for quick default creation. Factories insert
//! rows directly, bypassing service-level validation, so tests can arrange any state.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let (tenant, admin) = factory::helpers::create_tenant_with_admin(&db).await?;
//! let category = factory::ou_category::create_category(&db, tenant.id).await?;
//!
//! let root = factory::org_unit::OrgUnitFactory::new(&db, tenant.id)
//!     .name("Engineering")
//!     .category(category.id)
//!     .build()
//!     .await?;
//! let child = factory::org_unit::OrgUnitFactory::new(&db, tenant.id)
//!     .name("Platform")
//!     .parent(&root)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `tenant` - Tenants (companies)
//! - `user` - Login users with a role and bcrypt password hash
//! - `org_user` - People modelled in the organization
//! - `integration` - Registered integrations
//! - `workspace` - Workspaces and their integration links
//! - `ou_category` - Org unit categories
//! - `org_unit` - Org unit versions and their sections, managers and dashboard mappings
//! - `dashboard` - Dashboards and widgets
//! - `deployment` - Deployment and incident records used by DORA metrics
//! - `helpers` - Unique id generation and multi-entity shortcuts

pub mod dashboard;
pub mod deployment;
pub mod helpers;
pub mod integration;
pub mod org_unit;
pub mod org_user;
pub mod ou_category;
pub mod tenant;
pub mod user;
pub mod workspace;

pub use dashboard::create_dashboard;
pub use helpers::create_tenant_with_admin;
pub use integration::create_integration;
pub use org_user::create_org_user;
pub use ou_category::create_category;
pub use tenant::create_tenant;
pub use user::create_user;
pub use workspace::create_workspace;
