//! SeaORM entity models for the insights database schema.
//!
//! Every tenant-scoped table carries a `tenant_id` column referencing [`tenant`];
//! repositories always filter on it.

pub mod dashboard;
pub mod deployment;
pub mod incident;
pub mod integration;
pub mod org_unit;
pub mod org_unit_dashboard;
pub mod org_unit_manager;
pub mod org_unit_section;
pub mod org_user;
pub mod ou_category;
pub mod prelude;
pub mod tenant;
pub mod user;
pub mod widget;
pub mod workspace;
pub mod workspace_integration;
