//! Insights Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the insights
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, plus factories for every entity.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection, session and setup
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn creates_org_unit() -> Result<(), DbErr> {
//!     let test = TestBuilder::new().with_org_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let tenant = factory::tenant::create_tenant(db).await?;
//!     let unit = factory::org_unit::OrgUnitFactory::new(db, tenant.id).build().await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
