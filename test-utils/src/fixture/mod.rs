//! Test fixtures providing in-memory entity models without database insertion.
//!
//! Useful for unit testing conversions and pure logic without database overhead.
//! Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let unit = fixture::org_unit::entity();
//! assert_eq!(unit.path, "/Engineering");
//! ```

pub mod org_unit;
