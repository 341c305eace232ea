//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Every query is scoped by tenant id. Repositories are generic
//! over the connection so services can compose them inside a transaction.

pub mod category;
pub mod dashboard;
pub mod dora;
pub mod integration;
pub mod org_unit;
pub mod org_user;
pub mod tenant;
pub mod user;
pub mod workspace;

#[cfg(test)]
mod test;
