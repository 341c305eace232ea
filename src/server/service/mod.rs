//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation and the rules of each domain
//! - **Orchestration**: Coordinating several repositories, e.g. category and org unit
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running multi-step writes such as org unit
//!   versioning inside a single transaction

pub mod auth;
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
