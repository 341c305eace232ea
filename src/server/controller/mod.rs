//! HTTP request handlers.
//!
//! Each handler authenticates the caller through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! converts request DTOs into service parameters scoped to the caller's tenant,
//! and converts the service result back into a response DTO.

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
