//! API data transfer objects.
//!
//! Request and response bodies serialized over the REST interface. Server-side
//! domain models in `server::model` convert to and from these at the controller
//! boundary.

pub mod api;
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
