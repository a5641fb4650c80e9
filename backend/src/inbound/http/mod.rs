//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod categories;
pub mod error;
pub mod login;
pub mod routes;
pub mod schemas;
pub mod state;
pub mod stats;
pub mod tasks;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;
