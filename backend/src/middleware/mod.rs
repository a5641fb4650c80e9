//! Request middleware.
//!
//! Purpose: define middleware for request lifecycle concerns: trace
//! identifiers and the access log.

pub mod access_log;
pub mod trace;

pub use access_log::AccessLog;
pub use trace::Trace;
