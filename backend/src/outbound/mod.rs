//! Outbound adapters implementing domain ports.
//!
//! - **memory**: the owned in-memory store behind every repository port
//! - **access_log**: the file-backed request log
//!
//! Adapters translate between domain types and their storage. They contain
//! no business logic.

pub mod access_log;
pub mod memory;
