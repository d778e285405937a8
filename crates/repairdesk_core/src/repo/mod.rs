//! Repository layer for repair request persistence.
//!
//! # Responsibility
//! - Define the data access contract used by the service layer.
//! - Isolate SQLite query details from form and session code.

pub mod repair_repo;
