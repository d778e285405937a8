//! Domain model for repair request tracking.
//!
//! # Responsibility
//! - Define the record shape shared by storage, services and forms.
//!
//! # Invariants
//! - Records are addressed by name, never by column position.

pub mod repair;
