//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the form layer decoupled from storage details.

pub mod repair_service;
