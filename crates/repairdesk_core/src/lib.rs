//! Core persistence and use-case logic for the repair desk.
//! The form layer talks to storage only through this crate.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::repair::{
    MandatoryField, RepairDraft, RepairFields, RepairRequest, RepairRequestId,
    RepairValidationError,
};
pub use repo::repair_repo::{RepairRepository, RepoError, RepoResult, SqliteRepairRepository};
pub use service::repair_service::{RepairService, RepairServiceError};
