//! Repair request use-case service.
//!
//! # Responsibility
//! - Provide the add/update/delete/view entry points used by the forms.
//! - Enforce mandatory intake fields on add, and only on add.
//!
//! # Invariants
//! - A rejected submission never reaches the repository.
//! - Log events carry identifiers and counts only, never record text.

use crate::model::repair::{
    RepairDraft, RepairFields, RepairRequest, RepairRequestId, RepairValidationError,
};
use crate::repo::repair_repo::{RepairRepository, RepoError, RepoResult};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for repair request submissions.
#[derive(Debug)]
pub enum RepairServiceError {
    /// Mandatory intake fields were left blank.
    Validation(RepairValidationError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for RepairServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepairServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepairValidationError> for RepairServiceError {
    fn from(value: RepairValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for RepairServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Repair request service over a repository implementation.
pub struct RepairService<R: RepairRepository> {
    repo: R,
}

impl<R: RepairRepository> RepairService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates an add-form draft and records it.
    ///
    /// Returns the identifier storage assigned to the new request.
    pub fn submit_repair(&self, draft: &RepairDraft) -> Result<RepairRequestId, RepairServiceError> {
        let fields = match draft.validate() {
            Ok(fields) => fields,
            Err(err) => {
                warn!(
                    "event=repair_submit module=service status=rejected missing_count={}",
                    err.missing.len()
                );
                return Err(err.into());
            }
        };

        let id = self.repo.create(&fields)?;
        info!("event=repair_submit module=service status=ok id={id}");
        Ok(id)
    }

    /// Replaces every field of an existing request.
    ///
    /// Mandatory fields are not re-checked. A missing `id` is a silent no-op
    /// reported as `false`.
    pub fn update_repair(&self, id: RepairRequestId, fields: &RepairFields) -> RepoResult<bool> {
        let matched = self.repo.update(id, fields)?;
        info!("event=repair_update module=service status=ok id={id} matched={matched}");
        Ok(matched)
    }

    /// Deletes a request; a missing `id` is a silent no-op reported as `false`.
    pub fn delete_repair(&self, id: RepairRequestId) -> RepoResult<bool> {
        let matched = self.repo.delete(id)?;
        info!("event=repair_delete module=service status=ok id={id} matched={matched}");
        Ok(matched)
    }

    pub fn list_repairs(&self) -> RepoResult<Vec<RepairRequest>> {
        self.repo.list()
    }

    pub fn get_repair(&self, id: RepairRequestId) -> RepoResult<Option<RepairRequest>> {
        self.repo.get(id)
    }
}
