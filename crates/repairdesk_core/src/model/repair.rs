//! Repair request domain model.
//!
//! # Responsibility
//! - Define the named-field shape of one `repair_requests` row.
//! - Check mandatory intake fields before a request is first recorded.
//!
//! # Invariants
//! - `RepairRequestId` is assigned by storage and never edited or reused.
//! - Mandatory fields are only enforced when a request is created; updates
//!   replace all fields as given.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned identifier of a repair request.
pub type RepairRequestId = i64;

/// Every column of a repair request except its identifier.
///
/// Optional text columns hold an empty string when left blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairFields {
    pub received_date: NaiveDate,
    /// DSRR number of the intake document.
    pub received_dsrr_number: String,
    /// Originating location that sent the item in.
    pub depot: String,
    pub item: String,
    pub make: String,
    pub serial_number: String,
    pub problem_description: String,
    pub solved_description: String,
    /// Date the repaired item was shipped back, if it has been.
    pub send_date: Option<NaiveDate>,
    /// DSRR number of the return shipment.
    pub send_dsrr_number: String,
}

/// One persisted repair request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairRequest {
    pub id: RepairRequestId,
    #[serde(flatten)]
    pub fields: RepairFields,
}

/// Intake fields that must be present when a request is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MandatoryField {
    ReceivedDate,
    ReceivedDsrrNumber,
    Depot,
    Item,
    Make,
    SerialNumber,
}

impl MandatoryField {
    /// Form label shown to the operator.
    pub fn label(self) -> &'static str {
        match self {
            Self::ReceivedDate => "Received Date",
            Self::ReceivedDsrrNumber => "Received DSRR Number",
            Self::Depot => "Depot",
            Self::Item => "Item",
            Self::Make => "Make",
            Self::SerialNumber => "Serial Number",
        }
    }
}

/// Raised when an add submission leaves mandatory fields blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairValidationError {
    /// Missing fields in column order; never empty.
    pub missing: Vec<MandatoryField>,
}

impl Display for RepairValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let names = self
            .missing
            .iter()
            .map(|field| field.label())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "missing mandatory fields: {names}")
    }
}

impl Error for RepairValidationError {}

/// Raw add-form input, before mandatory fields are checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepairDraft {
    pub received_date: Option<NaiveDate>,
    pub received_dsrr_number: String,
    pub depot: String,
    pub item: String,
    pub make: String,
    pub serial_number: String,
    pub problem_description: String,
    pub solved_description: String,
    pub send_date: Option<NaiveDate>,
    pub send_dsrr_number: String,
}

impl RepairDraft {
    /// Checks the six mandatory fields and builds the storable record.
    ///
    /// Whitespace-only text counts as missing. Optional fields are copied
    /// through untouched.
    pub fn validate(&self) -> Result<RepairFields, RepairValidationError> {
        let mut missing = Vec::new();
        if self.received_date.is_none() {
            missing.push(MandatoryField::ReceivedDate);
        }
        let text_checks = [
            (MandatoryField::ReceivedDsrrNumber, &self.received_dsrr_number),
            (MandatoryField::Depot, &self.depot),
            (MandatoryField::Item, &self.item),
            (MandatoryField::Make, &self.make),
            (MandatoryField::SerialNumber, &self.serial_number),
        ];
        for (field, value) in text_checks {
            if value.trim().is_empty() {
                missing.push(field);
            }
        }

        match self.received_date {
            Some(received_date) if missing.is_empty() => Ok(RepairFields {
                received_date,
                received_dsrr_number: self.received_dsrr_number.clone(),
                depot: self.depot.clone(),
                item: self.item.clone(),
                make: self.make.clone(),
                serial_number: self.serial_number.clone(),
                problem_description: self.problem_description.clone(),
                solved_description: self.solved_description.clone(),
                send_date: self.send_date,
                send_dsrr_number: self.send_dsrr_number.clone(),
            }),
            _ => Err(RepairValidationError { missing }),
        }
    }

    /// Builds the storable record without checking mandatory fields.
    ///
    /// Update submissions go through here; `fallback_received` fills the
    /// received date when the draft has none.
    pub fn into_fields_unchecked(self, fallback_received: NaiveDate) -> RepairFields {
        RepairFields {
            received_date: self.received_date.unwrap_or(fallback_received),
            received_dsrr_number: self.received_dsrr_number,
            depot: self.depot,
            item: self.item,
            make: self.make,
            serial_number: self.serial_number,
            problem_description: self.problem_description,
            solved_description: self.solved_description,
            send_date: self.send_date,
            send_dsrr_number: self.send_dsrr_number,
        }
    }
}

impl From<&RepairFields> for RepairDraft {
    fn from(fields: &RepairFields) -> Self {
        Self {
            received_date: Some(fields.received_date),
            received_dsrr_number: fields.received_dsrr_number.clone(),
            depot: fields.depot.clone(),
            item: fields.item.clone(),
            make: fields.make.clone(),
            serial_number: fields.serial_number.clone(),
            problem_description: fields.problem_description.clone(),
            solved_description: fields.solved_description.clone(),
            send_date: fields.send_date,
            send_dsrr_number: fields.send_dsrr_number.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MandatoryField, RepairDraft};
    use chrono::NaiveDate;

    fn complete_draft() -> RepairDraft {
        RepairDraft {
            received_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            received_dsrr_number: "DSRR-100".to_string(),
            depot: "DepotA".to_string(),
            item: "Radio".to_string(),
            make: "Acme".to_string(),
            serial_number: "SN123".to_string(),
            ..RepairDraft::default()
        }
    }

    #[test]
    fn complete_draft_validates_with_blank_optionals() {
        let fields = complete_draft().validate().unwrap();
        assert_eq!(fields.depot, "DepotA");
        assert_eq!(fields.problem_description, "");
        assert_eq!(fields.send_date, None);
    }

    #[test]
    fn missing_fields_are_reported_in_column_order() {
        let mut draft = complete_draft();
        draft.serial_number.clear();
        draft.received_date = None;
        draft.depot = "   ".to_string();

        let err = draft.validate().unwrap_err();
        assert_eq!(
            err.missing,
            vec![
                MandatoryField::ReceivedDate,
                MandatoryField::Depot,
                MandatoryField::SerialNumber,
            ]
        );
        assert_eq!(
            err.to_string(),
            "missing mandatory fields: Received Date, Depot, Serial Number"
        );
    }

    #[test]
    fn empty_draft_reports_all_six_fields() {
        let err = RepairDraft::default().validate().unwrap_err();
        assert_eq!(err.missing.len(), 6);
    }
}
