//! Add page: intake form for a new repair request.

use super::{prompt_record, FORM_HINT};
use crate::console::Console;
use crate::error::UiResult;
use chrono::NaiveDate;
use log::info;
use repairdesk_core::{RepairDraft, RepairRepository, RepairService, RepairServiceError};
use std::io::{BufRead, Write};

/// Collects a draft, checks mandatory fields and records it on submit.
///
/// The received date starts at `today`; everything else starts blank.
pub fn run<R, In, Out>(
    service: &RepairService<R>,
    console: &mut Console<In, Out>,
    today: NaiveDate,
) -> UiResult<()>
where
    R: RepairRepository,
    In: BufRead,
    Out: Write,
{
    console.line(FORM_HINT)?;
    let initial = RepairDraft {
        received_date: Some(today),
        ..RepairDraft::default()
    };
    let draft = prompt_record(console, &initial, true)?;

    if !console.confirm("Submit")? {
        info!("event=page_add module=cli status=cancelled");
        return console.info("Submission cancelled.");
    }

    match service.submit_repair(&draft) {
        Ok(_) => console.success("Repair request submitted successfully!"),
        Err(RepairServiceError::Validation(err)) => {
            console.error("Please fill in all mandatory fields.")?;
            let missing = err
                .missing
                .iter()
                .map(|field| field.label())
                .collect::<Vec<_>>()
                .join(", ");
            console.line(format_args!("Missing: {missing}"))
        }
        Err(RepairServiceError::Repo(err)) => Err(err.into()),
    }
}
