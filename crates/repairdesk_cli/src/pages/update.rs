//! Update page: pre-filled full-replace edit of an existing request.
//!
//! The form starts from the row as currently stored, read by id after the
//! operator picks it.

use super::{prompt_record, FORM_HINT, NO_RECORDS};
use crate::console::Console;
use crate::error::UiResult;
use log::{info, warn};
use repairdesk_core::{RepairDraft, RepairRepository, RepairService};
use std::io::{BufRead, Write};

/// Lets the operator pick a request, edit every field and save it.
///
/// Mandatory fields are not re-checked here.
pub fn run<R, In, Out>(service: &RepairService<R>, console: &mut Console<In, Out>) -> UiResult<()>
where
    R: RepairRepository,
    In: BufRead,
    Out: Write,
{
    let requests = service.list_repairs()?;
    if requests.is_empty() {
        return console.info(NO_RECORDS);
    }

    let ids: Vec<_> = requests.iter().map(|request| request.id).collect();
    let selected = console.select_id("Select a repair request to update", &ids)?;
    let request = match selected {
        Some(id) => service.get_repair(id)?,
        None => None,
    };
    let Some(request) = request else {
        warn!("event=page_update module=cli status=lookup_failed");
        return console
            .error("Invalid request ID. Please select a valid repair request to update.");
    };

    console.line(FORM_HINT)?;
    let draft = prompt_record(console, &RepairDraft::from(&request.fields), false)?;
    let fields = draft.into_fields_unchecked(request.fields.received_date);

    if !console.confirm("Update")? {
        info!("event=page_update module=cli status=cancelled id={}", request.id);
        return console.info("Update cancelled.");
    }

    service.update_repair(request.id, &fields)?;
    console.success("Repair request updated successfully!")
}
