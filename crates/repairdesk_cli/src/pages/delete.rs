//! Delete page.

use super::{record_cells, COLUMN_LABELS, NO_RECORDS};
use crate::console::Console;
use crate::error::UiResult;
use log::{info, warn};
use repairdesk_core::{RepairRepository, RepairService};
use std::io::{BufRead, Write};

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
    let selected = console.select_id("Select a repair request to delete", &ids)?;
    let Some(request) = selected.and_then(|id| requests.iter().find(|r| r.id == id)) else {
        warn!("event=page_delete module=cli status=lookup_failed");
        return console
            .error("Invalid request ID. Please select a valid repair request to delete.");
    };

    console.line("Details of Repair Request:")?;
    for (label, value) in COLUMN_LABELS.iter().zip(record_cells(request)) {
        console.line(format_args!("  {label}: {value}"))?;
    }

    if !console.confirm("Delete")? {
        info!("event=page_delete module=cli status=cancelled id={}", request.id);
        return console.info("Deletion cancelled.");
    }

    service.delete_repair(request.id)?;
    console.success("Repair request deleted successfully!")
}
