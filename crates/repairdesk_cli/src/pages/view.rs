//! View page: read-only table of every request.

use super::{record_cells, COLUMN_LABELS, NO_RECORDS};
use crate::console::Console;
use crate::error::UiResult;
use crate::table::render_table;
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

    let rows: Vec<Vec<String>> = requests
        .iter()
        .map(|request| record_cells(request).to_vec())
        .collect();
    for line in render_table(&COLUMN_LABELS, &rows) {
        console.line(line)?;
    }
    console.line(format_args!("{} request(s)", requests.len()))
}
