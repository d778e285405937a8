//! One handler per navigation page, plus the form pieces they share.

use crate::console::Console;
use crate::error::UiResult;
use chrono::NaiveDate;
use repairdesk_core::{RepairDraft, RepairRequest};
use std::io::{BufRead, Write};

pub mod add;
pub mod delete;
pub mod update;
pub mod view;

pub(crate) const NO_RECORDS: &str = "No repair requests found.";
pub(crate) const FORM_HINT: &str =
    "Press Enter to keep a shown value, type - to clear it, or \\- to enter a dash.";

/// Column labels, in storage order.
pub(crate) const COLUMN_LABELS: [&str; 11] = [
    "ID",
    "Received Date",
    "Received DSRR Number",
    "Depot",
    "Item",
    "Make",
    "Serial Number",
    "Problem Description",
    "Solved Repair Description",
    "Send Date",
    "Send DSRR Number",
];

/// Walks the operator through every editable field, starting from `current`.
pub(crate) fn prompt_record<In: BufRead, Out: Write>(
    console: &mut Console<In, Out>,
    current: &RepairDraft,
    received_clearable: bool,
) -> UiResult<RepairDraft> {
    Ok(RepairDraft {
        received_date: console.date_input(
            COLUMN_LABELS[1],
            current.received_date,
            received_clearable,
        )?,
        received_dsrr_number: console
            .text_input(COLUMN_LABELS[2], &current.received_dsrr_number)?,
        depot: console.text_input(COLUMN_LABELS[3], &current.depot)?,
        item: console.text_input(COLUMN_LABELS[4], &current.item)?,
        make: console.text_input(COLUMN_LABELS[5], &current.make)?,
        serial_number: console.text_input(COLUMN_LABELS[6], &current.serial_number)?,
        problem_description: console
            .text_input(COLUMN_LABELS[7], &current.problem_description)?,
        solved_description: console
            .text_input(COLUMN_LABELS[8], &current.solved_description)?,
        send_date: console.date_input(COLUMN_LABELS[9], current.send_date, true)?,
        send_dsrr_number: console.text_input(COLUMN_LABELS[10], &current.send_dsrr_number)?,
    })
}

/// Cell values of one request, aligned with `COLUMN_LABELS`.
pub(crate) fn record_cells(request: &RepairRequest) -> [String; 11] {
    let fields = &request.fields;
    [
        request.id.to_string(),
        format_date(Some(fields.received_date)),
        fields.received_dsrr_number.clone(),
        fields.depot.clone(),
        fields.item.clone(),
        fields.make.clone(),
        fields.serial_number.clone(),
        fields.problem_description.clone(),
        fields.solved_description.clone(),
        format_date(fields.send_date),
        fields.send_dsrr_number.clone(),
    ]
}

pub(crate) fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|value| value.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
