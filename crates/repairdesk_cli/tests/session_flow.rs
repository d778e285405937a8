use chrono::NaiveDate;
use repairdesk_cli::{Console, Session};
use repairdesk_core::db::open_db_in_memory;
use repairdesk_core::{RepairDraft, RepairRequest, RepairService, SqliteRepairRepository};
use rusqlite::Connection;
use std::io::Cursor;

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn run_session(conn: &Connection, script: &str) -> String {
    let repo = SqliteRepairRepository::try_new(conn).unwrap();
    let console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let mut session = Session::new(RepairService::new(repo), console).with_today(fixed_today);
    session.run().unwrap();
    String::from_utf8(session.into_console().into_output()).unwrap()
}

fn stored(conn: &Connection) -> Vec<RepairRequest> {
    RepairService::new(SqliteRepairRepository::try_new(conn).unwrap())
        .list_repairs()
        .unwrap()
}

fn seed_radio(conn: &Connection) {
    let service = RepairService::new(SqliteRepairRepository::try_new(conn).unwrap());
    let draft = RepairDraft {
        received_date: Some(fixed_today()),
        received_dsrr_number: "DSRR-100".to_string(),
        depot: "DepotA".to_string(),
        item: "Radio".to_string(),
        make: "Acme".to_string(),
        serial_number: "SN123".to_string(),
        problem_description: "No power".to_string(),
        ..RepairDraft::default()
    };
    service.submit_repair(&draft).unwrap();
}

#[test]
fn add_then_view_lists_the_new_request() {
    let conn = open_db_in_memory().unwrap();
    // received date keeps the default, solved/send fields stay blank
    let script = "1\n\nDSRR-100\nDepotA\nRadio\nAcme\nSN123\nNo power\n\n\n\ny\n4\n5\n";

    let output = run_session(&conn, script);

    assert!(output.starts_with("Repair Management System\n"));
    assert!(output.contains("Add Repair Request"));
    assert!(output.contains("[ok] Repair request submitted successfully!"));
    assert!(output.contains("View Repair Requests"));
    assert!(output.contains("Received DSRR Number"));
    assert!(output.contains("DSRR-100"));

    let rows = stored(&conn);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[0].fields.received_date, fixed_today());
    assert_eq!(rows[0].fields.depot, "DepotA");
    assert_eq!(rows[0].fields.problem_description, "No power");
    assert_eq!(rows[0].fields.solved_description, "");
    assert_eq!(rows[0].fields.send_date, None);
}

#[test]
fn add_with_blank_mandatory_field_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let script = "1\n2024-01-01\nDSRR-100\n\nRadio\nAcme\nSN123\n\n\n\n\ny\n5\n";

    let output = run_session(&conn, script);

    assert!(output.contains("[error] Please fill in all mandatory fields."));
    assert!(output.contains("Missing: Depot"));
    assert!(stored(&conn).is_empty());
}

#[test]
fn add_with_cleared_received_date_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let script = "1\n-\nDSRR-100\nDepotA\nRadio\nAcme\nSN123\n\n\n\n\ny\n5\n";

    let output = run_session(&conn, script);

    assert!(output.contains("Missing: Received Date"));
    assert!(stored(&conn).is_empty());
}

#[test]
fn declined_submit_leaves_store_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let script = "1\n\nDSRR-100\nDepotA\nRadio\nAcme\nSN123\n\n\n\n\nn\n5\n";

    let output = run_session(&conn, script);

    assert!(output.contains("[info] Submission cancelled."));
    assert!(stored(&conn).is_empty());
}

#[test]
fn view_on_empty_store_shows_no_records_state() {
    let conn = open_db_in_memory().unwrap();

    let output = run_session(&conn, "4\n5\n");

    assert!(output.contains("[info] No repair requests found."));
    assert!(!output.contains("Serial Number"));
}

#[test]
fn update_prefills_and_replaces_fields() {
    let conn = open_db_in_memory().unwrap();
    seed_radio(&conn);
    let script = "2\n1\n\n\nDepotZ\n\n\n\n-\n\n2024-02-01\nDSRR-200\ny\n5\n";

    let output = run_session(&conn, script);

    assert!(output.contains("Depot [DepotA]: "));
    assert!(output.contains("[ok] Repair request updated successfully!"));

    let rows = stored(&conn);
    assert_eq!(rows.len(), 1);
    let fields = &rows[0].fields;
    assert_eq!(fields.received_date, fixed_today());
    assert_eq!(fields.received_dsrr_number, "DSRR-100");
    assert_eq!(fields.depot, "DepotZ");
    assert_eq!(fields.problem_description, "");
    assert_eq!(fields.send_date, NaiveDate::from_ymd_opt(2024, 2, 1));
    assert_eq!(fields.send_dsrr_number, "DSRR-200");
}

#[test]
fn update_allows_blanking_mandatory_fields() {
    let conn = open_db_in_memory().unwrap();
    seed_radio(&conn);
    let script = "2\n1\n\n-\n\n\n\n\n\n\n\n\ny\n5\n";

    run_session(&conn, script);

    assert_eq!(stored(&conn)[0].fields.received_dsrr_number, "");
}

#[test]
fn update_on_empty_store_shows_no_records_state() {
    let conn = open_db_in_memory().unwrap();

    let output = run_session(&conn, "2\n5\n");

    assert!(output.contains("[info] No repair requests found."));
}

#[test]
fn update_with_unknown_id_reports_lookup_error() {
    let conn = open_db_in_memory().unwrap();
    seed_radio(&conn);
    let before = stored(&conn);

    let output = run_session(&conn, "2\n99\n5\n");

    assert!(output
        .contains("[error] Invalid request ID. Please select a valid repair request to update."));
    assert!(!output.contains("Depot [DepotA]: "));
    assert_eq!(stored(&conn), before);
}

#[test]
fn update_with_non_numeric_id_reports_lookup_error() {
    let conn = open_db_in_memory().unwrap();
    seed_radio(&conn);

    let output = run_session(&conn, "2\nfirst\n5\n");

    assert!(output
        .contains("[error] Invalid request ID. Please select a valid repair request to update."));
}

#[test]
fn declined_update_leaves_store_unchanged() {
    let conn = open_db_in_memory().unwrap();
    seed_radio(&conn);
    let before = stored(&conn);
    let script = "2\n1\n\n\nDepotZ\n\n\n\n\n\n\n\nn\n5\n";

    let output = run_session(&conn, script);

    assert!(output.contains("[info] Update cancelled."));
    assert!(!output.contains("[ok] Repair request updated successfully!"));
    assert_eq!(stored(&conn), before);
}

#[test]
fn update_keeps_text_as_typed_and_escaped_dash() {
    let conn = open_db_in_memory().unwrap();
    seed_radio(&conn);
    let script = "2\n1\n\n\n\n\n\n\nNo power  after drop \n\n\n\\-\ny\n5\n";

    run_session(&conn, script);

    let fields = &stored(&conn)[0].fields;
    assert_eq!(fields.problem_description, "No power  after drop ");
    assert_eq!(fields.send_dsrr_number, "-");
}

#[test]
fn delete_shows_details_then_removes_request() {
    let conn = open_db_in_memory().unwrap();
    seed_radio(&conn);

    let output = run_session(&conn, "3\n1\ny\n5\n");

    assert!(output.contains("Details of Repair Request:"));
    assert!(output.contains("  Depot: DepotA"));
    assert!(output.contains("  Received DSRR Number: DSRR-100"));
    assert!(output.contains("[ok] Repair request deleted successfully!"));
    assert!(stored(&conn).is_empty());
}

#[test]
fn delete_with_unknown_id_reports_lookup_error() {
    let conn = open_db_in_memory().unwrap();
    seed_radio(&conn);

    let output = run_session(&conn, "3\n99\n5\n");

    assert!(output
        .contains("[error] Invalid request ID. Please select a valid repair request to delete."));
    assert_eq!(stored(&conn).len(), 1);
}

#[test]
fn delete_on_empty_store_shows_no_records_state() {
    let conn = open_db_in_memory().unwrap();

    let output = run_session(&conn, "3\n5\n");

    assert!(output.contains("[info] No repair requests found."));
    assert!(!output.contains("Details of Repair Request:"));
}

#[test]
fn declined_delete_leaves_store_unchanged() {
    let conn = open_db_in_memory().unwrap();
    seed_radio(&conn);
    let before = stored(&conn);

    let output = run_session(&conn, "3\n1\nn\n5\n");

    assert!(output.contains("Details of Repair Request:"));
    assert!(output.contains("[info] Deletion cancelled."));
    assert_eq!(stored(&conn), before);
}

#[test]
fn menu_accepts_labels_and_reprompts_on_unknown_choice() {
    let conn = open_db_in_memory().unwrap();

    let output = run_session(&conn, "9\nview repair\nexit\n");

    assert!(output.contains("[error] Unknown option"));
    assert!(output.contains("View Repair Requests"));
    assert!(output.ends_with("Goodbye.\n"));
}

#[test]
fn end_of_input_ends_session_cleanly() {
    let conn = open_db_in_memory().unwrap();

    let output = run_session(&conn, "1\nDSRR");

    assert!(output.ends_with("Goodbye.\n"));
    assert!(stored(&conn).is_empty());
}

#[test]
fn storage_error_is_shown_and_menu_returns() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO repair_requests (received_date, item) VALUES ('garbage', 'Radio');",
        [],
    )
    .unwrap();

    let output = run_session(&conn, "4\n5\n");

    assert!(output.contains("[error] Error: invalid persisted repair request data"));
    assert!(output.ends_with("Goodbye.\n"));
}
