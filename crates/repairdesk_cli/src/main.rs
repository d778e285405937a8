//! `repairdesk` entry point.
//!
//! # Responsibility
//! - Start file logging and open the repair database in the working
//!   directory.
//! - Run one interactive session, then close the connection.

use log::info;
use repairdesk_cli::{Console, Session};
use repairdesk_core::db::open_db;
use repairdesk_core::{default_log_level, init_logging, RepairService, SqliteRepairRepository};
use std::error::Error;
use std::io;

const DB_FILE_NAME: &str = "repair_management.db";
const LOG_DIR_NAME: &str = "logs";

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let work_dir = std::env::current_dir()?;
    if let Err(err) = init_logging(default_log_level(), &work_dir.join(LOG_DIR_NAME)) {
        eprintln!("warning: file logging disabled: {err}");
    }

    let conn = open_db(work_dir.join(DB_FILE_NAME))?;
    {
        let repo = SqliteRepairRepository::try_new(&conn)?;
        let console = Console::new(io::stdin().lock(), io::stdout().lock());
        Session::new(RepairService::new(repo), console).run()?;
    }

    conn.close().map_err(|(_, err)| err)?;
    info!("event=db_close module=cli status=ok");
    Ok(())
}
