//! Schema migrations for the repair request store.
//!
//! # Responsibility
//! - Keep the ordered list of schema steps for `repair_requests`.
//! - Bring any opened database up to the latest known version.
//!
//! # Invariants
//! - Step versions are strictly increasing.
//! - `PRAGMA user_version` mirrors the last applied step.
//! - Table creation uses `IF NOT EXISTS`, so a file created by an earlier
//!   tool with the same columns is adopted; step 2 then rebuilds that table
//!   with `AUTOINCREMENT` so identifiers are never handed out twice.

use crate::db::{DbError, DbResult};
use log::{debug, info};
use rusqlite::{Connection, OptionalExtension};

#[derive(Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
    /// Decides whether `sql` runs; the version is recorded either way.
    needed: Option<fn(&Connection) -> DbResult<bool>>,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        sql: include_str!("0001_init.sql"),
        needed: None,
    },
    Migration {
        version: 2,
        sql: include_str!("0002_autoincrement_ids.sql"),
        needed: Some(ids_may_be_reused),
    },
];

/// Returns the latest schema version this binary knows how to create.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Reads the schema version currently recorded in the database.
pub fn current_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

/// Applies every step newer than the recorded schema version in one
/// transaction.
///
/// # Errors
/// - `DbError::UnsupportedSchemaVersion` when the file was written by a newer
///   binary.
/// - `DbError::Sqlite` when a step fails; nothing is applied in that case.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let recorded = current_version(conn)?;
    let latest = latest_version();

    if recorded > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: recorded,
            latest_supported: latest,
        });
    }
    if recorded == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for step in MIGRATIONS.iter().filter(|step| step.version > recorded) {
        let run = match step.needed {
            Some(needed) => needed(&tx)?,
            None => true,
        };
        if run {
            tx.execute_batch(step.sql)?;
        }
        tx.execute_batch(&format!("PRAGMA user_version = {};", step.version))?;
        debug!(
            "event=db_migrate module=db status=ok version={} applied={}",
            step.version, run
        );
    }
    tx.commit()?;

    Ok(())
}

/// True when `repair_requests` was declared without `AUTOINCREMENT`, which
/// lets SQLite hand a deleted highest id to the next insert.
fn ids_may_be_reused(conn: &Connection) -> DbResult<bool> {
    let ddl: Option<String> = conn
        .query_row(
            "SELECT sql FROM sqlite_master WHERE type = 'table' AND name = 'repair_requests';",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let reusable = ddl.is_some_and(|sql| !sql.to_ascii_uppercase().contains("AUTOINCREMENT"));
    if reusable {
        info!("event=db_migrate module=db status=start action=rebuild_autoincrement");
    }
    Ok(reusable)
}
