//! Repair request repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/update/delete/list/get over `repair_requests`.
//! - Keep SQL and column encoding inside the persistence boundary.
//!
//! # Invariants
//! - Every statement runs in autocommit mode; nothing is buffered.
//! - Update and delete on a missing id change nothing and are not errors.
//! - Read paths reject unparseable persisted state instead of masking it.

use crate::db::migrations::{current_version, latest_version};
use crate::db::DbError;
use crate::model::repair::{RepairFields, RepairRequest, RepairRequestId};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const REPAIR_TABLE: &str = "repair_requests";
const REPAIR_COLUMNS: [&str; 11] = [
    "id",
    "received_date",
    "received_dsrr_number",
    "depot",
    "item",
    "make",
    "serial_number",
    "problem_description",
    "solved_description",
    "send_date",
    "send_dsrr_number",
];
const REPAIR_SELECT_SQL: &str = "SELECT
    id,
    received_date,
    received_dsrr_number,
    depot,
    item,
    make,
    serial_number,
    problem_description,
    solved_description,
    send_date,
    send_dsrr_number
FROM repair_requests";
const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for repair request persistence.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted repair request data: {message}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is older than required {expected_version}; open it with db::open_db"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence contract for repair requests.
pub trait RepairRepository {
    /// Inserts a new row and returns the identifier storage assigned to it.
    fn create(&self, fields: &RepairFields) -> RepoResult<RepairRequestId>;
    /// Replaces all non-identifier columns; returns whether a row matched.
    fn update(&self, id: RepairRequestId, fields: &RepairFields) -> RepoResult<bool>;
    /// Removes the row; returns whether a row matched.
    fn delete(&self, id: RepairRequestId) -> RepoResult<bool>;
    /// All rows in storage order.
    fn list(&self) -> RepoResult<Vec<RepairRequest>>;
    fn get(&self, id: RepairRequestId) -> RepoResult<Option<RepairRequest>>;
}

/// SQLite-backed repair request repository.
pub struct SqliteRepairRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRepairRepository<'conn> {
    /// Wraps a connection opened through `db::open_db*`.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations were never applied.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema does
    ///   not have the expected shape.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = latest_version();
        let actual_version = current_version(conn)?;
        if actual_version < expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let columns = table_columns(conn, REPAIR_TABLE)?;
        if columns.is_empty() {
            return Err(RepoError::MissingRequiredTable(REPAIR_TABLE));
        }
        for column in REPAIR_COLUMNS {
            if !columns.iter().any(|existing| existing == column) {
                return Err(RepoError::MissingRequiredColumn {
                    table: REPAIR_TABLE,
                    column,
                });
            }
        }

        Ok(Self { conn })
    }
}

impl RepairRepository for SqliteRepairRepository<'_> {
    fn create(&self, fields: &RepairFields) -> RepoResult<RepairRequestId> {
        self.conn.execute(
            "INSERT INTO repair_requests (
                received_date,
                received_dsrr_number,
                depot,
                item,
                make,
                serial_number,
                problem_description,
                solved_description,
                send_date,
                send_dsrr_number
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10);",
            params![
                date_to_db(fields.received_date),
                fields.received_dsrr_number.as_str(),
                fields.depot.as_str(),
                fields.item.as_str(),
                fields.make.as_str(),
                fields.serial_number.as_str(),
                fields.problem_description.as_str(),
                fields.solved_description.as_str(),
                fields.send_date.map(date_to_db),
                fields.send_dsrr_number.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, id: RepairRequestId, fields: &RepairFields) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE repair_requests
             SET
                received_date = ?1,
                received_dsrr_number = ?2,
                depot = ?3,
                item = ?4,
                make = ?5,
                serial_number = ?6,
                problem_description = ?7,
                solved_description = ?8,
                send_date = ?9,
                send_dsrr_number = ?10
             WHERE id = ?11;",
            params![
                date_to_db(fields.received_date),
                fields.received_dsrr_number.as_str(),
                fields.depot.as_str(),
                fields.item.as_str(),
                fields.make.as_str(),
                fields.serial_number.as_str(),
                fields.problem_description.as_str(),
                fields.solved_description.as_str(),
                fields.send_date.map(date_to_db),
                fields.send_dsrr_number.as_str(),
                id,
            ],
        )?;

        Ok(changed > 0)
    }

    fn delete(&self, id: RepairRequestId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM repair_requests WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }

    fn list(&self) -> RepoResult<Vec<RepairRequest>> {
        let mut stmt = self.conn.prepare(&format!("{REPAIR_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut requests = Vec::new();

        while let Some(row) = rows.next()? {
            requests.push(parse_repair_row(row)?);
        }

        Ok(requests)
    }

    fn get(&self, id: RepairRequestId) -> RepoResult<Option<RepairRequest>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REPAIR_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_repair_row(row)?));
        }

        Ok(None)
    }
}

fn table_columns(conn: &Connection, table: &str) -> RepoResult<Vec<String>> {
    let exists = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1;",
            [table],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    if exists.is_none() {
        return Ok(Vec::new());
    }

    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>("name"))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(columns)
}

fn parse_repair_row(row: &Row<'_>) -> RepoResult<RepairRequest> {
    let id: RepairRequestId = row.get("id")?;

    let received_text: Option<String> = row.get("received_date")?;
    let received_date = match received_text {
        Some(text) => parse_date(&text, id, "received_date")?,
        None => {
            return Err(RepoError::InvalidData(format!(
                "missing received_date for repair request {id}"
            )));
        }
    };

    let send_date = match row.get::<_, Option<String>>("send_date")? {
        Some(text) if !text.trim().is_empty() => Some(parse_date(&text, id, "send_date")?),
        _ => None,
    };

    Ok(RepairRequest {
        id,
        fields: RepairFields {
            received_date,
            received_dsrr_number: required_text(row, "received_dsrr_number", id)?,
            depot: required_text(row, "depot", id)?,
            item: required_text(row, "item", id)?,
            make: required_text(row, "make", id)?,
            serial_number: required_text(row, "serial_number", id)?,
            problem_description: text_or_empty(row, "problem_description")?,
            solved_description: text_or_empty(row, "solved_description")?,
            send_date,
            send_dsrr_number: text_or_empty(row, "send_dsrr_number")?,
        },
    })
}

fn required_text(row: &Row<'_>, column: &str, id: RepairRequestId) -> RepoResult<String> {
    row.get::<_, Option<String>>(column)?.ok_or_else(|| {
        RepoError::InvalidData(format!("missing {column} for repair request {id}"))
    })
}

fn text_or_empty(row: &Row<'_>, column: &str) -> RepoResult<String> {
    Ok(row.get::<_, Option<String>>(column)?.unwrap_or_default())
}

fn date_to_db(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Accepts exactly `YYYY-MM-DD`, or `YYYY-MM-DD HH:MM:SS` as some SQLite
/// front ends write into DATE columns.
fn parse_date(value: &str, id: RepairRequestId, column: &str) -> RepoResult<NaiveDate> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .or_else(|_| {
            NaiveDateTime::parse_from_str(trimmed, DATETIME_FORMAT).map(|stamp| stamp.date())
        })
        .map_err(|_| {
            RepoError::InvalidData(format!(
                "invalid date `{value}` in repair_requests.{column} for id {id}"
            ))
        })
}
