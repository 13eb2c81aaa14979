//! SQLite storage for boards, columns and tasks.
//!
//! [`Database`] owns one connection and exposes the synchronous operation
//! set. Every mutating operation runs in a single IMMEDIATE transaction, so
//! concurrent writers to the same file are serialized before they read the
//! sibling orders they are about to change.
//!
//! - [`ordering`]: dense sibling positions per board and per column
//! - [`cascade`]: parent to child deletion
//! - `board_queries`, `column_queries`, `task_queries`: the facade operations

use std::{path::Path, time::Duration};

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::error::{DatabaseResultExt, Result};

pub mod board_queries;
pub mod cascade;
pub mod column_queries;
pub mod migrations;
pub mod ordering;
mod rows;
pub mod task_queries;

/// How long a writer waits for another connection's lock before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database file and brings the schema up to date,
    /// repairing any structural damage found.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut db = Self::open(path)?;
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a database file whose schema [`Database::new`] has already set
    /// up. Skips schema application and the repair scan.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        Self::configure(connection)
    }

    /// Opens a private in-memory database.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;
        let mut db = Self::configure(connection)?;
        db.initialize_schema()?;
        Ok(db)
    }

    /// Per-connection settings. Neither pragma persists in the file.
    fn configure(connection: Connection) -> Result<Self> {
        connection
            .busy_timeout(BUSY_TIMEOUT)
            .db_context("Failed to set busy timeout")?;
        connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;
        Ok(Self { connection })
    }

    /// Begins a write transaction that holds the database write lock from
    /// the start.
    fn begin(&mut self) -> Result<Transaction<'_>> {
        self.connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")
    }
}
