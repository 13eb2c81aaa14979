//! Database schema initialization, versioning and repair.

use log::{info, warn};
use rusqlite::Connection;

use super::ordering::{self, Scope};
use crate::error::{DatabaseResultExt, KanbanError, Result};

/// Schema version written to `PRAGMA user_version`.
pub const SCHEMA_VERSION: i64 = 1;

const DELETE_ORPHAN_COLUMNS_SQL: &str =
    "DELETE FROM board_columns WHERE board_id NOT IN (SELECT id FROM boards)";
const DELETE_ORPHAN_TASKS_SQL: &str =
    "DELETE FROM tasks WHERE column_id NOT IN (SELECT id FROM board_columns)";
const COUNT_MISPLACED_TASKS_SQL: &str = "SELECT COUNT(*) FROM tasks t JOIN board_columns c ON c.id = t.column_id WHERE t.board_id != c.board_id";
const FIX_MISPLACED_TASKS_SQL: &str = "UPDATE tasks SET board_id = (SELECT c.board_id FROM board_columns c WHERE c.id = tasks.column_id) WHERE board_id != (SELECT c.board_id FROM board_columns c WHERE c.id = tasks.column_id)";
const COUNT_ORPHANS_SQL: &str = "SELECT (SELECT COUNT(*) FROM board_columns WHERE board_id NOT IN (SELECT id FROM boards)) + (SELECT COUNT(*) FROM tasks WHERE column_id NOT IN (SELECT id FROM board_columns))";
const SELECT_SPARSE_BOARDS_SQL: &str = "SELECT board_id FROM board_columns GROUP BY board_id HAVING MAX(column_order) + 1 != COUNT(*) OR MIN(column_order) != 0";

impl super::Database {
    /// Applies the embedded schema, records the schema version and repairs
    /// structural damage left by older or foreign writers.
    pub(super) fn initialize_schema(&mut self) -> Result<()> {
        let version: i64 = self
            .connection
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .db_context("Failed to read schema version")?;

        if version > SCHEMA_VERSION {
            return Err(KanbanError::Configuration {
                message: format!(
                    "Database schema version {version} is newer than supported version {SCHEMA_VERSION}"
                ),
            });
        }

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        if version < SCHEMA_VERSION {
            self.connection
                .execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION}"))
                .db_context("Failed to record schema version")?;
            info!("Initialized database schema version {SCHEMA_VERSION}");
        }

        if self.needs_repair()? {
            self.repair()?;
        }

        Ok(())
    }

    /// Read-only check for anything [`Self::repair`] would change.
    fn needs_repair(&self) -> Result<bool> {
        let conn = &self.connection;
        let orphans: i64 = conn
            .query_row(COUNT_ORPHANS_SQL, [], |row| row.get(0))
            .db_context("Failed to count orphaned rows")?;
        let misplaced: i64 = conn
            .query_row(COUNT_MISPLACED_TASKS_SQL, [], |row| row.get(0))
            .db_context("Failed to count misplaced tasks")?;
        let sparse = sparse_boards(conn)?;
        Ok(orphans > 0 || misplaced > 0 || !sparse.is_empty())
    }

    /// Drops orphaned columns and tasks, re-derives every task's board from
    /// its column and renumbers boards whose column orders are not dense.
    fn repair(&mut self) -> Result<()> {
        let tx = self.begin()?;

        let columns = tx
            .execute(DELETE_ORPHAN_COLUMNS_SQL, [])
            .db_context("Failed to delete orphaned columns")?;
        let tasks = tx
            .execute(DELETE_ORPHAN_TASKS_SQL, [])
            .db_context("Failed to delete orphaned tasks")?;
        if columns + tasks > 0 {
            warn!("Removed {columns} orphaned columns and {tasks} orphaned tasks");
        }

        let misplaced = tx
            .execute(FIX_MISPLACED_TASKS_SQL, [])
            .db_context("Failed to fix task boards")?;
        if misplaced > 0 {
            warn!("Corrected the board of {misplaced} tasks to match their columns");
        }

        for board_id in sparse_boards(&tx)? {
            let changed = ordering::resequence(&tx, Scope::Board(board_id))?;
            warn!("Renumbered {changed} columns on board {board_id}");
        }

        tx.commit().db_context("Failed to commit repair")
    }
}

fn sparse_boards(conn: &Connection) -> Result<Vec<u64>> {
    let mut stmt = conn
        .prepare(SELECT_SPARSE_BOARDS_SQL)
        .db_context("Failed to prepare column density query")?;
    let ids = stmt
        .query_map([], |row| Ok(row.get::<_, i64>(0)? as u64))
        .db_context("Failed to query column density")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("Failed to fetch column density")?;
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use tempfile::TempDir;

    use super::SCHEMA_VERSION;
    use crate::{db::Database, models::BoardDraft, KanbanError};

    const TS: &str = "2024-01-01T00:00:00Z";

    #[test]
    fn test_records_schema_version() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kanban.db");
        Database::new(&path).unwrap();

        let conn = Connection::open(&path).unwrap();
        let version: i64 = conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn test_rejects_newer_schema() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kanban.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch("PRAGMA user_version = 99")
            .unwrap();

        let err = Database::new(&path).err().unwrap();
        assert!(matches!(err, KanbanError::Configuration { .. }));
    }

    #[test]
    fn test_repairs_damage_on_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kanban.db");
        let (first, second) = {
            let mut db = Database::new(&path).unwrap();
            let draft = BoardDraft {
                title: "Board".to_string(),
                description: None,
                owner_id: None,
            };
            (db.create_board(&draft).unwrap(), db.create_board(&draft).unwrap())
        };

        // Damage the file the way a writer without foreign keys could
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(&format!(
            "PRAGMA foreign_keys = OFF;
             INSERT INTO tasks (board_id, column_id, title, task_order, created_at, updated_at)
                 VALUES ({wrong}, {column}, 'Misplaced', 1, '{TS}', '{TS}');
             INSERT INTO tasks (board_id, column_id, title, task_order, created_at, updated_at)
                 VALUES ({wrong}, 9999, 'Orphan', 1, '{TS}', '{TS}');
             DELETE FROM board_columns WHERE id = {middle};",
            wrong = second.id,
            column = first.columns[0].id,
            middle = first.columns[1].id,
        ))
        .unwrap();
        drop(conn);

        let db = Database::new(&path).unwrap();
        let board = db.get_board(first.id).unwrap().unwrap();
        let orders: Vec<u32> = board.columns.iter().map(|c| c.order).collect();
        assert_eq!(orders, vec![0, 1]);
        assert_eq!(board.columns[0].tasks.len(), 1);
        assert_eq!(board.columns[0].tasks[0].board_id, first.id);
        assert!(db.list_tasks_by_board(second.id).unwrap().is_empty());
    }
}
