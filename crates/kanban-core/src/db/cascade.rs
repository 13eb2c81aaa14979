//! Deletion of boards, columns and tasks together with everything beneath
//! them.
//!
//! Children are removed explicitly rather than through `ON DELETE CASCADE`
//! so that databases opened without foreign key enforcement are cleaned up
//! the same way.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, OptionalExtension};

use super::{
    board_queries::{board_exists, touch_board},
    column_queries::column_placement,
    ordering::{self, Scope},
    rows,
};
use crate::error::{DatabaseResultExt, Result};

const DELETE_BOARD_TASKS_SQL: &str = "DELETE FROM tasks WHERE board_id = ?1 OR column_id IN (SELECT id FROM board_columns WHERE board_id = ?1)";
const DELETE_BOARD_COLUMNS_SQL: &str = "DELETE FROM board_columns WHERE board_id = ?1";
const DELETE_BOARD_SQL: &str = "DELETE FROM boards WHERE id = ?1";
const DELETE_COLUMN_TASKS_SQL: &str = "DELETE FROM tasks WHERE column_id = ?1";
const DELETE_COLUMN_SQL: &str = "DELETE FROM board_columns WHERE id = ?1";
const SELECT_TASK_SLOT_SQL: &str = "SELECT board_id, column_id, task_order FROM tasks WHERE id = ?1";
const DELETE_TASK_SQL: &str = "DELETE FROM tasks WHERE id = ?1";

impl super::Database {
    /// Deletes a board with all of its columns and tasks. Returns `false`
    /// when the board does not exist.
    pub fn delete_board(&mut self, id: u64) -> Result<bool> {
        let tx = self.begin()?;

        if !board_exists(&tx, id)? {
            return Ok(false);
        }

        let tasks = tx
            .execute(DELETE_BOARD_TASKS_SQL, params![id as i64])
            .db_context("Failed to delete board tasks")?;
        let columns = tx
            .execute(DELETE_BOARD_COLUMNS_SQL, params![id as i64])
            .db_context("Failed to delete board columns")?;
        tx.execute(DELETE_BOARD_SQL, params![id as i64])
            .db_context("Failed to delete board")?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Deleted board {id} with {columns} columns and {tasks} tasks");

        Ok(true)
    }

    /// Deletes a column and its tasks, then closes the gap in the board's
    /// column order. Returns `false` when the column does not exist.
    pub fn delete_column(&mut self, id: u64) -> Result<bool> {
        let tx = self.begin()?;

        let Some((board_id, order)) = column_placement(&tx, id)? else {
            return Ok(false);
        };

        let tasks = tx
            .execute(DELETE_COLUMN_TASKS_SQL, params![id as i64])
            .db_context("Failed to delete column tasks")?;
        tx.execute(DELETE_COLUMN_SQL, params![id as i64])
            .db_context("Failed to delete column")?;

        let scope = Scope::Board(board_id);
        ordering::close_gap(&tx, scope, order, None)?;
        touch_board(&tx, board_id, &Timestamp::now().to_string())?;
        ordering::verify_dense(&tx, scope)?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Deleted column {id} from board {board_id} with {tasks} tasks");

        Ok(true)
    }

    /// Deletes a task and closes the gap in its column's order. Returns
    /// `false` when the task does not exist.
    pub fn delete_task(&mut self, id: u64) -> Result<bool> {
        let tx = self.begin()?;

        let slot: Option<(i64, i64, u32)> = tx
            .query_row(SELECT_TASK_SLOT_SQL, params![id as i64], |row| {
                Ok((row.get(0)?, row.get(1)?, rows::order(row, 2)?))
            })
            .optional()
            .db_context("Failed to query task")?;
        let Some((board_id, column_id, order)) = slot else {
            return Ok(false);
        };

        tx.execute(DELETE_TASK_SQL, params![id as i64])
            .db_context("Failed to delete task")?;

        let scope = Scope::Column(column_id as u64);
        ordering::close_gap(&tx, scope, order, None)?;
        touch_board(&tx, board_id as u64, &Timestamp::now().to_string())?;
        ordering::verify_unique(&tx, scope)?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Deleted task {id} from column {column_id}");

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        db::Database,
        models::{BoardDraft, TaskDraft},
    };

    fn board(db: &mut Database, title: &str) -> (u64, Vec<u64>) {
        let board = db
            .create_board(&BoardDraft {
                title: title.to_string(),
                description: None,
                owner_id: None,
            })
            .unwrap();
        (board.id, board.columns.iter().map(|c| c.id).collect())
    }

    #[test]
    fn test_delete_board_removes_only_its_children() {
        let mut db = Database::in_memory().unwrap();
        let (doomed, doomed_columns) = board(&mut db, "Doomed");
        let (kept, kept_columns) = board(&mut db, "Kept");
        db.create_task(&TaskDraft::new(doomed_columns[0], "Gone"))
            .unwrap();
        db.create_task(&TaskDraft::new(kept_columns[1], "Stays"))
            .unwrap();

        assert!(db.delete_board(doomed).unwrap());
        assert!(!db.delete_board(doomed).unwrap());

        assert!(db.get_board(doomed).unwrap().is_none());
        assert!(db.list_columns(doomed).unwrap().is_empty());
        assert!(db.list_tasks_by_board(doomed).unwrap().is_empty());
        assert_eq!(db.list_tasks_by_board(kept).unwrap().len(), 1);
    }

    #[test]
    fn test_delete_column_cascades_and_closes_gap() {
        let mut db = Database::in_memory().unwrap();
        let (board_id, columns) = board(&mut db, "Board");
        let task = db
            .create_task(&TaskDraft::new(columns[1], "In flight"))
            .unwrap()
            .unwrap();

        assert!(db.delete_column(columns[1]).unwrap());
        assert!(db.get_task(task.id).unwrap().is_none());

        let remaining: Vec<(String, u32)> = db
            .list_columns(board_id)
            .unwrap()
            .into_iter()
            .map(|c| (c.title, c.order))
            .collect();
        assert_eq!(
            remaining,
            vec![("To Do".to_string(), 0), ("Done".to_string(), 1)]
        );
        assert!(!db.delete_column(columns[1]).unwrap());
    }

    #[test]
    fn test_delete_task_closes_gap() {
        let mut db = Database::in_memory().unwrap();
        let (_, columns) = board(&mut db, "Board");
        let ids: Vec<u64> = ["A", "B", "C"]
            .into_iter()
            .map(|title| {
                db.create_task(&TaskDraft::new(columns[0], title))
                    .unwrap()
                    .unwrap()
                    .id
            })
            .collect();

        assert!(db.delete_task(ids[1]).unwrap());
        assert!(!db.delete_task(ids[1]).unwrap());

        let orders: Vec<(u64, u32)> = db
            .list_tasks_by_column(columns[0])
            .unwrap()
            .into_iter()
            .map(|t| (t.id, t.order))
            .collect();
        assert_eq!(orders, vec![(ids[0], 1), (ids[2], 2)]);
    }
}
