//! Column CRUD operations and repositioning.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use super::{
    board_queries::{board_exists, touch_board},
    ordering::{self, Scope},
    rows::{self, column_from_row, task_from_row, COLUMN_FIELDS, TASK_FIELDS},
};
use crate::{
    error::{DatabaseResultExt, KanbanError, Result},
    models::{Column, ColumnDraft, UpdateColumnRequest},
};

const INSERT_COLUMN_SQL: &str = "INSERT INTO board_columns (board_id, title, column_order, color, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_COLUMN_PLACEMENT_SQL: &str =
    "SELECT board_id, column_order FROM board_columns WHERE id = ?1";
const UPDATE_COLUMN_SQL: &str = "UPDATE board_columns SET title = COALESCE(?1, title), color = COALESCE(?2, color), updated_at = ?3 WHERE id = ?4";
const UPDATE_COLUMN_ORDER_SQL: &str =
    "UPDATE board_columns SET column_order = ?1, updated_at = ?2 WHERE id = ?3";

/// Board ID and order of a column, if it exists.
pub(super) fn column_placement(conn: &Connection, column_id: u64) -> Result<Option<(u64, u32)>> {
    conn.query_row(SELECT_COLUMN_PLACEMENT_SQL, params![column_id as i64], |row| {
        Ok((row.get::<_, i64>(0)? as u64, rows::order(row, 1)?))
    })
    .optional()
    .db_context("Failed to query column placement")
}

/// Inserts a column into its board at the draft's order, or at the end when
/// no order is given.
///
/// # Errors
///
/// * `KanbanError::InvalidInput` - When the order is past the end of the
///   board
pub(super) fn insert_column(conn: &Connection, draft: &ColumnDraft, now: Timestamp) -> Result<Column> {
    let scope = Scope::Board(draft.board_id);
    let order = match draft.order {
        None => ordering::next_order(conn, scope)?,
        Some(order) => {
            let count = ordering::sibling_count(conn, scope)?;
            if order > count {
                return Err(KanbanError::invalid_input("order").with_reason(format!(
                    "Column order {order} is past the end of the board ({count} columns)"
                )));
            }
            ordering::make_room(conn, scope, order, None)?;
            order
        }
    };

    let now_str = now.to_string();
    conn.execute(
        INSERT_COLUMN_SQL,
        params![
            draft.board_id as i64,
            &draft.title,
            order,
            &draft.color,
            &now_str,
            &now_str
        ],
    )
    .db_context("Failed to insert column")?;

    Ok(Column {
        id: conn.last_insert_rowid() as u64,
        board_id: draft.board_id,
        title: draft.title.clone(),
        order,
        color: draft.color.clone(),
        created_at: now,
        updated_at: now,
        tasks: Vec::new(),
    })
}

impl super::Database {
    /// Adds a column to an existing board.
    ///
    /// Returns `None` when the board does not exist. With an explicit order
    /// the columns at and after it shift right; without one the column is
    /// appended.
    pub fn create_column(&mut self, draft: &ColumnDraft) -> Result<Option<Column>> {
        let tx = self.begin()?;

        if !board_exists(&tx, draft.board_id)? {
            return Ok(None);
        }

        let now = Timestamp::now();
        let column = insert_column(&tx, draft, now)?;
        touch_board(&tx, draft.board_id, &now.to_string())?;
        ordering::verify_dense(&tx, Scope::Board(draft.board_id))?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!(
            "Created column {} on board {} at order {}",
            column.id, column.board_id, column.order
        );

        Ok(Some(column))
    }

    /// Lists a board's columns in order, without their tasks. Empty when the
    /// board does not exist.
    pub fn list_columns(&self, board_id: u64) -> Result<Vec<Column>> {
        let sql = format!(
            "SELECT {COLUMN_FIELDS} FROM board_columns WHERE board_id = ?1 ORDER BY column_order, created_at, id"
        );
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;
        let columns = stmt
            .query_map(params![board_id as i64], column_from_row)
            .db_context("Failed to query columns")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to fetch columns")?;
        Ok(columns)
    }

    /// Retrieves a column with its tasks in order.
    pub fn get_column(&self, id: u64) -> Result<Option<Column>> {
        let sql = format!("SELECT {COLUMN_FIELDS} FROM board_columns WHERE id = ?1");
        let column = self
            .connection
            .query_row(&sql, params![id as i64], column_from_row)
            .optional()
            .db_context("Failed to query column")?;

        let Some(mut column) = column else {
            return Ok(None);
        };

        let task_sql = format!(
            "SELECT {TASK_FIELDS} FROM tasks t WHERE t.column_id = ?1 ORDER BY t.task_order, t.created_at, t.id"
        );
        let mut stmt = self
            .connection
            .prepare(&task_sql)
            .db_context("Failed to prepare task query")?;
        column.tasks = stmt
            .query_map(params![id as i64], task_from_row)
            .db_context("Failed to query tasks")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to fetch tasks")?;

        Ok(Some(column))
    }

    /// Changes a column's title or color. Returns `None` when the column does
    /// not exist.
    pub fn update_column(
        &mut self,
        id: u64,
        request: &UpdateColumnRequest,
    ) -> Result<Option<Column>> {
        if request.is_empty() {
            return self.get_column(id);
        }

        let tx = self.begin()?;

        let Some((board_id, _)) = column_placement(&tx, id)? else {
            return Ok(None);
        };

        let now_str = Timestamp::now().to_string();
        tx.execute(
            UPDATE_COLUMN_SQL,
            params![
                request.title.as_deref(),
                request.color.as_deref(),
                &now_str,
                id as i64
            ],
        )
        .db_context("Failed to update column")?;
        touch_board(&tx, board_id, &now_str)?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Updated column {id}");

        self.get_column(id)
    }

    /// Moves a column to another position within its board. The columns in
    /// between shift to keep the board's orders at `0..n-1`.
    ///
    /// Returns `None` when the column does not exist.
    ///
    /// # Errors
    ///
    /// * `KanbanError::InvalidInput` - When `order` is not below the board's
    ///   column count
    pub fn move_column(&mut self, id: u64, order: u32) -> Result<Option<Column>> {
        let tx = self.begin()?;

        let Some((board_id, current)) = column_placement(&tx, id)? else {
            return Ok(None);
        };

        let scope = Scope::Board(board_id);
        let count = ordering::sibling_count(&tx, scope)?;
        if order >= count {
            return Err(KanbanError::invalid_input("order").with_reason(format!(
                "Column order {order} is out of range for a board with {count} columns"
            )));
        }

        if order != current {
            let now_str = Timestamp::now().to_string();
            ordering::close_gap(&tx, scope, current, Some(id))?;
            ordering::make_room(&tx, scope, order, Some(id))?;
            tx.execute(UPDATE_COLUMN_ORDER_SQL, params![order, &now_str, id as i64])
                .db_context("Failed to update column order")?;
            touch_board(&tx, board_id, &now_str)?;
            ordering::verify_dense(&tx, scope)?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Moved column {id} from {current} to {order} on board {board_id}");

        self.get_column(id)
    }
}
