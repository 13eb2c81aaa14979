//! Board CRUD operations and queries.

use std::collections::HashMap;

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use super::{
    column_queries::insert_column,
    ordering::{self, Scope},
    rows::{
        board_from_row, board_summary_from_row, column_from_row, task_from_row, BOARD_FIELDS,
        COLUMN_FIELDS, TASK_FIELDS,
    },
};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Board, BoardDraft, BoardSummary, ColumnDraft, UpdateBoardRequest, SEED_COLUMNS},
};

const INSERT_BOARD_SQL: &str =
    "INSERT INTO boards (title, description, owner_id, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const CHECK_BOARD_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM boards WHERE id = ?1)";
const UPDATE_BOARD_SQL: &str = "UPDATE boards SET title = COALESCE(?1, title), description = CASE WHEN ?2 THEN ?3 ELSE description END, owner_id = CASE WHEN ?4 THEN ?5 ELSE owner_id END, updated_at = ?6 WHERE id = ?7";
const TOUCH_BOARD_SQL: &str = "UPDATE boards SET updated_at = ?1 WHERE id = ?2";
const SELECT_BOARD_SUMMARIES_SQL: &str = "SELECT id, title, description, owner_id, created_at, updated_at, column_count, task_count, done_count FROM board_summaries ORDER BY created_at, id";

/// Whether a board with the given ID exists.
pub(super) fn board_exists(conn: &Connection, board_id: u64) -> Result<bool> {
    conn.query_row(CHECK_BOARD_EXISTS_SQL, params![board_id as i64], |row| {
        row.get(0)
    })
    .db_context("Failed to check board existence")
}

/// Marks a board as modified.
pub(super) fn touch_board(conn: &Connection, board_id: u64, now: &str) -> Result<()> {
    conn.execute(TOUCH_BOARD_SQL, params![now, board_id as i64])
        .db_context("Failed to update board timestamp")?;
    Ok(())
}

impl super::Database {
    /// Creates a board together with its "To Do", "In Progress" and "Done"
    /// columns. The board and its seed columns are committed together or not
    /// at all.
    pub fn create_board(&mut self, draft: &BoardDraft) -> Result<Board> {
        let tx = self.begin()?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_BOARD_SQL,
            params![
                &draft.title,
                draft.description.as_deref(),
                draft.owner_id.as_deref(),
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert board")?;

        let id = tx.last_insert_rowid() as u64;

        let columns = SEED_COLUMNS
            .iter()
            .zip(0u32..)
            .map(|(title, order)| insert_column(&tx, &ColumnDraft::seed(id, title, order), now))
            .collect::<Result<Vec<_>>>()?;

        ordering::verify_dense(&tx, Scope::Board(id))?;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Created board {id} with {} seed columns", columns.len());

        Ok(Board {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            owner_id: draft.owner_id.clone(),
            created_at: now,
            updated_at: now,
            columns,
        })
    }

    /// Retrieves a board with its columns, each carrying its tasks in order.
    pub fn get_board(&self, id: u64) -> Result<Option<Board>> {
        let sql = format!("SELECT {BOARD_FIELDS} FROM boards WHERE id = ?1");
        let board = self
            .connection
            .query_row(&sql, params![id as i64], board_from_row)
            .optional()
            .db_context("Failed to query board")?;

        match board {
            Some(mut board) => {
                self.load_columns(&mut board)?;
                Ok(Some(board))
            }
            None => Ok(None),
        }
    }

    /// Fills `board.columns` with the board's columns and their tasks.
    fn load_columns(&self, board: &mut Board) -> Result<()> {
        let column_sql = format!(
            "SELECT {COLUMN_FIELDS} FROM board_columns WHERE board_id = ?1 ORDER BY column_order, created_at, id"
        );
        let mut stmt = self
            .connection
            .prepare(&column_sql)
            .db_context("Failed to prepare column query")?;
        let mut columns = stmt
            .query_map(params![board.id as i64], column_from_row)
            .db_context("Failed to query columns")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to fetch columns")?;

        let index: HashMap<u64, usize> = columns
            .iter()
            .enumerate()
            .map(|(i, column)| (column.id, i))
            .collect();

        let task_sql = format!(
            "SELECT {TASK_FIELDS} FROM tasks t WHERE t.board_id = ?1 ORDER BY t.task_order, t.created_at, t.id"
        );
        let mut stmt = self
            .connection
            .prepare(&task_sql)
            .db_context("Failed to prepare task query")?;
        let tasks = stmt
            .query_map(params![board.id as i64], task_from_row)
            .db_context("Failed to query tasks")?;

        for task in tasks {
            let task = task.db_context("Failed to fetch task")?;
            if let Some(&i) = index.get(&task.column_id) {
                columns[i].tasks.push(task);
            }
        }

        board.columns = columns;
        Ok(())
    }

    /// Lists every board with column and task counts, oldest first.
    pub fn list_boards(&self) -> Result<Vec<BoardSummary>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_BOARD_SUMMARIES_SQL)
            .db_context("Failed to prepare query")?;
        let boards = stmt
            .query_map([], board_summary_from_row)
            .db_context("Failed to query boards")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to fetch boards")?;
        Ok(boards)
    }

    /// Applies the requested changes to a board's metadata.
    ///
    /// Returns `None` when the board does not exist. An empty request leaves
    /// the board untouched and returns it as stored.
    pub fn update_board(&mut self, id: u64, request: &UpdateBoardRequest) -> Result<Option<Board>> {
        if request.is_empty() {
            return self.get_board(id);
        }

        let tx = self.begin()?;
        let now_str = Timestamp::now().to_string();

        let updated = tx
            .execute(
                UPDATE_BOARD_SQL,
                params![
                    request.title.as_deref(),
                    request.description.is_some(),
                    request.description.as_ref().and_then(|d| d.as_deref()),
                    request.owner_id.is_some(),
                    request.owner_id.as_ref().and_then(|o| o.as_deref()),
                    &now_str,
                    id as i64
                ],
            )
            .db_context("Failed to update board")?;

        if updated == 0 {
            return Ok(None);
        }

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Updated board {id}");

        self.get_board(id)
    }
}
