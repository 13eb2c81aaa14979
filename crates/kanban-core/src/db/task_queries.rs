//! Task CRUD operations, moves and column compaction.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use super::{
    board_queries::touch_board,
    column_queries::column_placement,
    ordering::{self, Scope},
    rows::{self, task_from_row, TASK_FIELDS},
};
use crate::{
    error::{DatabaseResultExt, KanbanError, Result},
    models::{Task, TaskDraft, TaskFilter, UpdateTaskRequest},
};

const INSERT_TASK_SQL: &str = "INSERT INTO tasks (board_id, column_id, title, description, status, priority, task_order, owner, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const SELECT_TASK_PLACEMENT_SQL: &str =
    "SELECT board_id, column_id, task_order FROM tasks WHERE id = ?1";
const SELECT_TASK_SCOPE_SQL: &str = "SELECT t.board_id, c.board_id FROM tasks t JOIN board_columns c ON c.id = t.column_id WHERE t.id = ?1";
const UPDATE_TASK_SQL: &str = "UPDATE tasks SET title = COALESCE(?1, title), description = CASE WHEN ?2 THEN ?3 ELSE description END, status = COALESCE(?4, status), priority = COALESCE(?5, priority), owner = CASE WHEN ?6 THEN ?7 ELSE owner END, updated_at = ?8 WHERE id = ?9";
const UPDATE_TASK_PLACEMENT_SQL: &str = "UPDATE tasks SET board_id = ?1, column_id = ?2, task_order = ?3, updated_at = ?4 WHERE id = ?5";

/// Where a task currently sits.
struct TaskPlacement {
    board_id: u64,
    column_id: u64,
    order: u32,
}

fn task_placement(conn: &Connection, task_id: u64) -> Result<Option<TaskPlacement>> {
    conn.query_row(SELECT_TASK_PLACEMENT_SQL, params![task_id as i64], |row| {
        Ok(TaskPlacement {
            board_id: row.get::<_, i64>(0)? as u64,
            column_id: row.get::<_, i64>(1)? as u64,
            order: rows::order(row, 2)?,
        })
    })
    .optional()
    .db_context("Failed to query task placement")
}

/// Checks that a task's board is its column's board.
pub(super) fn verify_task_scope(conn: &Connection, task_id: u64) -> Result<()> {
    let boards: Option<(i64, i64)> = conn
        .query_row(SELECT_TASK_SCOPE_SQL, params![task_id as i64], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()
        .db_context("Failed to check task board")?;

    match boards {
        Some((task_board, column_board)) if task_board == column_board => Ok(()),
        Some((task_board, column_board)) => Err(KanbanError::Integrity {
            message: format!(
                "task {task_id} is on board {task_board} but its column is on board {column_board}"
            ),
        }),
        None => Err(KanbanError::Integrity {
            message: format!("task {task_id} does not belong to an existing column"),
        }),
    }
}

impl super::Database {
    /// Creates a task in an existing column.
    ///
    /// The task's board is taken from the column. Without an explicit order
    /// the task is appended after the column's highest order; with one, the
    /// order is used as given and any task already holding it shifts down
    /// along with everything after it.
    ///
    /// Returns `None` when the column does not exist.
    ///
    /// # Errors
    ///
    /// * `KanbanError::InvalidReference` - When the draft names a board other
    ///   than the column's
    /// * `KanbanError::InvalidInput` - When the order is out of range, or the
    ///   column has no position left
    pub fn create_task(&mut self, draft: &TaskDraft) -> Result<Option<Task>> {
        let tx = self.begin()?;

        let Some((board_id, _)) = column_placement(&tx, draft.column_id)? else {
            return Ok(None);
        };

        if let Some(expected) = draft.expected_board_id {
            if expected != board_id {
                return Err(KanbanError::invalid_reference("board_id", expected));
            }
        }

        let scope = Scope::Column(draft.column_id);
        let order = match draft.order {
            None => ordering::next_order(&tx, scope)?,
            Some(order) => {
                ordering::check_order(scope, order)?;
                ordering::make_room(&tx, scope, order, None)?;
                order
            }
        };

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_TASK_SQL,
            params![
                board_id as i64,
                draft.column_id as i64,
                &draft.title,
                draft.description.as_deref(),
                draft.status.as_str(),
                draft.priority.as_str(),
                order,
                draft.owner.as_deref(),
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert task")?;

        let id = tx.last_insert_rowid() as u64;

        touch_board(&tx, board_id, &now_str)?;
        verify_task_scope(&tx, id)?;
        ordering::verify_unique(&tx, scope)?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!(
            "Created task {id} in column {} at order {order}",
            draft.column_id
        );

        Ok(Some(Task {
            id,
            board_id,
            column_id: draft.column_id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status,
            priority: draft.priority,
            order,
            owner: draft.owner.clone(),
            created_at: now,
            updated_at: now,
        }))
    }

    /// Retrieves a single task.
    pub fn get_task(&self, id: u64) -> Result<Option<Task>> {
        let sql = format!("SELECT {TASK_FIELDS} FROM tasks t WHERE t.id = ?1");
        self.connection
            .query_row(&sql, params![id as i64], task_from_row)
            .optional()
            .db_context("Failed to query task")
    }

    /// Lists tasks matching the filter, grouped by board and then by column
    /// position, each column's tasks in order.
    pub fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let mut query = format!(
            "SELECT {TASK_FIELDS} FROM tasks t JOIN board_columns c ON c.id = t.column_id"
        );

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(board_id) = filter.board_id {
            conditions.push("t.board_id = ?");
            params_vec.push(Box::new(board_id as i64));
        }
        if let Some(column_id) = filter.column_id {
            conditions.push("t.column_id = ?");
            params_vec.push(Box::new(column_id as i64));
        }
        if let Some(status) = filter.status {
            conditions.push("t.status = ?");
            params_vec.push(Box::new(status.as_str()));
        }
        if let Some(priority) = filter.priority {
            conditions.push("t.priority = ?");
            params_vec.push(Box::new(priority.as_str()));
        }
        if let Some(ref owner) = filter.owner {
            conditions.push("t.owner = ?");
            params_vec.push(Box::new(owner.clone()));
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }
        query.push_str(" ORDER BY t.board_id, c.column_order, t.task_order, t.created_at, t.id");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;
        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let tasks = stmt
            .query_map(&params_refs[..], task_from_row)
            .db_context("Failed to query tasks")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to fetch tasks")?;
        Ok(tasks)
    }

    /// Lists every task on a board.
    pub fn list_tasks_by_board(&self, board_id: u64) -> Result<Vec<Task>> {
        self.list_tasks(&TaskFilter::for_board(board_id))
    }

    /// Lists a column's tasks in order.
    pub fn list_tasks_by_column(&self, column_id: u64) -> Result<Vec<Task>> {
        self.list_tasks(&TaskFilter::for_column(column_id))
    }

    /// Applies field changes to a task. Returns `None` when the task does not
    /// exist.
    pub fn update_task(&mut self, id: u64, request: &UpdateTaskRequest) -> Result<Option<Task>> {
        if request.is_empty() {
            return self.get_task(id);
        }

        let tx = self.begin()?;

        let Some(placement) = task_placement(&tx, id)? else {
            return Ok(None);
        };

        let now_str = Timestamp::now().to_string();
        tx.execute(
            UPDATE_TASK_SQL,
            params![
                request.title.as_deref(),
                request.description.is_some(),
                request.description.as_ref().and_then(|d| d.as_deref()),
                request.status.map(|s| s.as_str()),
                request.priority.map(|p| p.as_str()),
                request.owner.is_some(),
                request.owner.as_ref().and_then(|o| o.as_deref()),
                &now_str,
                id as i64
            ],
        )
        .db_context("Failed to update task")?;
        touch_board(&tx, placement.board_id, &now_str)?;
        verify_task_scope(&tx, id)?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Updated task {id}");

        self.get_task(id)
    }

    /// Moves a task to `order` in `column_id`, which may be on another board.
    ///
    /// The source column closes the gap the task leaves, the target column
    /// makes room at `order`, and the task's board is re-read from the target
    /// column.
    ///
    /// Returns `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// * `KanbanError::InvalidReference` - When the target column does not
    ///   exist
    /// * `KanbanError::InvalidInput` - When `order` is 0 or above
    ///   [`MAX_ORDER`](crate::models::MAX_ORDER)
    pub fn move_task(&mut self, id: u64, column_id: u64, order: u32) -> Result<Option<Task>> {
        ordering::check_order(Scope::Column(column_id), order)?;

        let tx = self.begin()?;

        let Some(source) = task_placement(&tx, id)? else {
            return Ok(None);
        };
        let Some((target_board, _)) = column_placement(&tx, column_id)? else {
            return Err(KanbanError::invalid_reference("column_id", column_id));
        };

        let source_scope = Scope::Column(source.column_id);
        let target_scope = Scope::Column(column_id);
        let now_str = Timestamp::now().to_string();

        ordering::close_gap(&tx, source_scope, source.order, Some(id))?;
        ordering::make_room(&tx, target_scope, order, Some(id))?;
        tx.execute(
            UPDATE_TASK_PLACEMENT_SQL,
            params![
                target_board as i64,
                column_id as i64,
                order,
                &now_str,
                id as i64
            ],
        )
        .db_context("Failed to update task placement")?;

        touch_board(&tx, target_board, &now_str)?;
        if source.board_id != target_board {
            touch_board(&tx, source.board_id, &now_str)?;
        }

        verify_task_scope(&tx, id)?;
        ordering::verify_unique(&tx, target_scope)?;
        if source_scope != target_scope {
            ordering::verify_unique(&tx, source_scope)?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        debug!(
            "Moved task {id} from column {} to column {column_id} at order {order}",
            source.column_id
        );

        self.get_task(id)
    }

    /// Renumbers a column's tasks to `1..n`, keeping their current order.
    ///
    /// Returns the column's tasks afterwards, or `None` when the column does
    /// not exist.
    pub fn compact_column(&mut self, column_id: u64) -> Result<Option<Vec<Task>>> {
        let tx = self.begin()?;

        let Some((board_id, _)) = column_placement(&tx, column_id)? else {
            return Ok(None);
        };

        let scope = Scope::Column(column_id);
        let changed = ordering::resequence(&tx, scope)?;
        if changed > 0 {
            touch_board(&tx, board_id, &Timestamp::now().to_string())?;
        }
        ordering::verify_dense(&tx, scope)?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Compacted column {column_id}: {changed} tasks renumbered");

        self.list_tasks_by_column(column_id).map(Some)
    }
}
