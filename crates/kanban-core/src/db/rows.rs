//! Row decoding shared by the query modules.

use std::str::FromStr;

use jiff::Timestamp;
use rusqlite::{types::Type, Row};

use crate::models::{Board, BoardSummary, Column, Task, TaskPriority, TaskStatus};

pub(super) const BOARD_FIELDS: &str = "id, title, description, owner_id, created_at, updated_at";

pub(super) const COLUMN_FIELDS: &str =
    "id, board_id, title, column_order, color, created_at, updated_at";

pub(super) const TASK_FIELDS: &str = "t.id, t.board_id, t.column_id, t.title, t.description, \
     t.status, t.priority, t.task_order, t.owner, t.created_at, t.updated_at";

fn timestamp(row: &Row, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn text_enum<T: FromStr<Err = String>>(row: &Row, idx: usize) -> rusqlite::Result<T> {
    let value: String = row.get(idx)?;
    value
        .parse::<T>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, e.into()))
}

fn id(row: &Row, idx: usize) -> rusqlite::Result<u64> {
    Ok(row.get::<_, i64>(idx)? as u64)
}

/// Reads an order or count column, failing on values outside `u32`.
pub(super) fn order(row: &Row, idx: usize) -> rusqlite::Result<u32> {
    let value: i64 = row.get(idx)?;
    u32::try_from(value)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Integer, Box::new(e)))
}

/// Decodes a row selected with [`BOARD_FIELDS`].
pub(super) fn board_from_row(row: &Row) -> rusqlite::Result<Board> {
    Ok(Board {
        id: id(row, 0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        owner_id: row.get(3)?,
        created_at: timestamp(row, 4)?,
        updated_at: timestamp(row, 5)?,
        columns: Vec::new(),
    })
}

/// Decodes a row of the `board_summaries` view.
pub(super) fn board_summary_from_row(row: &Row) -> rusqlite::Result<BoardSummary> {
    Ok(BoardSummary {
        id: id(row, 0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        owner_id: row.get(3)?,
        created_at: timestamp(row, 4)?,
        updated_at: timestamp(row, 5)?,
        column_count: order(row, 6)?,
        task_count: order(row, 7)?,
        done_count: order(row, 8)?,
    })
}

/// Decodes a row selected with [`COLUMN_FIELDS`].
pub(super) fn column_from_row(row: &Row) -> rusqlite::Result<Column> {
    Ok(Column {
        id: id(row, 0)?,
        board_id: id(row, 1)?,
        title: row.get(2)?,
        order: order(row, 3)?,
        color: row.get(4)?,
        created_at: timestamp(row, 5)?,
        updated_at: timestamp(row, 6)?,
        tasks: Vec::new(),
    })
}

/// Decodes a row selected with [`TASK_FIELDS`].
pub(super) fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: id(row, 0)?,
        board_id: id(row, 1)?,
        column_id: id(row, 2)?,
        title: row.get(3)?,
        description: row.get(4)?,
        status: text_enum::<TaskStatus>(row, 5)?,
        priority: text_enum::<TaskPriority>(row, 6)?,
        order: order(row, 7)?,
        owner: row.get(8)?,
        created_at: timestamp(row, 9)?,
        updated_at: timestamp(row, 10)?,
    })
}
