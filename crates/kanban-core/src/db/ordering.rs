//! Sibling ordering for columns within a board and tasks within a column.
//!
//! Columns are numbered densely from 0 and tasks from 1. All functions take a
//! connection that is expected to be inside an IMMEDIATE transaction; they
//! read and shift sibling orders without committing anything themselves.
//!
//! Siblings are always read ascending by order, with ties broken by creation
//! time and then ID.

use log::debug;
use rusqlite::{params, Connection};

use super::rows;
use crate::{
    error::{DatabaseResultExt, KanbanError, Result},
    models::MAX_ORDER,
};

/// The parent whose children share an order sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Columns of a board
    Board(u64),
    /// Tasks of a column
    Column(u64),
}

/// SQL for one kind of scope. Every statement binds the scope ID as `?1`.
struct ScopeSql {
    count: &'static str,
    max: &'static str,
    occupied: &'static str,
    shift_up: &'static str,
    shift_down: &'static str,
    siblings: &'static str,
    set_order: &'static str,
}

const BOARD_SCOPE_SQL: ScopeSql = ScopeSql {
    count: "SELECT COUNT(*) FROM board_columns WHERE board_id = ?1",
    max: "SELECT MAX(column_order) FROM board_columns WHERE board_id = ?1",
    occupied: "SELECT EXISTS(SELECT 1 FROM board_columns WHERE board_id = ?1 AND column_order = ?2 AND id != ?3)",
    shift_up: "UPDATE board_columns SET column_order = column_order + 1 WHERE board_id = ?1 AND column_order >= ?2 AND id != ?3",
    shift_down: "UPDATE board_columns SET column_order = column_order - 1 WHERE board_id = ?1 AND column_order > ?2 AND id != ?3",
    siblings: "SELECT id, column_order FROM board_columns WHERE board_id = ?1 ORDER BY column_order, created_at, id",
    set_order: "UPDATE board_columns SET column_order = ?2 WHERE board_id = ?1 AND id = ?3",
};

const COLUMN_SCOPE_SQL: ScopeSql = ScopeSql {
    count: "SELECT COUNT(*) FROM tasks WHERE column_id = ?1",
    max: "SELECT MAX(task_order) FROM tasks WHERE column_id = ?1",
    occupied: "SELECT EXISTS(SELECT 1 FROM tasks WHERE column_id = ?1 AND task_order = ?2 AND id != ?3)",
    shift_up: "UPDATE tasks SET task_order = task_order + 1 WHERE column_id = ?1 AND task_order >= ?2 AND id != ?3",
    shift_down: "UPDATE tasks SET task_order = task_order - 1 WHERE column_id = ?1 AND task_order > ?2 AND id != ?3",
    siblings: "SELECT id, task_order FROM tasks WHERE column_id = ?1 ORDER BY task_order, created_at, id",
    set_order: "UPDATE tasks SET task_order = ?2 WHERE column_id = ?1 AND id = ?3",
};

/// ID value meaning "no sibling excluded". Store IDs start at 1.
const NO_EXCLUSION: i64 = 0;

impl Scope {
    /// First order value in this scope.
    pub fn base(self) -> u32 {
        match self {
            Scope::Board(_) => 0,
            Scope::Column(_) => 1,
        }
    }

    fn id(self) -> i64 {
        match self {
            Scope::Board(id) | Scope::Column(id) => id as i64,
        }
    }

    fn sql(self) -> &'static ScopeSql {
        match self {
            Scope::Board(_) => &BOARD_SCOPE_SQL,
            Scope::Column(_) => &COLUMN_SCOPE_SQL,
        }
    }
}

fn exclusion(except: Option<u64>) -> i64 {
    except.map_or(NO_EXCLUSION, |id| id as i64)
}

fn order_limit_error(scope: Scope, reason: String) -> KanbanError {
    KanbanError::invalid_input("order")
        .with_reason(format!("{reason}; {scope:?} can hold orders up to {MAX_ORDER}"))
}

/// Rejects an explicit order below the scope's base or above [`MAX_ORDER`].
pub fn check_order(scope: Scope, order: u32) -> Result<()> {
    if order < scope.base() {
        return Err(order_limit_error(
            scope,
            format!("Order {order} is below the first position {}", scope.base()),
        ));
    }
    if order > MAX_ORDER {
        return Err(order_limit_error(scope, format!("Order {order} is too high")));
    }
    Ok(())
}

/// Number of children in the scope.
pub fn sibling_count(conn: &Connection, scope: Scope) -> Result<u32> {
    conn.query_row(scope.sql().count, params![scope.id()], |row| {
        rows::order(row, 0)
    })
    .db_context("Failed to count siblings")
}

fn max_order(conn: &Connection, scope: Scope) -> Result<Option<i64>> {
    conn.query_row(scope.sql().max, params![scope.id()], |row| row.get(0))
        .db_context("Failed to read highest sibling order")
}

/// Order for a child appended to the scope: one past the highest existing
/// order, or the base when the scope is empty. Never collides with an
/// existing sibling even when the sequence has gaps.
///
/// # Errors
///
/// * `KanbanError::InvalidInput` - When the highest order is already
///   [`MAX_ORDER`]
pub fn next_order(conn: &Connection, scope: Scope) -> Result<u32> {
    let Some(max) = max_order(conn, scope)? else {
        return Ok(scope.base());
    };
    u32::try_from(max)
        .ok()
        .and_then(|max| max.checked_add(1))
        .filter(|&next| next <= MAX_ORDER)
        .ok_or_else(|| {
            order_limit_error(scope, format!("No position left after order {max}"))
        })
}

/// Frees `order` for a child about to be placed there. When a sibling other
/// than `except` holds it, that sibling and everything after it shift up by
/// one; otherwise nothing moves.
///
/// # Errors
///
/// * `KanbanError::InvalidInput` - When shifting would push a sibling past
///   [`MAX_ORDER`]
pub fn make_room(conn: &Connection, scope: Scope, order: u32, except: Option<u64>) -> Result<()> {
    let sql = scope.sql();
    let except = exclusion(except);
    let occupied: bool = conn
        .query_row(sql.occupied, params![scope.id(), order, except], |row| {
            row.get(0)
        })
        .db_context("Failed to check sibling order")?;

    if occupied {
        if max_order(conn, scope)?.is_some_and(|max| max >= i64::from(MAX_ORDER)) {
            return Err(order_limit_error(
                scope,
                format!("Making room at order {order} would shift a sibling past the last position"),
            ));
        }
        let shifted = conn
            .execute(sql.shift_up, params![scope.id(), order, except])
            .db_context("Failed to shift siblings up")?;
        debug!("{scope:?}: shifted {shifted} siblings up from {order}");
    }
    Ok(())
}

/// Closes the gap left at `order` by shifting every later sibling down by
/// one.
pub fn close_gap(conn: &Connection, scope: Scope, order: u32, except: Option<u64>) -> Result<()> {
    let shifted = conn
        .execute(
            scope.sql().shift_down,
            params![scope.id(), order, exclusion(except)],
        )
        .db_context("Failed to shift siblings down")?;
    if shifted > 0 {
        debug!("{scope:?}: shifted {shifted} siblings down after {order}");
    }
    Ok(())
}

/// Sibling IDs and orders in display order.
pub fn siblings(conn: &Connection, scope: Scope) -> Result<Vec<(u64, u32)>> {
    let mut stmt = conn
        .prepare(scope.sql().siblings)
        .db_context("Failed to prepare sibling query")?;
    let rows = stmt
        .query_map(params![scope.id()], |row| {
            Ok((row.get::<_, i64>(0)? as u64, rows::order(row, 1)?))
        })
        .db_context("Failed to query siblings")?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .db_context("Failed to fetch siblings")
}

/// Renumbers the scope densely from its base, keeping the current display
/// order. Returns how many children changed position.
pub fn resequence(conn: &Connection, scope: Scope) -> Result<usize> {
    let mut changed = 0;
    for (position, (id, order)) in siblings(conn, scope)?.into_iter().enumerate() {
        let wanted = scope.base() + position as u32;
        if order != wanted {
            conn.execute(scope.sql().set_order, params![scope.id(), wanted, id as i64])
                .db_context("Failed to renumber sibling")?;
            changed += 1;
        }
    }
    if changed > 0 {
        debug!("{scope:?}: renumbered {changed} siblings");
    }
    Ok(changed)
}

/// Checks that the scope's orders are exactly `base..base + n`.
pub fn verify_dense(conn: &Connection, scope: Scope) -> Result<()> {
    let orders: Vec<u32> = siblings(conn, scope)?.into_iter().map(|(_, o)| o).collect();
    let dense = orders
        .iter()
        .enumerate()
        .all(|(position, &order)| order == scope.base() + position as u32);
    if dense {
        Ok(())
    } else {
        Err(KanbanError::Integrity {
            message: format!("{scope:?} orders are not dense: {orders:?}"),
        })
    }
}

/// Checks that no two children of the scope share an order.
pub fn verify_unique(conn: &Connection, scope: Scope) -> Result<()> {
    let orders: Vec<u32> = siblings(conn, scope)?.into_iter().map(|(_, o)| o).collect();
    match orders.windows(2).find(|pair| pair[0] == pair[1]) {
        None => Ok(()),
        Some(pair) => Err(KanbanError::Integrity {
            message: format!("{scope:?} has more than one child at order {}", pair[0]),
        }),
    }
}
