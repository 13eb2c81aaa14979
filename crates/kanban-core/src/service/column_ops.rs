//! Column operations for the Kanban service.

use super::Kanban;
use crate::{
    error::Result,
    models::{Column, ColumnDraft, UpdateColumnRequest},
    params::{CreateColumn, Id, MoveColumn, UpdateColumn},
};

impl Kanban {
    /// Adds a column to a board. Returns `None` when the board does not
    /// exist.
    pub async fn create_column(&self, params: &CreateColumn) -> Result<Option<Column>> {
        let draft = ColumnDraft::try_from(params.clone())?;
        self.run_blocking(move |db| db.create_column(&draft)).await
    }

    /// Lists a board's columns in order. Empty when the board does not exist.
    pub async fn list_columns(&self, params: &Id) -> Result<Vec<Column>> {
        let board_id = params.id;
        self.run_blocking(move |db| db.list_columns(board_id)).await
    }

    /// Retrieves a column with its tasks.
    pub async fn get_column(&self, params: &Id) -> Result<Option<Column>> {
        let column_id = params.id;
        self.run_blocking(move |db| db.get_column(column_id)).await
    }

    /// Updates a column's title or color.
    pub async fn update_column(&self, params: &UpdateColumn) -> Result<Option<Column>> {
        let column_id = params.id;
        let request = UpdateColumnRequest::try_from(params.clone())?;
        self.run_blocking(move |db| db.update_column(column_id, &request))
            .await
    }

    /// Moves a column to another position on its board.
    pub async fn move_column(&self, params: &MoveColumn) -> Result<Option<Column>> {
        let (column_id, order) = (params.id, params.order);
        self.run_blocking(move |db| db.move_column(column_id, order))
            .await
    }

    /// Deletes a column and its tasks.
    pub async fn delete_column_by_id(&self, params: &Id) -> Result<bool> {
        let column_id = params.id;
        self.run_blocking(move |db| db.delete_column(column_id)).await
    }
}
