//! Board operations for the Kanban service.

use super::Kanban;
use crate::{
    error::Result,
    models::{Board, BoardDraft, BoardSummary, UpdateBoardRequest},
    params::{CreateBoard, Id, UpdateBoard},
};

impl Kanban {
    /// Creates a board seeded with "To Do", "In Progress" and "Done".
    pub async fn create_board(&self, params: &CreateBoard) -> Result<Board> {
        let draft = BoardDraft::from(params.clone());
        self.run_blocking(move |db| db.create_board(&draft)).await
    }

    /// Retrieves a board with its columns and tasks.
    pub async fn get_board(&self, params: &Id) -> Result<Option<Board>> {
        let board_id = params.id;
        self.run_blocking(move |db| db.get_board(board_id)).await
    }

    /// Lists all boards with their column and task counts.
    pub async fn list_boards(&self) -> Result<Vec<BoardSummary>> {
        self.run_blocking(|db| db.list_boards()).await
    }

    /// Updates a board's title, description or owner.
    pub async fn update_board(&self, params: &UpdateBoard) -> Result<Option<Board>> {
        let board_id = params.id;
        let request = UpdateBoardRequest::try_from(params.clone())?;
        self.run_blocking(move |db| db.update_board(board_id, &request))
            .await
    }

    /// Deletes a board with all its columns and tasks, without confirmation.
    pub async fn delete_board_by_id(&self, params: &Id) -> Result<bool> {
        let board_id = params.id;
        self.run_blocking(move |db| db.delete_board(board_id)).await
    }
}
