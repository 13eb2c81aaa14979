use kanban_core::{Kanban, KanbanBuilder};
use tempfile::TempDir;

/// Helper function to create a test service
#[allow(dead_code)]
pub async fn create_test_kanban() -> (TempDir, Kanban) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let kanban = KanbanBuilder::new()
        .with_database_path(&db_path)
        .build()
        .await
        .expect("Failed to create service");
    (temp_dir, kanban)
}
