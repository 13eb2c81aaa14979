//! Integration tests comparing CLI output with the core Display types
//!
//! The CLI and the MCP server both print core display wrappers, so a record
//! created directly through the service must render the same way the CLI
//! shows it.

use std::process::Command;

use kanban_core::{
    display::CreateResult,
    params::{CreateBoard, CreateTask, Id, MoveTask},
    Kanban, KanbanBuilder,
};
use tempfile::TempDir;

/// Helper function to create a test service with temporary database
async fn create_test_kanban() -> (Kanban, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");

    let kanban = KanbanBuilder::new()
        .with_database_path(db_path)
        .build()
        .await
        .expect("Failed to create service");

    (kanban, temp_dir)
}

/// Run a CLI command and capture its output
fn run_cli_command(db_path: &str, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_kb"));
    cmd.arg("--no-color").arg("--database-file").arg(db_path);

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

fn db_arg(kanban: &Kanban) -> String {
    kanban
        .database_path()
        .to_str()
        .expect("Non UTF-8 temp path")
        .to_string()
}

#[tokio::test]
async fn test_board_display_consistency() {
    let (kanban, _temp_dir) = create_test_kanban().await;
    let db = db_arg(&kanban);

    let cli_output = run_cli_command(
        &db,
        &["board", "create", "Via CLI", "--description", "Shared board"],
    );

    let board = kanban
        .create_board(&CreateBoard {
            title: Some("Direct".to_string()),
            description: Some("Shared board".to_string()),
            owner_id: None,
        })
        .await
        .expect("Failed to create board");
    let direct_output = CreateResult::new(board).to_string();

    for output in [&cli_output, &direct_output] {
        assert!(output.contains("Created board with ID:"));
        assert!(output.contains("Shared board"));
        assert!(output.contains("## 0. To Do"));
        assert!(output.contains("## 2. Done"));
    }
}

#[tokio::test]
async fn test_show_board_matches_display() {
    let (kanban, _temp_dir) = create_test_kanban().await;
    let db = db_arg(&kanban);

    let board = kanban
        .create_board(&CreateBoard {
            title: Some("Shown".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to create board");
    let todo = board.column_titled("To Do").map(|c| c.id).unwrap();
    kanban
        .create_task(&CreateTask {
            column_id: todo,
            title: Some("Render me".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to create task");

    let stored = kanban
        .get_board(&Id { id: board.id })
        .await
        .expect("Failed to get board")
        .expect("Board should exist");

    let cli_output = run_cli_command(&db, &["board", "show", &board.id.to_string()]);
    assert_eq!(cli_output, stored.to_string());
}

#[tokio::test]
async fn test_cli_and_service_share_ordering() {
    let (kanban, _temp_dir) = create_test_kanban().await;
    let db = db_arg(&kanban);

    let board = kanban
        .create_board(&CreateBoard::default())
        .await
        .expect("Failed to create board");
    let todo = board.column_titled("To Do").map(|c| c.id).unwrap();
    let done = board.column_titled("Done").map(|c| c.id).unwrap();

    run_cli_command(&db, &["task", "add", &todo.to_string(), "From CLI"]);
    let direct = kanban
        .create_task(&CreateTask {
            column_id: todo,
            title: Some("From service".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to create task")
        .expect("Column should exist");
    assert_eq!(direct.order, 2);

    kanban
        .move_task(&MoveTask {
            id: direct.id,
            column_id: done,
            order: 1,
        })
        .await
        .expect("Failed to move task");

    let listing = run_cli_command(&db, &["task", "list", "--board", &board.id.to_string()]);
    let cli_pos = listing.find("From CLI").expect("CLI task missing");
    let moved_pos = listing.find("From service").expect("Moved task missing");
    assert!(cli_pos < moved_pos, "To Do tasks list before Done tasks");
    assert!(listing.contains(&format!("- Position: 1 in column {done}")));
}
