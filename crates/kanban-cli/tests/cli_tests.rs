use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn kb_cmd(db_arg: &str) -> Command {
    let mut cmd = Command::cargo_bin("kb").expect("Failed to find kb binary");
    cmd.args(["--no-color", "--database-file", db_arg]);
    cmd
}

/// Runs a command that must succeed and returns its stdout.
fn run_ok(db_arg: &str, args: &[&str]) -> String {
    let output = kb_cmd(db_arg)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).expect("Invalid UTF-8")
}

/// Extracts the ID from a "Created ... with ID: N" line.
fn extract_id_from_output(output: &str) -> String {
    if let Some(start) = output.find("with ID: ") {
        let id_str = &output[start + "with ID: ".len()..];
        let end = id_str
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(id_str.len());
        return id_str[..end].to_string();
    }
    panic!("Could not extract ID from output: {output}");
}

/// Extracts the ID of the column with the given title from board output.
fn column_id(board_output: &str, title: &str) -> String {
    let marker = format!(". {title} (ID: ");
    let line = board_output
        .lines()
        .find(|l| l.starts_with("## ") && l.contains(&marker))
        .unwrap_or_else(|| panic!("No column '{title}' in output: {board_output}"));
    let start = line.find("(ID: ").expect("Missing ID") + "(ID: ".len();
    let end = line[start..].find(')').expect("Unterminated ID") + start;
    line[start..end].to_string()
}

#[test]
fn test_cli_create_board_success() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    kb_cmd(db_arg)
        .args(["board", "create", "Sprint 1", "--owner", "team-a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created board with ID: 1"))
        .stdout(predicate::str::contains("# 1. Sprint 1"))
        .stdout(predicate::str::contains("## 0. To Do"))
        .stdout(predicate::str::contains("## 1. In Progress"))
        .stdout(predicate::str::contains("## 2. Done"))
        .stdout(predicate::str::contains("- Owner: team-a"));
}

#[test]
fn test_cli_list_empty_boards() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    kb_cmd(db_arg)
        .args(["board", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No boards found."));
}

#[test]
fn test_cli_default_command_lists_boards() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    run_ok(db_arg, &["board", "create", "Listed"]);

    kb_cmd(db_arg)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Boards"))
        .stdout(predicate::str::contains("## Listed (ID: 1)"));
}

#[test]
fn test_cli_sprint_workflow() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let board_output = run_ok(db_arg, &["board", "create", "Sprint 1"]);
    let todo = column_id(&board_output, "To Do");
    let done = column_id(&board_output, "Done");

    let task_output = run_ok(db_arg, &["task", "add", &todo, "Draft roadmap"]);
    assert!(task_output.contains("Created task with ID:"));
    assert!(task_output.contains(&format!("- Position: 1 in column {todo}")));
    let task_id = extract_id_from_output(&task_output);

    kb_cmd(db_arg)
        .args(["task", "move", &task_id, &done, "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated task with ID:"))
        .stdout(predicate::str::contains(format!(
            "Moved to column {done} at position 1"
        )));

    kb_cmd(db_arg)
        .args(["task", "list", "--column", &done])
        .assert()
        .success()
        .stdout(predicate::str::contains("Draft roadmap"));

    kb_cmd(db_arg)
        .args(["task", "list", "--column", &todo])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn test_cli_show_missing_board_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    kb_cmd(db_arg)
        .args(["board", "show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Board with ID 42 not found"));
}

#[test]
fn test_cli_delete_board_requires_confirm() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    run_ok(db_arg, &["board", "create", "Doomed"]);

    kb_cmd(db_arg)
        .args(["board", "delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("confirmed"));

    kb_cmd(db_arg)
        .args(["board", "delete", "1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted board 'Doomed' (ID: 1)"));

    kb_cmd(db_arg)
        .args(["column", "list", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No columns found."));
}

#[test]
fn test_cli_column_add_and_move() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    run_ok(db_arg, &["board", "create", "Columns"]);
    let column_output = run_ok(
        db_arg,
        &["column", "add", "1", "Review", "--color", "#FF6B6B"],
    );
    assert!(column_output.contains("## 3. Review"));
    let review = extract_id_from_output(&column_output);

    run_ok(db_arg, &["column", "move", &review, "1"]);

    kb_cmd(db_arg)
        .args(["column", "list", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## 0. To Do"))
        .stdout(predicate::str::contains("## 1. Review"))
        .stdout(predicate::str::contains("## 2. In Progress"))
        .stdout(predicate::str::contains("## 3. Done"));
}

#[test]
fn test_cli_rejects_bad_color() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    run_ok(db_arg, &["board", "create", "Colors"]);

    kb_cmd(db_arg)
        .args(["column", "add", "1", "Bad", "--color", "teal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("color"));
}

#[test]
fn test_cli_update_task_status() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let board_output = run_ok(db_arg, &["board", "create", "Status"]);
    let todo = column_id(&board_output, "To Do");
    let task_id = extract_id_from_output(&run_ok(
        db_arg,
        &["task", "add", &todo, "Ship it", "--priority", "urgent"],
    ));

    kb_cmd(db_arg)
        .args(["task", "update", &task_id, "--status", "in-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated task with ID:"))
        .stdout(predicate::str::contains("In Progress"))
        .stdout(predicate::str::contains("- Priority: urgent"));
}

#[test]
fn test_cli_delete_task_closes_gap() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let board_output = run_ok(db_arg, &["board", "create", "Gaps"]);
    let todo = column_id(&board_output, "To Do");
    let first = extract_id_from_output(&run_ok(db_arg, &["task", "add", &todo, "First"]));
    let second = extract_id_from_output(&run_ok(db_arg, &["task", "add", &todo, "Second"]));

    kb_cmd(db_arg)
        .args(["task", "delete", &first])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted task 'First'"));

    kb_cmd(db_arg)
        .args(["task", "show", &second])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Position: 1"));
}

#[test]
fn test_cli_move_to_missing_column_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let board_output = run_ok(db_arg, &["board", "create", "Moves"]);
    let todo = column_id(&board_output, "To Do");
    let task_id = extract_id_from_output(&run_ok(db_arg, &["task", "add", &todo, "Stuck"]));

    kb_cmd(db_arg)
        .args(["task", "move", &task_id, "999", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("column_id"));
}

#[test]
fn test_cli_clear_task_owner() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let board_output = run_ok(db_arg, &["board", "create", "Owners"]);
    let todo = column_id(&board_output, "To Do");
    let task_id = extract_id_from_output(&run_ok(
        db_arg,
        &["task", "add", &todo, "Assigned", "--owner", "kim"],
    ));

    kb_cmd(db_arg)
        .args(["task", "show", &task_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Owner: kim"));

    kb_cmd(db_arg)
        .args(["task", "update", &task_id, "--clear-owner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated task with ID:"))
        .stdout(predicate::str::contains("Owner").not());

    kb_cmd(db_arg)
        .args(["task", "update", &task_id, "--owner", "lee", "--clear-owner"])
        .assert()
        .failure();
}
