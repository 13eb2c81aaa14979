#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;

    use crate::{
        models::{
            Board, BoardDraft, BoardSummary, Column, ColumnDraft, Task, TaskDraft, TaskFilter,
            TaskPriority, TaskStatus, UpdateBoardRequest, UpdateColumnRequest, UpdateTaskRequest,
            MAX_ORDER,
        },
        params, KanbanError,
    };

    fn create_test_task(id: u64, column_id: u64, status: TaskStatus) -> Task {
        Task {
            id,
            board_id: 789,
            column_id,
            title: format!("Task {id}"),
            description: Some("Task description".to_string()),
            status,
            priority: TaskPriority::High,
            order: 1,
            owner: Some("sam".to_string()),
            created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
            updated_at: Timestamp::from_second(1641081600).unwrap(), // 2022-01-02 00:00:00 UTC
        }
    }

    fn create_test_column(id: u64, title: &str, order: u32, tasks: Vec<Task>) -> Column {
        Column {
            id,
            board_id: 789,
            title: title.to_string(),
            order,
            color: "#4ECDC4".to_string(),
            created_at: Timestamp::from_second(1640995200).unwrap(),
            updated_at: Timestamp::from_second(1641081600).unwrap(),
            tasks,
        }
    }

    fn create_test_board() -> Board {
        Board {
            id: 789,
            title: "Sprint 1".to_string(),
            description: Some("Two week sprint".to_string()),
            owner_id: Some("alice".to_string()),
            created_at: Timestamp::from_second(1640995200).unwrap(),
            updated_at: Timestamp::from_second(1641081600).unwrap(),
            columns: vec![
                create_test_column(
                    1,
                    "To Do",
                    0,
                    vec![create_test_task(10, 1, TaskStatus::Todo)],
                ),
                create_test_column(
                    2,
                    "In Progress",
                    1,
                    vec![create_test_task(11, 2, TaskStatus::InProgress)],
                ),
                create_test_column(3, "Done", 2, vec![create_test_task(12, 3, TaskStatus::Done)]),
            ],
        }
    }

    #[test]
    fn test_board_display_nests_columns_and_tasks() {
        let output = create_test_board().to_string();

        assert!(output.contains("# 789. Sprint 1"));
        assert!(output.contains("- Owner: alice"));
        assert!(output.contains("- Created: "));
        assert!(output.contains("Two week sprint"));
        assert!(output.contains("## 0. To Do (ID: 1)"));
        assert!(output.contains("## 2. Done (ID: 3)"));
        assert!(output.contains("### 11. Task 11 (➤ In Progress)"));

        let todo = output.find("## 0. To Do").unwrap();
        let done = output.find("## 2. Done").unwrap();
        assert!(todo < done);
    }

    #[test]
    fn test_board_display_without_columns() {
        let mut board = create_test_board();
        board.columns.clear();
        board.owner_id = None;

        let output = board.to_string();
        assert!(output.contains("No columns on this board."));
        assert!(!output.contains("- Owner:"));
    }

    #[test]
    fn test_task_display() {
        let output = create_test_task(5, 2, TaskStatus::Done).to_string();

        assert!(output.contains("### 5. Task 5 (✓ Done)"));
        assert!(output.contains("- Position: 1 in column 2 (board 789)"));
        assert!(output.contains("- Priority: high"));
        assert!(output.contains("- Owner: sam"));
        assert!(output.contains("Task description"));
    }

    #[test]
    fn test_board_summary_from_board() {
        let board = create_test_board();
        let summary = BoardSummary::from(&board);

        assert_eq!(summary.id, board.id);
        assert_eq!(summary.title, board.title);
        assert_eq!(summary.owner_id, board.owner_id);
        assert_eq!(summary.column_count, 3);
        assert_eq!(summary.task_count, 3);
        assert_eq!(summary.done_count, 1);
        assert_eq!(board.task_count(), 3);
    }

    #[test]
    fn test_board_summary_display() {
        let summary = BoardSummary::from(&create_test_board());
        let output = summary.to_string();

        assert!(output.contains("## Sprint 1 (ID: 789) (1/3)"));
        assert!(output.contains("- **Description**: Two week sprint"));
        assert!(output.contains("- **Columns**: 3"));
        assert!(output.ends_with("\n\n"));

        let mut empty = summary.clone();
        empty.task_count = 0;
        empty.done_count = 0;
        assert!(!empty.to_string().contains("(0/0)"));
    }

    #[test]
    fn test_status_round_trips_through_strings() {
        for status in [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done] {
            assert_eq!(status.as_str().parse::<TaskStatus>(), Ok(status));
        }
        assert_eq!("In-Progress".parse::<TaskStatus>(), Ok(TaskStatus::InProgress));
        assert!("blocked".parse::<TaskStatus>().is_err());
        assert!("critical".parse::<TaskPriority>().is_err());
        assert!(TaskPriority::Urgent > TaskPriority::Low);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let json = serde_json::to_string(&TaskPriority::Urgent).unwrap();
        assert_eq!(json, "\"urgent\"");
    }

    #[test]
    fn test_board_draft_applies_defaults() {
        let draft = BoardDraft::from(params::CreateBoard::default());
        assert_eq!(draft.title, "Untitled Board");
        assert_eq!(draft.owner_id, None);

        let draft = BoardDraft::from(params::CreateBoard {
            title: Some("   ".to_string()),
            ..Default::default()
        });
        assert_eq!(draft.title, "Untitled Board");
    }

    #[test]
    fn test_column_draft_defaults_and_color_validation() {
        let draft = ColumnDraft::try_from(params::CreateColumn {
            board_id: 1,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(draft.title, "New Column");
        assert_eq!(draft.color, "#4ECDC4");
        assert_eq!(draft.order, None);

        let err = ColumnDraft::try_from(params::CreateColumn {
            board_id: 1,
            color: Some("teal".to_string()),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, KanbanError::InvalidInput { ref field, .. } if field == "color"));

        let seed = ColumnDraft::seed(4, "Done", 2);
        assert_eq!(seed.order, Some(2));
    }

    #[test]
    fn test_task_draft_rejects_bad_input() {
        let bad_status = TaskDraft::try_from(params::CreateTask {
            column_id: 1,
            status: Some("blocked".to_string()),
            ..Default::default()
        });
        assert!(matches!(bad_status, Err(KanbanError::InvalidInput { .. })));

        let zero_order = TaskDraft::try_from(params::CreateTask {
            column_id: 1,
            order: Some(0),
            ..Default::default()
        });
        assert!(matches!(zero_order, Err(KanbanError::InvalidInput { ref field, .. }) if field == "order"));

        let huge_order = TaskDraft::try_from(params::CreateTask {
            column_id: 1,
            order: Some(u32::MAX),
            ..Default::default()
        });
        assert!(matches!(huge_order, Err(KanbanError::InvalidInput { ref field, .. }) if field == "order"));

        let last_order = TaskDraft::try_from(params::CreateTask {
            column_id: 1,
            order: Some(MAX_ORDER),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(last_order.order, Some(MAX_ORDER));
    }

    #[test]
    fn test_update_requests_reject_empty_title() {
        let err = UpdateBoardRequest::try_from(params::UpdateBoard {
            id: 1,
            title: Some(String::new()),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, KanbanError::InvalidInput { ref field, .. } if field == "title"));

        assert!(UpdateColumnRequest::try_from(params::UpdateColumn {
            id: 1,
            title: Some(" ".to_string()),
            color: None,
        })
        .is_err());

        assert!(UpdateTaskRequest::try_from(params::UpdateTask {
            id: 1,
            title: Some("".to_string()),
            ..Default::default()
        })
        .is_err());
    }

    #[test]
    fn test_update_request_emptiness() {
        let request = UpdateTaskRequest::try_from(params::UpdateTask {
            id: 1,
            ..Default::default()
        })
        .unwrap();
        assert!(request.is_empty());

        let request = UpdateTaskRequest::try_from(params::UpdateTask {
            id: 1,
            status: Some("done".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert!(!request.is_empty());
        assert_eq!(request.status, Some(TaskStatus::Done));
        assert_eq!(request.owner, None);

        let request = UpdateTaskRequest::try_from(params::UpdateTask {
            id: 1,
            clear_owner: true,
            ..Default::default()
        })
        .unwrap();
        assert!(!request.is_empty());
        assert_eq!(request.owner, Some(None));

        let err = UpdateBoardRequest::try_from(params::UpdateBoard {
            id: 1,
            description: Some("New".to_string()),
            clear_description: true,
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, KanbanError::InvalidInput { ref field, .. } if field == "description"));
    }

    #[test]
    fn test_task_filter_from_params() {
        let filter = TaskFilter::try_from(&params::ListTasks {
            board_id: Some(2),
            priority: Some("urgent".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(filter.board_id, Some(2));
        assert_eq!(filter.priority, Some(TaskPriority::Urgent));

        let err = TaskFilter::try_from(&params::ListTasks {
            status: Some("later".to_string()),
            ..Default::default()
        });
        assert!(err.is_err());
    }
}
