//! Drag-to-sync round trips against the in-memory remote.

use board_core::memory::InMemoryRemote;
use board_core::{
    commit, fetch_board, BoardError, BoardRemote, BoardState, Column, CommitPlan, DragEngine,
    DragEntity, SyncOutcome, Task,
};

const BOARD: u32 = 1;

fn remote() -> InMemoryRemote {
    InMemoryRemote::with_board(
        vec![Column::new(10, "C1", BOARD), Column::new(20, "C2", BOARD)],
        vec![
            Task::new(1, "T1", BOARD, 10),
            Task::new(2, "T2", BOARD, 10),
            Task::new(3, "T3", BOARD, 20),
        ],
    )
}

async fn loaded(remote: &InMemoryRemote) -> BoardState {
    let (tasks, columns) = fetch_board(remote, BOARD).await.unwrap();
    let mut state = BoardState::new(BOARD);
    state.replace(tasks, columns);
    state
}

fn task(state: &BoardState, id: u32) -> DragEntity {
    DragEntity::task(state.task(id).cloned().unwrap())
}

fn ids(tasks: &[Task]) -> Vec<u32> {
    tasks.iter().map(|t| t.id).collect()
}

#[tokio::test]
async fn test_cross_column_drag_persists_and_refetches() {
    let remote = remote();
    let mut state = loaded(&remote).await;
    let mut engine = DragEngine::new();

    let active = task(&state, 1);
    let over = task(&state, 3);
    engine.drag_start(Some(&active));
    engine.drag_over(&mut state, Some(&active), Some(&over));
    let plan = engine.drag_end(&state).unwrap();

    let outcome = commit(&remote, plan).await.unwrap();
    assert_eq!(outcome, SyncOutcome::Refetch { count: 3 });

    let (tasks, columns) = fetch_board(&remote, BOARD).await.unwrap();
    state.replace(tasks, columns);
    assert_eq!(ids(state.tasks().unwrap()), vec![2, 1, 3]);
    assert_eq!(state.task(1).unwrap().column_id, 20);
    assert!(!state.has_local_changes());
}

#[tokio::test]
async fn test_unchanged_sequence_issues_no_batch() {
    let remote = remote();
    let state = loaded(&remote).await;
    let mut engine = DragEngine::new();

    let active = task(&state, 2);
    engine.drag_start(Some(&active));
    let plan = engine.drag_end(&state).unwrap();
    assert_eq!(plan, CommitPlan::Unchanged);

    assert_eq!(commit(&remote, plan).await.unwrap(), SyncOutcome::Skipped);
    assert_eq!(remote.batch_calls(), 0);
}

#[tokio::test]
async fn test_empty_sequence_with_new_identity_still_syncs() {
    let remote = InMemoryRemote::with_board(vec![Column::new(10, "C1", BOARD)], Vec::new());
    let mut state = loaded(&remote).await;
    let mut engine = DragEngine::new();

    state.mutate(|tasks| Some(tasks.to_vec()));
    engine.drag_start(Some(&DragEntity::column(Column::new(10, "C1", BOARD))));
    let plan = engine.drag_end(&state).unwrap();

    assert_eq!(commit(&remote, plan).await.unwrap(), SyncOutcome::Refetch { count: 0 });
    assert_eq!(remote.batch_calls(), 1);
}

#[tokio::test]
async fn test_failed_batch_leaves_local_sequence_untouched() {
    let remote = remote();
    let mut state = loaded(&remote).await;
    let mut engine = DragEngine::new();

    let active = task(&state, 3);
    let over = task(&state, 1);
    engine.drag_start(Some(&active));
    engine.drag_over(&mut state, Some(&active), Some(&over));
    let before = state.tasks().cloned().unwrap();

    remote.fail_next_batch("connection reset");
    let plan = engine.drag_end(&state).unwrap();
    let err = commit(&remote, plan).await.unwrap_err();

    assert_eq!(err, BoardError::Remote("connection reset".into()));
    assert_eq!(state.tasks().unwrap(), &before);
    assert!(state.has_local_changes());
    // The server still has the original arrangement.
    assert_eq!(ids(&remote.stored_tasks()), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_refetch_drops_tasks_created_elsewhere_only_if_absent_on_server() {
    let remote = remote();
    let mut state = loaded(&remote).await;

    let created = remote.create_task(BOARD, 20, "T4").await.unwrap();
    state.mutate(|tasks| {
        let mut next = tasks.to_vec();
        next.push(Task::new(500, "local draft", BOARD, 10));
        Some(next)
    });

    state.replace_tasks(remote.list_tasks(BOARD).await.unwrap());
    assert_eq!(ids(state.tasks().unwrap()), vec![1, 2, 3, created.id]);
}

#[tokio::test]
async fn test_batch_with_foreign_column_is_rejected() {
    let remote = remote();
    let mut tasks = remote.list_tasks(BOARD).await.unwrap();
    tasks[0].column_id = 99;

    let err = remote.update_tasks_position(BOARD, &tasks).await.unwrap_err();
    assert_eq!(err, BoardError::NotFound { entity: "column", id: 99 });
    assert_eq!(remote.stored_tasks()[0].column_id, 10);
}
