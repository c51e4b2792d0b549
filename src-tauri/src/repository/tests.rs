//! Repository Integration Tests
//!
//! Exercises the SQLite repositories against an in-memory database.

use std::path::Path;

use crate::domain::{DomainError, Project, ProjectStatus, Task};
use crate::repository::{
    init_db, BoardScopedRepository, ColumnRepository, ProjectRepository, Repository,
    TaskPositioningOperations, TaskRepository,
};

struct Repos {
    projects: ProjectRepository,
    columns: ColumnRepository,
    tasks: TaskRepository,
}

async fn setup_test_db() -> Repos {
    let db_state = init_db(Path::new(":memory:")).await.expect("Failed to init test DB");
    Repos {
        projects: ProjectRepository::new(db_state.conn.clone()),
        columns: ColumnRepository::new(db_state.conn.clone()),
        tasks: TaskRepository::new(db_state.conn.clone()),
    }
}

async fn seeded_board(repos: &Repos) -> (u32, u32, u32) {
    let project = repos
        .projects
        .create(&Project::new(0, "Website", "Relaunch", "local"))
        .await
        .unwrap();
    let todo = repos.columns.create("Todo", project.id).await.unwrap();
    let done = repos.columns.create("Done", project.id).await.unwrap();
    (project.id, todo.id, done.id)
}

fn ids(tasks: &[Task]) -> Vec<u32> {
    tasks.iter().map(|t| t.id).collect()
}

#[tokio::test]
async fn test_create_and_find_project() {
    let repos = setup_test_db().await;

    let created = repos
        .projects
        .create(&Project::new(0, "Website", "Relaunch", "local"))
        .await
        .expect("Failed to create");
    assert!(created.id > 0);
    assert!(created.created_at.is_some());

    let found = repos.projects.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Website");
    assert_eq!(found.status, ProjectStatus::InProgress);
}

#[tokio::test]
async fn test_projects_list_newest_first() {
    let repos = setup_test_db().await;
    let first = repos.projects.create(&Project::new(0, "A", "a", "local")).await.unwrap();
    let second = repos.projects.create(&Project::new(0, "B", "b", "local")).await.unwrap();

    let listed: Vec<_> = repos.projects.list().await.unwrap().iter().map(|p| p.id).collect();
    assert_eq!(listed, vec![second.id, first.id]);
    assert_eq!(repos.projects.latest().await.unwrap().map(|p| p.id), Some(second.id));
}

#[tokio::test]
async fn test_update_missing_project_is_not_found() {
    let repos = setup_test_db().await;
    let ghost = Project::new(42, "Ghost", "none", "local");

    assert!(matches!(
        repos.projects.update(&ghost).await,
        Err(DomainError::NotFound(_))
    ));
    assert!(matches!(
        repos.projects.delete(42).await,
        Err(DomainError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_column_requires_existing_project() {
    let repos = setup_test_db().await;
    assert!(matches!(
        repos.columns.create("Todo", 7).await,
        Err(DomainError::NotFound(_))
    ));
    assert!(matches!(
        repos.columns.create("  ", 7).await,
        Err(DomainError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn test_tasks_append_in_sequence() {
    let repos = setup_test_db().await;
    let (board, todo, done) = seeded_board(&repos).await;

    let a = repos.tasks.create(board, todo, "a").await.unwrap();
    let b = repos.tasks.create(board, done, "b").await.unwrap();
    let c = repos.tasks.create(board, todo, "c").await.unwrap();

    let listed = repos.tasks.list_for_board(board).await.unwrap();
    assert_eq!(ids(&listed), vec![a.id, b.id, c.id]);
}

#[tokio::test]
async fn test_task_on_foreign_column_is_rejected() {
    let repos = setup_test_db().await;
    let (board, _, _) = seeded_board(&repos).await;
    let (_, other_column, _) = seeded_board(&repos).await;

    assert!(matches!(
        repos.tasks.create(board, other_column, "x").await,
        Err(DomainError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn test_update_positions_persists_batch_order() {
    let repos = setup_test_db().await;
    let (board, todo, done) = seeded_board(&repos).await;
    let a = repos.tasks.create(board, todo, "a").await.unwrap();
    let b = repos.tasks.create(board, todo, "b").await.unwrap();
    let c = repos.tasks.create(board, done, "c").await.unwrap();

    let moved = Task { column_id: done, ..a.clone() };
    let batch = vec![b.clone(), moved, c.clone()];
    let count = repos.tasks.update_positions(board, &batch).await.unwrap();
    assert_eq!(count.count, 3);

    let listed = repos.tasks.list_for_board(board).await.unwrap();
    assert_eq!(ids(&listed), vec![b.id, a.id, c.id]);
    assert_eq!(listed[1].column_id, done);
}

#[tokio::test]
async fn test_update_positions_is_all_or_nothing() {
    let repos = setup_test_db().await;
    let (board, todo, _) = seeded_board(&repos).await;
    let a = repos.tasks.create(board, todo, "a").await.unwrap();
    let b = repos.tasks.create(board, todo, "b").await.unwrap();

    let ghost = Task::new(999, "ghost", board, todo);
    let batch = vec![b.clone(), a.clone(), ghost];
    assert!(matches!(
        repos.tasks.update_positions(board, &batch).await,
        Err(DomainError::NotFound(_))
    ));

    let listed = repos.tasks.list_for_board(board).await.unwrap();
    assert_eq!(ids(&listed), vec![a.id, b.id]);
}

#[tokio::test]
async fn test_empty_batch_counts_zero() {
    let repos = setup_test_db().await;
    let (board, _, _) = seeded_board(&repos).await;
    assert_eq!(repos.tasks.update_positions(board, &[]).await.unwrap().count, 0);
}

#[tokio::test]
async fn test_delete_column_cascades_to_tasks() {
    let repos = setup_test_db().await;
    let (board, todo, done) = seeded_board(&repos).await;
    repos.tasks.create(board, todo, "a").await.unwrap();
    let kept = repos.tasks.create(board, done, "b").await.unwrap();

    let removed = repos.columns.delete(todo).await.unwrap();
    assert_eq!(removed.name, "Todo");

    let listed = repos.tasks.list_for_board(board).await.unwrap();
    assert_eq!(ids(&listed), vec![kept.id]);
}

#[tokio::test]
async fn test_delete_project_cascades_to_board() {
    let repos = setup_test_db().await;
    let (board, todo, _) = seeded_board(&repos).await;
    repos.tasks.create(board, todo, "a").await.unwrap();

    repos.projects.delete(board).await.unwrap();
    assert!(repos.columns.list_for_board(board).await.unwrap().is_empty());
    assert!(repos.tasks.list_for_board(board).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_reindex_compacts_sequence() {
    let repos = setup_test_db().await;
    let (board, todo, _) = seeded_board(&repos).await;
    let a = repos.tasks.create(board, todo, "a").await.unwrap();
    let b = repos.tasks.create(board, todo, "b").await.unwrap();
    let c = repos.tasks.create(board, todo, "c").await.unwrap();

    repos.tasks.delete(b.id).await.unwrap();
    repos.tasks.reindex_tasks(board).await.unwrap();
    let d = repos.tasks.create(board, todo, "d").await.unwrap();

    let listed = repos.tasks.list_for_board(board).await.unwrap();
    assert_eq!(ids(&listed), vec![a.id, c.id, d.id]);
}

#[tokio::test]
async fn test_update_task_content() {
    let repos = setup_test_db().await;
    let (board, todo, _) = seeded_board(&repos).await;
    let a = repos.tasks.create(board, todo, "a").await.unwrap();

    let updated = repos.tasks.update_content(a.id, "rewritten").await.unwrap();
    assert_eq!(updated.content, "rewritten");
    assert!(matches!(
        repos.tasks.update_content(999, "x").await,
        Err(DomainError::NotFound(_))
    ));
}
