//! Tauri-backed board remote
//!
//! Adapts the IPC command wrappers to the `BoardRemote` interface used by
//! the drag engine's sync helpers.

use board_core::{async_trait, BoardError, BoardRemote, BoardResult};

use crate::commands;
use crate::models::{BatchCount, Column, Task};

#[derive(Debug, Clone, Copy, Default)]
pub struct TauriRemote;

fn remote_err(e: String) -> BoardError {
    BoardError::Remote(e)
}

#[async_trait(?Send)]
impl BoardRemote for TauriRemote {
    async fn list_columns(&self, board_id: u32) -> BoardResult<Vec<Column>> {
        commands::list_columns(board_id).await.map_err(remote_err)
    }

    async fn get_column(&self, id: u32) -> BoardResult<Option<Column>> {
        commands::get_column(id).await.map_err(remote_err)
    }

    async fn create_column(&self, name: &str, board_id: u32) -> BoardResult<Column> {
        commands::create_column(name, board_id).await.map_err(remote_err)
    }

    async fn delete_column(&self, id: u32) -> BoardResult<Column> {
        commands::delete_column(id).await.map_err(remote_err)
    }

    async fn list_tasks(&self, board_id: u32) -> BoardResult<Vec<Task>> {
        commands::list_tasks(board_id).await.map_err(remote_err)
    }

    async fn get_task(&self, id: u32) -> BoardResult<Option<Task>> {
        commands::get_task(id).await.map_err(remote_err)
    }

    async fn create_task(&self, board_id: u32, column_id: u32, content: &str) -> BoardResult<Task> {
        commands::create_task(board_id, column_id, content)
            .await
            .map_err(remote_err)
    }

    async fn update_task_content(&self, task_id: u32, content: &str) -> BoardResult<Task> {
        commands::update_task_content(task_id, content)
            .await
            .map_err(remote_err)
    }

    async fn delete_task(&self, task_id: u32) -> BoardResult<Task> {
        commands::delete_task(task_id).await.map_err(remote_err)
    }

    async fn update_tasks_position(&self, board_id: u32, tasks: &[Task]) -> BoardResult<BatchCount> {
        commands::update_tasks_position(board_id, tasks)
            .await
            .map_err(remote_err)
    }
}
