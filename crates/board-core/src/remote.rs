//! Remote Store Interface
//!
//! Operations the board view needs from the structured-data service.
//! Futures are not required to be `Send` so browser IPC clients can
//! implement the trait.

use async_trait::async_trait;

use crate::error::BoardResult;
use crate::model::{BatchCount, Column, ColumnId, ProjectId, Task, TaskId};

#[async_trait(?Send)]
pub trait BoardRemote {
    /// Columns of a board in display order
    async fn list_columns(&self, board_id: ProjectId) -> BoardResult<Vec<Column>>;

    async fn get_column(&self, id: ColumnId) -> BoardResult<Option<Column>>;

    async fn create_column(&self, name: &str, board_id: ProjectId) -> BoardResult<Column>;

    /// Delete a column together with its tasks, returning the column
    async fn delete_column(&self, id: ColumnId) -> BoardResult<Column>;

    /// Tasks of a board in sequence order
    async fn list_tasks(&self, board_id: ProjectId) -> BoardResult<Vec<Task>>;

    async fn get_task(&self, id: TaskId) -> BoardResult<Option<Task>>;

    async fn create_task(
        &self,
        board_id: ProjectId,
        column_id: ColumnId,
        content: &str,
    ) -> BoardResult<Task>;

    async fn update_task_content(&self, task_id: TaskId, content: &str) -> BoardResult<Task>;

    async fn delete_task(&self, task_id: TaskId) -> BoardResult<Task>;

    /// Overwrite every listed task (keyed by id, scoped to the board) and
    /// record the sequence order
    async fn update_tasks_position(
        &self,
        board_id: ProjectId,
        tasks: &[Task],
    ) -> BoardResult<BatchCount>;
}
