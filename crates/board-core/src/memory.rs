//! In-memory remote store for tests

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::error::{BoardError, BoardResult};
use crate::model::{BatchCount, Column, ColumnId, ProjectId, Task, TaskId};
use crate::remote::BoardRemote;

/// Single-threaded fake of the remote store with failure injection
#[derive(Debug, Default)]
pub struct InMemoryRemote {
    columns: RefCell<Vec<Column>>,
    tasks: RefCell<Vec<Task>>,
    next_id: Cell<u32>,
    fail_batch: RefCell<Option<String>>,
    batch_calls: Cell<usize>,
}

impl InMemoryRemote {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(1000),
            ..Default::default()
        }
    }

    pub fn with_board(columns: Vec<Column>, tasks: Vec<Task>) -> Self {
        let remote = Self::new();
        *remote.columns.borrow_mut() = columns;
        *remote.tasks.borrow_mut() = tasks;
        remote
    }

    /// Make the next batch update fail with `message`
    pub fn fail_next_batch(&self, message: impl Into<String>) {
        *self.fail_batch.borrow_mut() = Some(message.into());
    }

    /// Number of batch update calls received, failures included
    pub fn batch_calls(&self) -> usize {
        self.batch_calls.get()
    }

    pub fn stored_tasks(&self) -> Vec<Task> {
        self.tasks.borrow().clone()
    }

    fn allocate_id(&self) -> u32 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn column_on_board(&self, column_id: ColumnId, board_id: ProjectId) -> bool {
        self.columns
            .borrow()
            .iter()
            .any(|c| c.id == column_id && c.board_id == board_id)
    }
}

#[async_trait(?Send)]
impl BoardRemote for InMemoryRemote {
    async fn list_columns(&self, board_id: ProjectId) -> BoardResult<Vec<Column>> {
        Ok(self
            .columns
            .borrow()
            .iter()
            .filter(|c| c.board_id == board_id)
            .cloned()
            .collect())
    }

    async fn get_column(&self, id: ColumnId) -> BoardResult<Option<Column>> {
        Ok(self.columns.borrow().iter().find(|c| c.id == id).cloned())
    }

    async fn create_column(&self, name: &str, board_id: ProjectId) -> BoardResult<Column> {
        if name.trim().is_empty() {
            return Err(BoardError::InvalidInput("column name is empty".into()));
        }
        let column = Column::new(self.allocate_id(), name, board_id);
        self.columns.borrow_mut().push(column.clone());
        Ok(column)
    }

    async fn delete_column(&self, id: ColumnId) -> BoardResult<Column> {
        let mut columns = self.columns.borrow_mut();
        let index = columns
            .iter()
            .position(|c| c.id == id)
            .ok_or(BoardError::NotFound { entity: "column", id })?;
        self.tasks.borrow_mut().retain(|t| t.column_id != id);
        Ok(columns.remove(index))
    }

    async fn list_tasks(&self, board_id: ProjectId) -> BoardResult<Vec<Task>> {
        Ok(self
            .tasks
            .borrow()
            .iter()
            .filter(|t| t.board_id == board_id)
            .cloned()
            .collect())
    }

    async fn get_task(&self, id: TaskId) -> BoardResult<Option<Task>> {
        Ok(self.tasks.borrow().iter().find(|t| t.id == id).cloned())
    }

    async fn create_task(
        &self,
        board_id: ProjectId,
        column_id: ColumnId,
        content: &str,
    ) -> BoardResult<Task> {
        if !self.column_on_board(column_id, board_id) {
            return Err(BoardError::NotFound { entity: "column", id: column_id });
        }
        let task = Task::new(self.allocate_id(), content, board_id, column_id);
        self.tasks.borrow_mut().push(task.clone());
        Ok(task)
    }

    async fn update_task_content(&self, task_id: TaskId, content: &str) -> BoardResult<Task> {
        let mut tasks = self.tasks.borrow_mut();
        let task = tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or(BoardError::NotFound { entity: "task", id: task_id })?;
        task.content = content.to_string();
        Ok(task.clone())
    }

    async fn delete_task(&self, task_id: TaskId) -> BoardResult<Task> {
        let mut tasks = self.tasks.borrow_mut();
        let index = tasks
            .iter()
            .position(|t| t.id == task_id)
            .ok_or(BoardError::NotFound { entity: "task", id: task_id })?;
        Ok(tasks.remove(index))
    }

    async fn update_tasks_position(
        &self,
        board_id: ProjectId,
        tasks: &[Task],
    ) -> BoardResult<BatchCount> {
        self.batch_calls.set(self.batch_calls.get() + 1);
        if let Some(message) = self.fail_batch.borrow_mut().take() {
            return Err(BoardError::Remote(message));
        }

        let stored = self.tasks.borrow();
        for task in tasks {
            if !stored.iter().any(|t| t.id == task.id && t.board_id == board_id) {
                return Err(BoardError::NotFound { entity: "task", id: task.id });
            }
            if !self.column_on_board(task.column_id, board_id) {
                return Err(BoardError::NotFound { entity: "column", id: task.column_id });
            }
        }

        // Listed tasks take the batch order; other boards keep theirs after.
        let mut next: Vec<Task> = tasks
            .iter()
            .map(|t| Task { board_id, ..t.clone() })
            .collect();
        next.extend(
            stored
                .iter()
                .filter(|t| !tasks.iter().any(|listed| listed.id == t.id))
                .cloned(),
        );
        drop(stored);
        *self.tasks.borrow_mut() = next;

        Ok(BatchCount { count: tasks.len() })
    }
}
