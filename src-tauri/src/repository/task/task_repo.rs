//! Task Repository - Core CRUD Operations

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::super::column_repo::find_column;
use super::super::db::{not_initialized, SharedConnection};
use super::super::traits::BoardScopedRepository;
use super::task_positioning::next_seq;
use crate::domain::{DomainError, DomainResult, Task};

pub(super) const SELECT_TASK: &str = "SELECT id, content, board_id, column_id FROM tasks";

/// SQLite implementation of the task repository
pub struct TaskRepository {
    pub(super) conn: SharedConnection,
}

impl TaskRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Append a task to the end of the board's sequence
    pub async fn create(&self, board_id: u32, column_id: u32, content: &str) -> DomainResult<Task> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        match find_column(conn, column_id)? {
            Some(column) if column.board_id == board_id => {}
            Some(_) => {
                return Err(DomainError::InvalidInput(format!(
                    "Column {} does not belong to project {}",
                    column_id, board_id
                )))
            }
            None => return Err(DomainError::NotFound(format!("Column {} not found", column_id))),
        }

        let seq = next_seq(conn, board_id)?;
        let now = chrono::Utc::now().timestamp_millis();
        conn.execute(
            "INSERT INTO tasks (content, board_id, column_id, seq, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
            params![content, board_id, column_id, seq, now, now],
        )?;
        Ok(Task::new(conn.last_insert_rowid() as u32, content, board_id, column_id))
    }

    pub async fn update_content(&self, id: u32, content: &str) -> DomainResult<Task> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let changed = conn.execute(
            "UPDATE tasks SET content = ?, updated_at = ? WHERE id = ?",
            params![content, chrono::Utc::now().timestamp_millis(), id],
        )?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("Task {} not found", id)));
        }
        find_task(conn, id)?.ok_or_else(|| DomainError::NotFound(format!("Task {} not found", id)))
    }
}

pub(super) fn find_task(conn: &Connection, id: u32) -> DomainResult<Option<Task>> {
    let query = format!("{} WHERE id = ?", SELECT_TASK);
    let task = conn.query_row(&query, params![id], row_to_task).optional()?;
    Ok(task)
}

#[async_trait]
impl BoardScopedRepository<Task> for TaskRepository {
    /// Tasks in sequence order
    async fn list_for_board(&self, board_id: u32) -> DomainResult<Vec<Task>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let query = format!("{} WHERE board_id = ? ORDER BY seq, id", SELECT_TASK);
        let mut stmt = conn.prepare(&query)?;
        let tasks = stmt
            .query_map(params![board_id], row_to_task)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tasks)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Task>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;
        find_task(conn, id)
    }

    async fn delete(&self, id: u32) -> DomainResult<Task> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let task = find_task(conn, id)?
            .ok_or_else(|| DomainError::NotFound(format!("Task {} not found", id)))?;
        conn.execute("DELETE FROM tasks WHERE id = ?", params![id])?;
        Ok(task)
    }
}

/// Convert a database row to Task
pub(super) fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        content: row.get(1)?,
        board_id: row.get(2)?,
        column_id: row.get(3)?,
    })
}
