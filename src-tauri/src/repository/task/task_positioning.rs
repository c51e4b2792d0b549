//! Task Positioning Operations
//!
//! The board's task sequence is stored as a `seq` number per task. A batch
//! update rewrites it from the order of the submitted list.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};

use super::super::db::not_initialized;
use crate::domain::{BatchCount, DomainError, DomainResult, Task};

/// Trait for task positioning operations
#[async_trait]
pub trait TaskPositioningOperations {
    /// Overwrite content, column and sequence order of every listed task.
    /// All or nothing: an unknown task or a foreign column aborts the batch.
    async fn update_positions(&self, board_id: u32, tasks: &[Task]) -> DomainResult<BatchCount>;

    /// Renumber a board's sequence to 0, 1, 2, ...
    async fn reindex_tasks(&self, board_id: u32) -> DomainResult<()>;
}

/// Next free sequence number on a board
pub(super) fn next_seq(conn: &Connection, board_id: u32) -> DomainResult<i64> {
    let seq = conn.query_row(
        "SELECT COALESCE(MAX(seq), -1) + 1 FROM tasks WHERE board_id = ?",
        params![board_id],
        |row| row.get::<_, i64>(0),
    )?;
    Ok(seq)
}

#[async_trait]
impl TaskPositioningOperations for super::task_repo::TaskRepository {
    async fn update_positions(&self, board_id: u32, tasks: &[Task]) -> DomainResult<BatchCount> {
        let mut guard = self.conn.lock().await;
        let conn = guard.as_mut().ok_or_else(not_initialized)?;
        let tx = conn.transaction()?;

        let now = chrono::Utc::now().timestamp_millis();
        for (seq, task) in tasks.iter().enumerate() {
            let column_on_board = tx
                .query_row(
                    "SELECT 1 FROM board_columns WHERE id = ? AND board_id = ?",
                    params![task.column_id, board_id],
                    |_| Ok(()),
                )
                .optional()?
                .is_some();
            if !column_on_board {
                return Err(DomainError::InvalidInput(format!(
                    "Column {} does not belong to project {}",
                    task.column_id, board_id
                )));
            }

            let changed = tx.execute(
                "UPDATE tasks SET content = ?, column_id = ?, seq = ?, updated_at = ? WHERE id = ? AND board_id = ?",
                params![task.content, task.column_id, seq as i64, now, task.id, board_id],
            )?;
            if changed == 0 {
                return Err(DomainError::NotFound(format!(
                    "Task {} not found on project {}",
                    task.id, board_id
                )));
            }
        }

        tx.commit()?;
        Ok(BatchCount { count: tasks.len() })
    }

    async fn reindex_tasks(&self, board_id: u32) -> DomainResult<()> {
        let mut guard = self.conn.lock().await;
        let conn = guard.as_mut().ok_or_else(not_initialized)?;
        let tx = conn.transaction()?;

        let ids = {
            let mut stmt = tx.prepare("SELECT id FROM tasks WHERE board_id = ? ORDER BY seq, id")?;
            let ids = stmt
                .query_map(params![board_id], |row| row.get::<_, u32>(0))?
                .collect::<Result<Vec<_>, _>>()?;
            ids
        };

        for (seq, id) in ids.iter().enumerate() {
            tx.execute("UPDATE tasks SET seq = ? WHERE id = ?", params![seq as i64, *id])?;
        }
        tx.commit()?;
        Ok(())
    }
}
