//! Board Synchronisation
//!
//! Fetching server snapshots and pushing drag results.

use crate::engine::CommitPlan;
use crate::error::BoardResult;
use crate::model::{Column, ProjectId, Task};
use crate::remote::BoardRemote;

/// Result of committing a finished drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Nothing was sent
    Skipped,
    /// The batch was stored; the caller should refetch the board's tasks
    Refetch { count: usize },
}

/// Execute a commit plan. On failure the local sequence is left as it is.
pub async fn commit(remote: &dyn BoardRemote, plan: CommitPlan) -> BoardResult<SyncOutcome> {
    match plan {
        CommitPlan::Unchanged => Ok(SyncOutcome::Skipped),
        CommitPlan::Sync(update) => {
            let result = remote
                .update_tasks_position(update.board_id, &update.tasks)
                .await;
            match result {
                Ok(batch) => {
                    log::debug!("board {}: synced {} tasks", update.board_id, batch.count);
                    Ok(SyncOutcome::Refetch { count: batch.count })
                }
                Err(e) => {
                    log::warn!("board {}: task sync failed: {}", update.board_id, e);
                    Err(e)
                }
            }
        }
    }
}

/// Fetch both board queries
pub async fn fetch_board(
    remote: &dyn BoardRemote,
    board_id: ProjectId,
) -> BoardResult<(Vec<Task>, Vec<Column>)> {
    let columns = remote.list_columns(board_id).await?;
    let tasks = remote.list_tasks(board_id).await?;
    Ok((tasks, columns))
}
