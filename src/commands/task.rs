//! Task Commands

use serde::Serialize;

use super::{call, BoardIdArgs, IdArgs};
use crate::models::{BatchCount, Task};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct CreateTaskArgs<'a> {
    #[serde(rename = "boardId")]
    board_id: u32,
    #[serde(rename = "columnId")]
    column_id: u32,
    content: &'a str,
}

#[derive(Serialize)]
struct TaskIdArgs {
    #[serde(rename = "taskId")]
    task_id: u32,
}

#[derive(Serialize)]
struct UpdateContentArgs<'a> {
    #[serde(rename = "taskId")]
    task_id: u32,
    content: &'a str,
}

#[derive(Serialize)]
struct UpdatePositionArgs<'a> {
    #[serde(rename = "boardId")]
    board_id: u32,
    tasks: &'a [Task],
}

// ========================
// Commands
// ========================

pub async fn list_tasks(board_id: u32) -> Result<Vec<Task>, String> {
    call("list_tasks", &BoardIdArgs { board_id }).await
}

pub async fn get_task(id: u32) -> Result<Option<Task>, String> {
    call("get_task", &IdArgs { id }).await
}

pub async fn create_task(board_id: u32, column_id: u32, content: &str) -> Result<Task, String> {
    call("create_task", &CreateTaskArgs { board_id, column_id, content }).await
}

pub async fn update_task_content(task_id: u32, content: &str) -> Result<Task, String> {
    call("update_task_content", &UpdateContentArgs { task_id, content }).await
}

pub async fn delete_task(task_id: u32) -> Result<Task, String> {
    call("delete_task", &TaskIdArgs { task_id }).await
}

/// Store the board's full task sequence
pub async fn update_tasks_position(board_id: u32, tasks: &[Task]) -> Result<BatchCount, String> {
    call("update_tasks_position", &UpdatePositionArgs { board_id, tasks }).await
}
