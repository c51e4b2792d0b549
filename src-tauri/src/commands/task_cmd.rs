//! Tauri Commands for Tasks
//!
//! `update_tasks_position` receives the board's full task sequence after a
//! drag and stores it in one transaction.

use tauri::State;

use crate::domain::{BatchCount, Task};
use crate::AppState;

#[tauri::command]
pub async fn list_tasks(state: State<'_, AppState>, board_id: u32) -> Result<Vec<Task>, String> {
    state.service.list_tasks(board_id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_task(state: State<'_, AppState>, id: u32) -> Result<Option<Task>, String> {
    state.service.get_task(id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn create_task(
    state: State<'_, AppState>,
    board_id: u32,
    column_id: u32,
    content: String,
) -> Result<Task, String> {
    state
        .service
        .create_task(board_id, column_id, &content)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn update_task_content(
    state: State<'_, AppState>,
    task_id: u32,
    content: String,
) -> Result<Task, String> {
    state
        .service
        .update_task_content(task_id, &content)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn delete_task(state: State<'_, AppState>, task_id: u32) -> Result<Task, String> {
    state.service.delete_task(task_id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn update_tasks_position(
    state: State<'_, AppState>,
    board_id: u32,
    tasks: Vec<Task>,
) -> Result<BatchCount, String> {
    state
        .service
        .update_tasks_position(board_id, &tasks)
        .await
        .map_err(|e| e.to_string())
}
