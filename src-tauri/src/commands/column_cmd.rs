//! Tauri Commands for Board Columns

use tauri::State;

use crate::domain::Column;
use crate::AppState;

#[tauri::command]
pub async fn list_columns(state: State<'_, AppState>, board_id: u32) -> Result<Vec<Column>, String> {
    state.service.list_columns(board_id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_column(state: State<'_, AppState>, id: u32) -> Result<Option<Column>, String> {
    state.service.get_column(id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn create_column(
    state: State<'_, AppState>,
    name: String,
    board_id: u32,
) -> Result<Column, String> {
    state
        .service
        .create_column(&name, board_id)
        .await
        .map_err(|e| e.to_string())
}

/// Delete a column and every task in it
#[tauri::command]
pub async fn delete_column(state: State<'_, AppState>, id: u32) -> Result<Column, String> {
    state.service.delete_column(id).await.map_err(|e| e.to_string())
}
