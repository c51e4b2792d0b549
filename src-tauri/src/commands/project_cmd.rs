//! Tauri Commands for Projects
//!
//! Projects are the boards shown on the start screen.

use tauri::State;

use crate::domain::{Project, ProjectPatch, ProjectStatus};
use crate::AppState;

#[tauri::command]
pub async fn list_projects(state: State<'_, AppState>) -> Result<Vec<Project>, String> {
    state.service.list_projects().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_project(state: State<'_, AppState>, id: u32) -> Result<Option<Project>, String> {
    state.service.get_project(id).await.map_err(|e| e.to_string())
}

/// Most recently created project, used to open the last board
#[tauri::command]
pub async fn latest_project(state: State<'_, AppState>) -> Result<Option<Project>, String> {
    state.service.latest_project().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn create_project(
    state: State<'_, AppState>,
    name: String,
    description: String,
    status: Option<ProjectStatus>,
) -> Result<Project, String> {
    state
        .service
        .create_project(name, description, status)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn update_project(
    state: State<'_, AppState>,
    id: u32,
    name: Option<String>,
    description: Option<String>,
    status: Option<ProjectStatus>,
) -> Result<Project, String> {
    let patch = ProjectPatch {
        name,
        description,
        status,
    };
    state.service.update_project(id, patch).await.map_err(|e| e.to_string())
}

/// Delete a project with its columns and tasks
#[tauri::command]
pub async fn delete_project(state: State<'_, AppState>, id: u32) -> Result<Project, String> {
    state.service.delete_project(id).await.map_err(|e| e.to_string())
}
