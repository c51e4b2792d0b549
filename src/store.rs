//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Project, ProjectId};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All projects, newest first
    pub projects: Vec<Project>,
    /// Board shown instead of the project list
    pub current_board: Option<ProjectId>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_projects(store: &AppStore, projects: Vec<Project>) {
    *store.projects().write() = projects;
}

/// New projects go first to keep newest-first order
pub fn store_add_project(store: &AppStore, project: Project) {
    store.projects().write().insert(0, project);
}

pub fn store_update_project(store: &AppStore, updated: Project) {
    if let Some(project) = store
        .projects()
        .write()
        .iter_mut()
        .find(|p| p.id == updated.id)
    {
        *project = updated;
    }
}

pub fn store_remove_project(store: &AppStore, project_id: ProjectId) {
    store.projects().write().retain(|p| p.id != project_id);
}

pub fn open_board(store: &AppStore, board_id: ProjectId) {
    store.current_board().set(Some(board_id));
}

pub fn close_board(store: &AppStore) {
    store.current_board().set(None);
}
