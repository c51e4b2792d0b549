//! Project Commands

use serde::Serialize;

use super::{call, call_no_args, IdArgs};
use crate::models::{Project, ProjectStatus};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateProjectArgs<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub status: Option<ProjectStatus>,
}

#[derive(Serialize, Default)]
pub struct UpdateProjectArgs<'a> {
    pub id: u32,
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub status: Option<ProjectStatus>,
}

// ========================
// Commands
// ========================

/// All projects, newest first
pub async fn list_projects() -> Result<Vec<Project>, String> {
    call_no_args("list_projects").await
}

pub async fn get_project(id: u32) -> Result<Option<Project>, String> {
    call("get_project", &IdArgs { id }).await
}

pub async fn latest_project() -> Result<Option<Project>, String> {
    call_no_args("latest_project").await
}

pub async fn create_project(args: &CreateProjectArgs<'_>) -> Result<Project, String> {
    call("create_project", args).await
}

pub async fn update_project(args: &UpdateProjectArgs<'_>) -> Result<Project, String> {
    call("update_project", args).await
}

pub async fn delete_project(id: u32) -> Result<Project, String> {
    call("delete_project", &IdArgs { id }).await
}
