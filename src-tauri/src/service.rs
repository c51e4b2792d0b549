//! Board Service
//!
//! Project and board operations over the repositories. Tauri commands call
//! the inherent methods; the `BoardRemote` impl lets the drag engine's sync
//! helpers run directly against the database.

use async_trait::async_trait;
use board_core::{BoardError, BoardRemote, BoardResult};

use crate::config::AppConfig;
use crate::domain::{
    BatchCount, Column, DomainError, DomainResult, NewProject, Project, ProjectPatch,
    ProjectStatus, Task,
};
use crate::repository::{
    BoardScopedRepository, ColumnRepository, DbState, ProjectRepository, Repository,
    TaskPositioningOperations, TaskRepository,
};

pub struct BoardService {
    projects: ProjectRepository,
    columns: ColumnRepository,
    tasks: TaskRepository,
    owner: String,
    default_status: ProjectStatus,
}

fn not_found(entity: &str, id: u32) -> DomainError {
    DomainError::NotFound(format!("{} {} not found", entity, id))
}

impl BoardService {
    pub fn new(db_state: &DbState, config: &AppConfig) -> Self {
        Self {
            projects: ProjectRepository::new(db_state.conn.clone()),
            columns: ColumnRepository::new(db_state.conn.clone()),
            tasks: TaskRepository::new(db_state.conn.clone()),
            owner: config.owner.clone(),
            default_status: config.default_status,
        }
    }

    // ---- Projects ----

    pub async fn create_project(
        &self,
        name: String,
        description: String,
        status: Option<ProjectStatus>,
    ) -> DomainResult<Project> {
        let new = NewProject {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            status: status.unwrap_or(self.default_status),
            owner: self.owner.clone(),
        };
        new.validate()?;

        let mut project = Project::new(0, new.name, new.description, new.owner);
        project.status = new.status;
        let created = self.projects.create(&project).await?;
        log::info!("created project {} '{}'", created.id, created.name);
        Ok(created)
    }

    pub async fn list_projects(&self) -> DomainResult<Vec<Project>> {
        self.projects.list().await
    }

    pub async fn get_project(&self, id: u32) -> DomainResult<Option<Project>> {
        self.projects.find_by_id(id).await
    }

    pub async fn latest_project(&self) -> DomainResult<Option<Project>> {
        self.projects.latest().await
    }

    pub async fn update_project(&self, id: u32, patch: ProjectPatch) -> DomainResult<Project> {
        let project = self
            .projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found("Project", id))?;
        let updated = patch.apply(project)?;
        self.projects.update(&updated).await
    }

    /// Removes the project's columns and tasks as well
    pub async fn delete_project(&self, id: u32) -> DomainResult<Project> {
        let project = self
            .projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found("Project", id))?;
        self.projects.delete(id).await?;
        log::info!("deleted project {}", id);
        Ok(project)
    }

    // ---- Columns ----

    pub async fn list_columns(&self, board_id: u32) -> DomainResult<Vec<Column>> {
        self.columns.list_for_board(board_id).await
    }

    pub async fn get_column(&self, id: u32) -> DomainResult<Option<Column>> {
        self.columns.find_by_id(id).await
    }

    pub async fn create_column(&self, name: &str, board_id: u32) -> DomainResult<Column> {
        self.columns.create(name.trim(), board_id).await
    }

    pub async fn delete_column(&self, id: u32) -> DomainResult<Column> {
        let column = self.columns.delete(id).await?;
        self.tasks.reindex_tasks(column.board_id).await?;
        Ok(column)
    }

    // ---- Tasks ----

    pub async fn list_tasks(&self, board_id: u32) -> DomainResult<Vec<Task>> {
        self.tasks.list_for_board(board_id).await
    }

    pub async fn get_task(&self, id: u32) -> DomainResult<Option<Task>> {
        self.tasks.find_by_id(id).await
    }

    pub async fn create_task(&self, board_id: u32, column_id: u32, content: &str) -> DomainResult<Task> {
        self.tasks.create(board_id, column_id, content).await
    }

    pub async fn update_task_content(&self, task_id: u32, content: &str) -> DomainResult<Task> {
        self.tasks.update_content(task_id, content).await
    }

    pub async fn delete_task(&self, task_id: u32) -> DomainResult<Task> {
        self.tasks.delete(task_id).await
    }

    pub async fn update_tasks_position(&self, board_id: u32, tasks: &[Task]) -> DomainResult<BatchCount> {
        let result = self.tasks.update_positions(board_id, tasks).await;
        match &result {
            Ok(batch) => log::debug!("board {}: stored order of {} tasks", board_id, batch.count),
            Err(e) => log::warn!("board {}: batch position update failed: {}", board_id, e),
        }
        result
    }
}

#[async_trait(?Send)]
impl BoardRemote for BoardService {
    async fn list_columns(&self, board_id: u32) -> BoardResult<Vec<Column>> {
        Ok(BoardService::list_columns(self, board_id).await?)
    }

    async fn get_column(&self, id: u32) -> BoardResult<Option<Column>> {
        Ok(BoardService::get_column(self, id).await?)
    }

    async fn create_column(&self, name: &str, board_id: u32) -> BoardResult<Column> {
        Ok(BoardService::create_column(self, name, board_id).await?)
    }

    async fn delete_column(&self, id: u32) -> BoardResult<Column> {
        BoardService::delete_column(self, id).await.map_err(|e| missing(e, "column", id))
    }

    async fn list_tasks(&self, board_id: u32) -> BoardResult<Vec<Task>> {
        Ok(BoardService::list_tasks(self, board_id).await?)
    }

    async fn get_task(&self, id: u32) -> BoardResult<Option<Task>> {
        Ok(BoardService::get_task(self, id).await?)
    }

    async fn create_task(&self, board_id: u32, column_id: u32, content: &str) -> BoardResult<Task> {
        BoardService::create_task(self, board_id, column_id, content)
            .await
            .map_err(|e| missing(e, "column", column_id))
    }

    async fn update_task_content(&self, task_id: u32, content: &str) -> BoardResult<Task> {
        BoardService::update_task_content(self, task_id, content)
            .await
            .map_err(|e| missing(e, "task", task_id))
    }

    async fn delete_task(&self, task_id: u32) -> BoardResult<Task> {
        BoardService::delete_task(self, task_id)
            .await
            .map_err(|e| missing(e, "task", task_id))
    }

    async fn update_tasks_position(&self, board_id: u32, tasks: &[Task]) -> BoardResult<BatchCount> {
        Ok(BoardService::update_tasks_position(self, board_id, tasks).await?)
    }
}

/// Map a not-found error for a single known id onto the typed variant
fn missing(e: DomainError, entity: &'static str, id: u32) -> BoardError {
    match e {
        DomainError::NotFound(_) => BoardError::NotFound { entity, id },
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::init_db;
    use std::path::Path;

    async fn service() -> BoardService {
        let db = init_db(Path::new(":memory:")).await.unwrap();
        BoardService::new(&db, &AppConfig::default())
    }

    #[tokio::test]
    async fn test_create_project_fills_owner_and_default_status() {
        let service = service().await;
        let project = service
            .create_project("  Website ".into(), "Relaunch".into(), None)
            .await
            .unwrap();
        assert_eq!(project.name, "Website");
        assert_eq!(project.owner, "local");
        assert_eq!(project.status, ProjectStatus::InProgress);
    }

    #[tokio::test]
    async fn test_create_project_requires_name_and_description() {
        let service = service().await;
        assert!(matches!(
            service.create_project("".into(), "x".into(), None).await,
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(
            service.create_project("x".into(), " ".into(), None).await,
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_update_project_applies_patch() {
        let service = service().await;
        let project = service
            .create_project("A".into(), "a".into(), Some(ProjectStatus::NotStarted))
            .await
            .unwrap();

        let patch = ProjectPatch {
            status: Some(ProjectStatus::Done),
            ..Default::default()
        };
        let updated = service.update_project(project.id, patch).await.unwrap();
        assert_eq!(updated.status, ProjectStatus::Done);
        assert_eq!(updated.name, "A");

        let stored = service.get_project(project.id).await.unwrap().unwrap();
        assert_eq!(stored.status, ProjectStatus::Done);
    }

    #[tokio::test]
    async fn test_delete_project_returns_it() {
        let service = service().await;
        let project = service.create_project("A".into(), "a".into(), None).await.unwrap();

        let deleted = service.delete_project(project.id).await.unwrap();
        assert_eq!(deleted.id, project.id);
        assert!(service.latest_project().await.unwrap().is_none());
        assert!(matches!(
            service.delete_project(project.id).await,
            Err(DomainError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_remote_maps_missing_task_to_typed_error() {
        let service = service().await;
        let err = BoardRemote::delete_task(&service, 77).await.unwrap_err();
        assert_eq!(err, BoardError::NotFound { entity: "task", id: 77 });
    }
}
