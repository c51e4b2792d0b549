//! Project Repository
//!
//! Projects are the boards. Deleting one cascades to its columns and tasks.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};

use super::db::{not_initialized, SharedConnection};
use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, Project, ProjectStatus};

const SELECT_PROJECT: &str =
    "SELECT id, name, description, status, owner, created_at FROM projects";

pub struct ProjectRepository {
    conn: SharedConnection,
}

impl ProjectRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Most recently created project
    pub async fn latest(&self) -> DomainResult<Option<Project>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let query = format!("{} ORDER BY created_at DESC, id DESC LIMIT 1", SELECT_PROJECT);
        let project = conn.query_row(&query, [], row_to_project).optional()?;
        Ok(project)
    }
}

#[async_trait]
impl Repository<Project> for ProjectRepository {
    async fn create(&self, entity: &Project) -> DomainResult<Project> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let now = chrono::Utc::now().timestamp_millis();
        conn.execute(
            "INSERT INTO projects (name, description, status, owner, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
            params![
                entity.name,
                entity.description,
                entity.status.as_str(),
                entity.owner,
                now,
                now
            ],
        )?;

        Ok(Project {
            id: conn.last_insert_rowid() as u32,
            created_at: Some(now),
            ..entity.clone()
        })
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Project>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let query = format!("{} WHERE id = ?", SELECT_PROJECT);
        let project = conn.query_row(&query, params![id], row_to_project).optional()?;
        Ok(project)
    }

    /// Newest first
    async fn list(&self) -> DomainResult<Vec<Project>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let query = format!("{} ORDER BY created_at DESC, id DESC", SELECT_PROJECT);
        let mut stmt = conn.prepare(&query)?;
        let projects = stmt
            .query_map([], row_to_project)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(projects)
    }

    async fn update(&self, entity: &Project) -> DomainResult<Project> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let changed = conn.execute(
            "UPDATE projects SET name = ?, description = ?, status = ?, updated_at = ? WHERE id = ?",
            params![
                entity.name,
                entity.description,
                entity.status.as_str(),
                chrono::Utc::now().timestamp_millis(),
                entity.id
            ],
        )?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("Project {} not found", entity.id)));
        }
        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let changed = conn.execute("DELETE FROM projects WHERE id = ?", params![id])?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("Project {} not found", id)));
        }
        Ok(())
    }
}

fn row_to_project(row: &Row<'_>) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        status: ProjectStatus::from_str(&row.get::<_, String>(3)?),
        owner: row.get(4)?,
        created_at: row.get(5)?,
    })
}
