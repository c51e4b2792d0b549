//! Board entities
//!
//! Records come from `board-core` so frontend and backend share one shape.

use board_core::{Column, Project, Task};

use super::entity::Entity;

impl Entity for Project {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Entity for Column {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Entity for Task {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Fields accepted when creating a project
#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub status: board_core::ProjectStatus,
    pub owner: String,
}

impl NewProject {
    pub fn validate(&self) -> super::DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(super::DomainError::InvalidInput("Project name is required".into()));
        }
        if self.description.trim().is_empty() {
            return Err(super::DomainError::InvalidInput("Project description is required".into()));
        }
        Ok(())
    }
}

/// Partial update of the mutable project fields
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<board_core::ProjectStatus>,
}

impl ProjectPatch {
    pub fn apply(self, mut project: Project) -> super::DomainResult<Project> {
        if let Some(name) = self.name {
            if name.trim().is_empty() {
                return Err(super::DomainError::InvalidInput("Project name is required".into()));
            }
            project.name = name;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(status) = self.status {
            project.status = status;
        }
        Ok(project)
    }
}
