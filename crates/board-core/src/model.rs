//! Board Models
//!
//! Records shared by the frontend and the backend.

use serde::{Deserialize, Serialize};

pub type ProjectId = u32;
pub type ColumnId = u32;
pub type TaskId = u32;

/// Lifecycle status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProjectStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[default]
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Done")]
    Done,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::NotStarted,
        ProjectStatus::InProgress,
        ProjectStatus::Done,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::NotStarted => "Not Started",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Done => "Done",
        }
    }

    /// Parse a stored status, falling back to the default for unknown text
    pub fn from_str(s: &str) -> Self {
        match s {
            "Not Started" => ProjectStatus::NotStarted,
            "Done" => ProjectStatus::Done,
            _ => ProjectStatus::InProgress,
        }
    }
}

/// A project is the board that owns columns and tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub owner: String,
    /// Unix millis, assigned by the store
    pub created_at: Option<i64>,
}

impl Project {
    pub fn new(
        id: ProjectId,
        name: impl Into<String>,
        description: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            status: ProjectStatus::default(),
            owner: owner.into(),
            created_at: None,
        }
    }
}

/// A board column. Display order is its position in the column list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub name: String,
    pub board_id: ProjectId,
}

impl Column {
    pub fn new(id: ColumnId, name: impl Into<String>, board_id: ProjectId) -> Self {
        Self {
            id,
            name: name.into(),
            board_id,
        }
    }
}

/// A task card. Display order is its position in the board's task sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub content: String,
    pub board_id: ProjectId,
    pub column_id: ColumnId,
}

impl Task {
    pub fn new(id: TaskId, content: impl Into<String>, board_id: ProjectId, column_id: ColumnId) -> Self {
        Self {
            id,
            content: content.into(),
            board_id,
            column_id,
        }
    }
}

/// Response of the batch position update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchCount {
    pub count: usize,
}
