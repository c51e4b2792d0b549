//! Domain Layer
//!
//! Contains all domain entities and core abstractions.

mod entity;
mod project;

pub use entity::{Entity, DomainError, DomainResult};
pub use project::{NewProject, ProjectPatch};
pub use board_core::{BatchCount, Column, Project, ProjectStatus, Task};
