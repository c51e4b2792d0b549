//! Repository Layer
//!
//! Data access abstractions and implementations.

mod column_repo;
mod db;
mod project_repo;
mod task;
mod traits;

#[cfg(test)]
mod tests;

pub use column_repo::ColumnRepository;
pub use db::{init_db, open_database, DbState};
pub use project_repo::ProjectRepository;
pub use task::{TaskPositioningOperations, TaskRepository};
pub use traits::{BoardScopedRepository, Repository};
