//! Task Repository Module
//!
//! Split into specialized sub-modules:
//! - task_repo: Core CRUD operations
//! - task_positioning: Sequence order and batch position updates

mod task_positioning;
mod task_repo;

pub use task_positioning::TaskPositioningOperations;
pub use task_repo::TaskRepository;
