//! Board Core
//!
//! Kanban board state and drag-and-drop reconciliation:
//! - store: client-side ordered columns and tasks with optimistic edits
//! - reorder / engine: gesture events to new task sequences and sync plans
//! - remote / sync: the remote store interface and batch commit

mod engine;
mod entity;
mod error;
mod model;
mod remote;
mod reorder;
mod store;
mod sync;

#[cfg(any(test, feature = "test-support"))]
pub mod memory;

pub use engine::{BatchUpdate, CommitPlan, DragEngine, DragState};
pub use entity::{DragEntity, DragKind, DropTarget};
pub use error::{BoardError, BoardResult};
pub use model::{BatchCount, Column, ColumnId, Project, ProjectId, ProjectStatus, Task, TaskId};
pub use remote::BoardRemote;
pub use reorder::{array_move, reorder};
pub use store::BoardState;
pub use sync::{commit, fetch_board, SyncOutcome};

pub use async_trait::async_trait;
