//! Frontend Models
//!
//! Board records are shared with the backend through `board-core`.

pub use board_core::{BatchCount, Column, Project, ProjectId, ProjectStatus, Task};
