//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod column_cmd;
mod log_cmd;
mod project_cmd;
mod task_cmd;

pub use column_cmd::*;
pub use log_cmd::*;
pub use project_cmd::*;
pub use task_cmd::*;
