//! UI Components
//!
//! Reusable Leptos components.

mod add_column_form;
mod board_column;
mod delete_confirm_button;
mod drag_overlay;
mod kanban_board;
mod log_panel;
mod new_project_form;
mod new_task_form;
mod project_list;
mod task_card;
mod toast_host;

pub use add_column_form::AddColumnForm;
pub use board_column::BoardColumn;
pub use delete_confirm_button::DeleteConfirmButton;
pub use drag_overlay::DragOverlay;
pub use kanban_board::KanbanBoard;
pub use log_panel::LogPanel;
pub use new_project_form::NewProjectForm;
pub use new_task_form::NewTaskForm;
pub use project_list::ProjectList;
pub use task_card::TaskCard;
pub use toast_host::ToastHost;
