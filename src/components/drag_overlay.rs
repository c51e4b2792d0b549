//! Drag Overlay
//!
//! Floating copy of the dragged column or task that follows the pointer.

use board_core::DragEntity;
use leptos::prelude::*;

use crate::context::use_drag_context;

#[component]
pub fn DragOverlay() -> impl IntoView {
    let dnd = use_drag_context().dnd;

    let style = move || {
        let (x, y) = dnd.pointer.get();
        format!("left: {}px; top: {}px;", x + 8, y + 8)
    };

    move || {
        dnd.active.get().map(|entity| {
            let body = match entity {
                DragEntity::Column { column } => view! {
                    <div class="board-column overlay-column">
                        <h3 class="column-title">{column.name}</h3>
                    </div>
                }
                .into_any(),
                DragEntity::Task { task } => view! {
                    <div class="task-card overlay-task">{task.content}</div>
                }
                .into_any(),
            };
            view! { <div class="drag-overlay" style=style>{body}</div> }
        })
    }
}
