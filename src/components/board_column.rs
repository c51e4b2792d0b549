//! Board Column Component
//!
//! One column with its tasks in sequence order. The column is a drop target
//! for tasks and can itself be picked up, though column drags change nothing.

use board_core::DragEntity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{make_on_mousedown, make_on_mouseenter, make_on_mouseleave};

use crate::commands;
use crate::components::{DeleteConfirmButton, NewTaskForm, TaskCard};
use crate::context::{use_app_context, use_drag_context};
use crate::models::{Column, Task};

#[component]
pub fn BoardColumn(
    column: Column,
    #[prop(into)] tasks: Signal<Vec<Task>>,
    on_over: Callback<(DragEntity, DragEntity)>,
    on_changed: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let dnd = use_drag_context().dnd;
    let column_id = column.id;
    let board_id = column.board_id;
    let entity = DragEntity::column(column.clone());

    let delete = Callback::new(move |_: ()| {
        spawn_local(async move {
            match commands::delete_column(column_id).await {
                Ok(deleted) => {
                    ctx.success(format!("Deleted column \"{}\"", deleted.name));
                    on_changed.run(());
                }
                Err(e) => ctx.error(format!("Failed to delete column: {}", e)),
            }
        });
    });

    let is_active = move || {
        dnd.active
            .with(|active| matches!(active, Some(DragEntity::Column { column }) if column.id == column_id))
    };
    let is_over = move || {
        dnd.over
            .with(|over| matches!(over, Some(DragEntity::Column { column }) if column.id == column_id))
    };

    view! {
        <div
            class=move || {
                let mut class = String::from("board-column");
                if is_active() { class.push_str(" dragging"); }
                if is_over() { class.push_str(" drop-target"); }
                class
            }
            on:mouseenter=make_on_mouseenter(dnd, entity.clone(), move |active, over| on_over.run((active, over)))
            on:mouseleave=make_on_mouseleave(dnd)
        >
            <header class="column-header" on:mousedown=make_on_mousedown(dnd, entity.clone())>
                <h3 class="column-title">{column.name}</h3>
                <span class="column-count">{move || tasks.with(Vec::len)}</span>
                <DeleteConfirmButton button_class="column-delete-btn" on_confirm=delete />
            </header>

            <div class="column-tasks">
                <For
                    each=move || tasks.get()
                    key=|task| (task.id, task.content.clone())
                    children=move |task| view! {
                        <TaskCard task=task on_over=on_over on_changed=on_changed />
                    }
                />
            </div>

            <NewTaskForm board_id=board_id column_id=column_id on_created=on_changed />
        </div>
    }
}
