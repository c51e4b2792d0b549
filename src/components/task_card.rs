//! Task Card Component
//!
//! Draggable task with inline editing and delete.

use board_core::DragEntity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{make_on_mousedown, make_on_mouseenter, make_on_mouseleave};

use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::context::{use_app_context, use_drag_context};
use crate::models::Task;

#[component]
pub fn TaskCard(
    task: Task,
    on_over: Callback<(DragEntity, DragEntity)>,
    on_changed: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let dnd = use_drag_context().dnd;
    let task_id = task.id;
    let entity = DragEntity::task(task.clone());

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(task.content.clone());

    let save = move || {
        if !editing.get_untracked() {
            return;
        }
        let content = draft.get_untracked();
        set_editing.set(false);
        if content.trim().is_empty() {
            ctx.info("Task content cannot be empty");
            return;
        }
        spawn_local(async move {
            match commands::update_task_content(task_id, content.trim()).await {
                Ok(_) => on_changed.run(()),
                Err(e) => ctx.error(format!("Failed to update task: {}", e)),
            }
        });
    };

    let delete = Callback::new(move |_: ()| {
        spawn_local(async move {
            match commands::delete_task(task_id).await {
                Ok(_) => {
                    ctx.success("Task deleted");
                    on_changed.run(());
                }
                Err(e) => ctx.error(format!("Failed to delete task: {}", e)),
            }
        });
    });

    let is_active = move || {
        dnd.active
            .with(|active| matches!(active, Some(DragEntity::Task { task }) if task.id == task_id))
    };

    let content = task.content.clone();
    view! {
        <div
            class=move || if is_active() { "task-card dragging" } else { "task-card" }
            on:mousedown=make_on_mousedown(dnd, entity.clone())
            on:mouseenter=make_on_mouseenter(dnd, entity, move |active, over| on_over.run((active, over)))
            on:mouseleave=make_on_mouseleave(dnd)
        >
            <Show
                when=move || editing.get()
                fallback=move || {
                    let content = content.clone();
                    view! {
                        <p
                            class="task-content"
                            on:dblclick=move |_| {
                                if !dnd.drag_just_ended.get_untracked() {
                                    set_editing.set(true);
                                }
                            }
                        >
                            {content}
                        </p>
                    }
                }
            >
                <textarea
                    class="task-editor"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:blur=move |_| save()
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            save();
                        } else if ev.key() == "Escape" {
                            set_editing.set(false);
                        }
                    }
                ></textarea>
            </Show>
            <DeleteConfirmButton button_class="task-delete-btn" on_confirm=delete />
        </div>
    }
}
