//! New Task Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::models::ProjectId;

/// Appends a task to the end of the board sequence, in this column
#[component]
pub fn NewTaskForm(board_id: ProjectId, column_id: u32, on_created: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let (content, set_content) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = content.get();
        if text.trim().is_empty() {
            return;
        }
        spawn_local(async move {
            match commands::create_task(board_id, column_id, text.trim()).await {
                Ok(_) => {
                    set_content.set(String::new());
                    on_created.run(());
                }
                Err(e) => ctx.error(format!("Failed to add task: {}", e)),
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="Add task..."
                prop:value=move || content.get()
                on:input=move |ev| set_content.set(event_target_value(&ev))
            />
            <button type="submit">"+"</button>
        </form>
    }
}
