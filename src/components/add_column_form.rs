//! Add Column Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::models::ProjectId;

#[component]
pub fn AddColumnForm(board_id: ProjectId, on_created: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let (name, set_name) = signal(String::new());

    let add_column = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = name.get();
        if value.trim().is_empty() {
            return;
        }
        spawn_local(async move {
            match commands::create_column(value.trim(), board_id).await {
                Ok(column) => {
                    ctx.success(format!("Added column \"{}\"", column.name));
                    set_name.set(String::new());
                    on_created.run(());
                }
                Err(e) => ctx.error(format!("Failed to add column: {}", e)),
            }
        });
    };

    view! {
        <form class="add-column-form" on:submit=add_column>
            <input
                type="text"
                placeholder="New column..."
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <button type="submit">"Add column"</button>
        </form>
    }
}
