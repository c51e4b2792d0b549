//! Log Panel
//!
//! Tail of the backend log buffer.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;

const LOG_LINES: usize = 100;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (lines, set_lines) = signal(Vec::<String>::new());

    let refresh = move || {
        spawn_local(async move {
            match commands::recent_logs(Some(LOG_LINES)).await {
                Ok(loaded) => set_lines.set(loaded),
                Err(e) => set_lines.set(vec![format!("Failed to read logs: {}", e)]),
            }
        });
    };
    refresh();

    view! {
        <div class="log-panel">
            <button class="log-refresh-btn" on:click=move |_| refresh()>"Refresh"</button>
            <pre class="log-lines">{move || lines.get().join("\n")}</pre>
        </div>
    }
}
