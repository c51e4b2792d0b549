//! Project List Component
//!
//! Start screen: every project newest first, with create, status change,
//! delete and open.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, UpdateProjectArgs};
use crate::components::{DeleteConfirmButton, LogPanel, NewProjectForm};
use crate::context::use_app_context;
use crate::models::{Project, ProjectStatus};
use crate::store::{
    open_board, store_remove_project, store_set_projects, store_update_project, use_app_store,
    AppStateStoreFields,
};

/// The database opens in the background; early calls are retried
const LOAD_RETRIES: u32 = 20;
const RETRY_MS: u32 = 250;

async fn load_projects() -> Result<Vec<Project>, String> {
    let mut attempt = 0;
    loop {
        match commands::list_projects().await {
            Ok(projects) => return Ok(projects),
            Err(e) if e.contains("not initialized") && attempt < LOAD_RETRIES => {
                attempt += 1;
                TimeoutFuture::new(RETRY_MS).await;
            }
            Err(e) => return Err(e),
        }
    }
}

#[component]
pub fn ProjectList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (show_logs, set_show_logs) = signal(false);

    web_sys::console::log_1(&"[BOARD] Loading projects".into());
    spawn_local(async move {
        match load_projects().await {
            Ok(projects) => store_set_projects(&store, projects),
            Err(e) => ctx.error(format!("Failed to load projects: {}", e)),
        }
    });

    let open_latest = move |_| {
        spawn_local(async move {
            match commands::latest_project().await {
                Ok(Some(project)) => open_board(&store, project.id),
                Ok(None) => ctx.info("No projects yet"),
                Err(e) => ctx.error(e),
            }
        });
    };

    view! {
        <section class="project-list">
            <header class="project-list-header">
                <h1>"Projects"</h1>
                <button class="open-latest-btn" on:click=open_latest>"Open latest"</button>
            </header>

            <NewProjectForm />

            <Show
                when=move || !store.projects().read().is_empty()
                fallback=|| view! { <p class="empty-hint">"No projects yet. Create one above."</p> }
            >
                <ul class="projects">
                    <For
                        each=move || store.projects().get()
                        key=|project| (project.id, project.status, project.name.clone())
                        children=move |project| view! { <ProjectRow project=project /> }
                    />
                </ul>
            </Show>

            <footer class="project-list-footer">
                <button class="logs-btn" on:click=move |_| set_show_logs.update(|v| *v = !*v)>
                    {move || if show_logs.get() { "Hide logs" } else { "Show logs" }}
                </button>
                <Show when=move || show_logs.get()>
                    <LogPanel />
                </Show>
            </footer>
        </section>
    }
}

#[component]
fn ProjectRow(project: Project) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let id = project.id;

    let change_status = move |ev: leptos::ev::Event| {
        let status = ProjectStatus::from_str(&event_target_value(&ev));
        spawn_local(async move {
            let args = UpdateProjectArgs {
                id,
                status: Some(status),
                ..Default::default()
            };
            match commands::update_project(&args).await {
                Ok(updated) => store_update_project(&store, updated),
                Err(e) => ctx.error(format!("Failed to update project: {}", e)),
            }
        });
    };

    let delete = Callback::new(move |_: ()| {
        spawn_local(async move {
            match commands::delete_project(id).await {
                Ok(deleted) => {
                    store_remove_project(&store, id);
                    ctx.success(format!("Deleted project \"{}\"", deleted.name));
                }
                Err(e) => ctx.error(format!("Failed to delete project: {}", e)),
            }
        });
    });

    let current = project.status;
    view! {
        <li class="project-row">
            <button class="project-open" on:click=move |_| open_board(&store, id)>
                <span class="project-name">{project.name}</span>
                <span class="project-description">{project.description}</span>
            </button>
            <span class="project-owner">{project.owner}</span>
            <select class="project-status" on:change=change_status>
                {ProjectStatus::ALL.iter().map(|option| {
                    let option = *option;
                    view! {
                        <option value=option.as_str() selected=option == current>
                            {option.as_str()}
                        </option>
                    }
                }).collect_view()}
            </select>
            <DeleteConfirmButton button_class="delete-btn" on_confirm=delete />
        </li>
    }
}
