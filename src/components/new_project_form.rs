//! New Project Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, CreateProjectArgs};
use crate::context::use_app_context;
use crate::models::ProjectStatus;
use crate::store::{store_add_project, use_app_store};

#[component]
pub fn NewProjectForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (status, set_status) = signal(ProjectStatus::default());

    let create_project = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get();
        let description_value = description.get();
        if name_value.trim().is_empty() || description_value.trim().is_empty() {
            ctx.info("A project needs a name and a description");
            return;
        }
        let selected = status.get();

        spawn_local(async move {
            let args = CreateProjectArgs {
                name: &name_value,
                description: &description_value,
                status: Some(selected),
            };
            match commands::create_project(&args).await {
                Ok(project) => {
                    ctx.success(format!("Created project \"{}\"", project.name));
                    store_add_project(&store, project);
                    set_name.set(String::new());
                    set_description.set(String::new());
                }
                Err(e) => ctx.error(format!("Failed to create project: {}", e)),
            }
        });
    };

    view! {
        <form class="new-project-form" on:submit=create_project>
            <input
                type="text"
                placeholder="Project name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <select on:change=move |ev| set_status.set(ProjectStatus::from_str(&event_target_value(&ev)))>
                {ProjectStatus::ALL.iter().map(|option| {
                    let option = *option;
                    view! {
                        <option value=option.as_str() selected=move || status.get() == option>
                            {option.as_str()}
                        </option>
                    }
                }).collect_view()}
            </select>
            <button type="submit">"Create"</button>
        </form>
    }
}
