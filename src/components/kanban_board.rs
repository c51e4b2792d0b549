//! Kanban Board Component
//!
//! Owns the board's `BoardState` and `DragEngine`. Hover events reorder the
//! local task sequence; a drop sends the full sequence in one batch and
//! refetches, while a failed batch leaves the local order on screen.

use board_core::{commit, fetch_board, BoardState, DragEngine, DragEntity, SyncOutcome};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{AddColumnForm, BoardColumn, DragOverlay};
use crate::context::{use_app_context, use_drag_context, DragHandlers};
use crate::models::{Project, ProjectId};
use crate::remote::TauriRemote;
use crate::store::{close_board, use_app_store};

fn log(message: String) {
    web_sys::console::log_1(&message.into());
}

#[component]
pub fn KanbanBoard(board_id: ProjectId) -> impl IntoView {
    let ctx = use_app_context();
    let drag = use_drag_context();
    let store = use_app_store();

    let board = RwSignal::new(BoardState::new(board_id));
    let engine = StoredValue::new(DragEngine::new());
    let (project, set_project) = signal(None::<Project>);

    let refresh = move || {
        spawn_local(async move {
            match fetch_board(&TauriRemote, board_id).await {
                Ok((tasks, columns)) => {
                    log(format!("[BOARD] {}: {} columns, {} tasks", board_id, columns.len(), tasks.len()));
                    board.update(|state| state.replace(tasks, columns));
                }
                Err(e) => ctx.error(format!("Failed to load board: {}", e)),
            }
        });
    };

    let refetch_tasks = move || {
        spawn_local(async move {
            match commands::list_tasks(board_id).await {
                Ok(tasks) => board.update(|state| state.replace_tasks(tasks)),
                Err(e) => ctx.error(format!("Failed to load tasks: {}", e)),
            }
        });
    };

    spawn_local(async move {
        match commands::get_project(board_id).await {
            Ok(Some(found)) => set_project.set(Some(found)),
            Ok(None) => {
                ctx.error(format!("Project {} no longer exists", board_id));
                close_board(&store);
            }
            Err(e) => ctx.error(e),
        }
    });
    refresh();

    // ---- Drag gestures ----

    let on_start = Callback::new(move |active: DragEntity| {
        log(format!("[DND] start {:?} {}", active.kind(), active.id()));
        engine.update_value(|engine| {
            engine.drag_start(Some(&active));
        });
    });

    let on_over = Callback::new(move |(active, over): (DragEntity, DragEntity)| {
        engine.update_value(|engine| {
            board.maybe_update(|state| engine.drag_over(state, Some(&active), Some(&over)));
        });
    });

    let on_end = Callback::new(move |(active, over): (DragEntity, Option<DragEntity>)| {
        log(format!(
            "[DND] end {:?} {} over {:?}",
            active.kind(),
            active.id(),
            over.as_ref().map(DragEntity::id)
        ));
        let Some(plan) = engine.try_update_value(|engine| board.with_untracked(|state| engine.drag_end(state))) else {
            return;
        };
        let plan = match plan {
            Ok(plan) => plan,
            Err(e) => {
                ctx.error(e.to_string());
                return;
            }
        };
        spawn_local(async move {
            match commit(&TauriRemote, plan).await {
                Ok(SyncOutcome::Refetch { count }) => {
                    log(format!("[DND] stored order of {} tasks", count));
                    ctx.info("Refreshing tasks...");
                    refetch_tasks();
                }
                Ok(SyncOutcome::Skipped) => {}
                Err(e) => ctx.error(format!("Failed to save task order: {}", e)),
            }
        });
    });

    drag.register(DragHandlers { on_start, on_end });
    on_cleanup(move || drag.unregister());

    let on_changed = Callback::new(move |_: ()| refresh());

    let columns = Memo::new(move |_| {
        board.with(|state| state.columns().map(|c| c.to_vec()).unwrap_or_default())
    });
    let loaded = move || board.with(BoardState::is_loaded);

    view! {
        <section class="kanban-board">
            <header class="board-header">
                <button class="back-btn" on:click=move |_| close_board(&store)>"← Projects"</button>
                <h2>{move || project.get().map(|p| p.name).unwrap_or_default()}</h2>
                <span class="board-status">
                    {move || project.get().map(|p| p.status.as_str()).unwrap_or_default()}
                </span>
            </header>

            <Show
                when=loaded
                fallback=|| view! { <p class="loading">"Loading board..."</p> }
            >
                <div class="board-columns">
                    <For
                        each=move || columns.get()
                        key=|column| column.id
                        children=move |column| {
                            let column_id = column.id;
                            let tasks = Signal::derive(move || {
                                board.with(|state| state.tasks_in_column(column_id))
                            });
                            view! {
                                <BoardColumn
                                    column=column
                                    tasks=tasks
                                    on_over=on_over
                                    on_changed=on_changed
                                />
                            }
                        }
                    />
                    <AddColumnForm board_id=board_id on_created=on_changed />
                </div>
            </Show>

            <DragOverlay />
        </section>
    }
}
