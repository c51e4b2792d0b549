//! TaskBoard Frontend App
//!
//! Project list, or the board of the opened project.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{KanbanBoard, ProjectList, ToastHost};
use crate::context::{AppContext, DragContext};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new());
    provide_context(DragContext::new());

    view! {
        <div class="app-layout">
            {move || match store.current_board().get() {
                Some(board_id) => view! { <KanbanBoard board_id=board_id /> }.into_any(),
                None => view! { <ProjectList /> }.into_any(),
            }}
            <ToastHost />
        </div>
    }
}
