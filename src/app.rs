//! Task Board App
//!
//! Main application component: load bar and three status columns.

use leptos::prelude::*;
use reactive_stores::Store;
use task_board_core::{ApiConfig, TaskStatus};

use crate::commands;
use crate::components::{LoadBar, TaskColumn};
use crate::context::AppContext;
use crate::store::BoardState;

use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};

/// Base URL baked in at build time, e.g. `TASK_BOARD_API_URL=http://localhost:3000 trunk serve`
fn api_config() -> ApiConfig {
    let Some(url) = option_env!("TASK_BOARD_API_URL") else {
        return ApiConfig::default();
    };
    ApiConfig::new(url).unwrap_or_else(|error| {
        tracing::warn!(%error, "falling back to the hosted task service");
        ApiConfig::default()
    })
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(BoardState::default());

    // Provide context to all children
    let ctx = AppContext::new(api_config(), store);
    provide_context(ctx);

    // Drops anywhere on the page land here
    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |release| commands::drop_card(ctx, release));

    // Load tasks on mount
    Effect::new(move |_| commands::refresh(ctx));

    view! {
        <div class="board">
            <LoadBar />

            <div class="column-headings">
                {TaskStatus::ALL.iter().map(|status| view! {
                    <h2 class="column-heading">{status.label()}</h2>
                }).collect_view()}
            </div>

            <div class="columns">
                {TaskStatus::ALL.into_iter().map(|status| view! {
                    <TaskColumn status=status dnd=dnd />
                }).collect_view()}
            </div>
        </div>
    }
}
