//! Load Bar Component
//!
//! Query input and "Load" button above the columns.

use leptos::prelude::*;

use crate::commands;
use crate::context::use_app_context;
use crate::store::BoardStateStoreFields;

#[component]
pub fn LoadBar() -> impl IntoView {
    let ctx = use_app_context();
    let query = ctx.store.query();

    view! {
        <div class="load-bar">
            <input
                type="text"
                placeholder="Enter a board ID here..."
                prop:value=move || query.with(|q| q.text.clone())
                on:input=move |ev| query.update(|q| q.text = event_target_value(&ev))
            />
            <button class="load-btn" on:click=move |_| commands::load(ctx)>
                "Load"
            </button>
        </div>
    }
}
