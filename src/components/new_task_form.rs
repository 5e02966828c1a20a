//! New Task Form Component
//!
//! Add button at the foot of the Todo column that unfolds into a
//! title/description form.

use leptos::prelude::*;
use task_board_core::FIELDS_REQUIRED;

use crate::commands;
use crate::context::use_app_context;
use crate::store::BoardStateStoreFields;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let form = ctx.store.form();
    let add_icon = ctx.icon("add-svgrepo-com");
    // Keystrokes must not rebuild the inputs
    let is_open = Memo::new(move |_| form.with(|f| f.open));

    let submit = move |_: web_sys::MouseEvent| {
        // Empty fields raise the flag and never reach the server
        let Some(Ok(draft)) = form.try_update(|f| f.take_draft()) else { return };
        commands::create_task(ctx, draft);
    };

    view! {
        <div class="new-task">
            {move || if is_open.get() {
                view! {
                    <div class="new-task-form">
                        <input
                            type="text"
                            placeholder="Title"
                            required=true
                            prop:value=move || form.with(|f| f.title.clone())
                            on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                        />
                        <textarea
                            placeholder="Description..."
                            required=true
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        />
                        <div class="new-task-actions">
                            <Show when=move || form.with(|f| f.show_validation)>
                                <span class="form-error">{FIELDS_REQUIRED}</span>
                            </Show>
                            <button class="add-task-btn" on:click=submit>"Add Todo"</button>
                        </div>
                    </div>
                }.into_any()
            } else {
                view! {
                    <button class="add-card-btn" on:click=move |_| form.update(|f| f.toggle())>
                        <img src=add_icon.clone() alt="Add" />
                    </button>
                }.into_any()
            }}
        </div>
    }
}
