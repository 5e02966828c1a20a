//! Task Card Component
//!
//! One card: title and description with edit/delete controls, or the
//! inline editor with save/close controls.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use task_board_core::{CardActions, CardEditor, CardMode, Task, FIELDS_REQUIRED};

use crate::context::use_app_context;

/// Shared handle to whatever performs a card's update/delete requests
pub type CardActionsHandle = StoredValue<Rc<dyn CardActions>, LocalStorage>;

#[component]
pub fn TaskCard(#[prop(into)] task: Signal<Task>, actions: CardActionsHandle) -> impl IntoView {
    let ctx = use_app_context();
    let editor = RwSignal::new(CardEditor::default());
    let is_editing = Memo::new(move |_| editor.with(|e| e.is_editing()));

    let id = task.with_untracked(|t| t.id);

    let edit_icon = ctx.icon("edit-svgrepo-com");
    let delete_icon = ctx.icon("trash-alt-svgrepo-com");
    let save_icon = ctx.icon("check-svgrepo-com");
    let close_icon = ctx.icon("close-svgrepo-com");

    let on_edit = move |_: web_sys::MouseEvent| task.with_untracked(|t| editor.update(|e| e.begin_edit(t)));
    let on_close = move |_: web_sys::MouseEvent| editor.update(|e| e.cancel());

    let on_save = move |_: web_sys::MouseEvent| {
        let Some(draft) = editor.try_update(|e| e.try_save()).flatten() else { return };
        let actions = actions.get_value();
        spawn_local(async move {
            // The board logs a failed update; the card closes either way
            let _ = actions.request_update(id, draft).await;
            editor.try_update(|e| e.finish_save());
        });
    };

    let on_delete = move |_: web_sys::MouseEvent| {
        let actions = actions.get_value();
        spawn_local(async move {
            let _ = actions.request_delete(id).await;
        });
    };

    let working_title = move || editor.with(|e| match e.mode() {
        CardMode::Editing { title, .. } => title.clone(),
        CardMode::Viewing => String::new(),
    });
    let working_description = move || editor.with(|e| match e.mode() {
        CardMode::Editing { description, .. } => description.clone(),
        CardMode::Viewing => String::new(),
    });

    view! {
        <div class="task-card">
            {move || if is_editing.get() {
                view! {
                    <div class="task-card-editor">
                        <input
                            type="text"
                            placeholder="Title"
                            prop:value=working_title
                            on:input=move |ev| editor.update(|e| e.set_title(event_target_value(&ev)))
                        />
                        <textarea
                            placeholder="Description..."
                            prop:value=working_description
                            on:input=move |ev| editor.update(|e| e.set_description(event_target_value(&ev)))
                        />
                        <div class="task-card-actions">
                            <Show when=move || editor.with(|e| e.show_validation())>
                                <span class="form-error">{FIELDS_REQUIRED}</span>
                            </Show>
                            <button class="icon-btn" on:click=on_save>
                                <img src=save_icon.clone() alt="Save" />
                            </button>
                            <button class="icon-btn" on:click=on_close>
                                <img src=close_icon.clone() alt="Close" />
                            </button>
                        </div>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="task-card-body">
                        <h3 class="task-title">{move || task.with(|t| t.title.clone())}</h3>
                        <p class="task-description">{move || task.with(|t| t.description.clone())}</p>
                        <div class="task-card-actions">
                            <button class="icon-btn" on:click=on_edit>
                                <img src=edit_icon.clone() alt="Edit" />
                            </button>
                            <button class="icon-btn" on:click=on_delete>
                                <img src=delete_icon.clone() alt="Delete" />
                            </button>
                        </div>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
