//! Task Column Component
//!
//! One status column with draggable cards.
//! Uses leptos-dragdrop: each card's halves are the gaps before and after
//! it, the trailing DropZone is the gap after the last card.

use leptos::prelude::*;
use task_board_core::{Task, TaskStatus};

use crate::components::{DropZone, DropZoneProps, NewTaskForm, TaskCard};
use crate::context::use_app_context;
use crate::store::{column_index, column_tasks, BoardStateStoreFields};

use leptos_dragdrop::*;

/// CSS class of a column container
pub fn column_class(status: TaskStatus, dragging: bool) -> String {
    let mut c = format!("task-column column-{}", status.as_str().to_lowercase());
    if dragging { c.push_str(" drag-active"); }
    c
}

#[component]
pub fn TaskColumn(status: TaskStatus, dnd: DndSignals) -> impl IntoView {
    let ctx = use_app_context();
    let tasks = ctx.store.tasks();
    let column = status.column();
    let actions = StoredValue::new_local(ctx.card_actions());

    let entries = move || tasks.with(|all| column_tasks(all, status));
    let count = Memo::new(move |_| tasks.with(|all| all.iter().filter(|t| t.status == status).count()));

    view! {
        <div
            class=move || column_class(status, dnd.is_dragging())
            on:mouseleave=make_on_column_mouseleave(dnd)
        >
            <For
                each=entries
                // Keyed by id so a card keeps its edit state while siblings move
                key=|task| task.id
                children=move |initial| {
                    let id = initial.id;
                    let index = Memo::new(move |_| tasks.with(|all| column_index(all, status, id)).unwrap_or(0));
                    let task = Memo::new(move |prev: Option<&Task>| {
                        tasks
                            .with(|all| all.iter().find(|t| t.id == id).cloned())
                            .or_else(|| prev.cloned())
                            .unwrap_or_else(|| initial.clone())
                    });

                    let on_mousedown = make_on_mousedown(dnd, id, move || DropSlot::new(column, index.get_untracked()));
                    let on_mousemove = make_on_card_mousemove(dnd, column, move || index.get_untracked());

                    let wrapper_class = move || {
                        let mut c = String::from("card-wrapper");
                        if dnd.dragging_id_read.get() == Some(id) { c.push_str(" dragging"); }
                        if dnd.is_target(DropSlot::new(column, index.get())) { c.push_str(" drop-target"); }
                        c
                    };

                    view! {
                        <div
                            class=wrapper_class
                            on:mousedown=on_mousedown
                            on:mousemove=on_mousemove
                        >
                            <TaskCard task=task actions=actions />
                        </div>
                    }
                }
            />

            {move || DropZone(DropZoneProps::builder().dnd(dnd).slot(DropSlot::new(column, count.get())).build())}

            {(status == TaskStatus::Todo).then(|| view! { <NewTaskForm /> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_class() {
        assert_eq!(column_class(TaskStatus::InProgress, false), "task-column column-in_progress");
        assert_eq!(column_class(TaskStatus::Done, true), "task-column column-done drag-active");
    }
}
