//! UI Components
//!
//! Leptos components of the board view.

mod drop_zone;
mod load_bar;
mod new_task_form;
mod task_card;
mod task_column;

pub use drop_zone::{DropZone, DropZoneProps};
pub use load_bar::LoadBar;
pub use new_task_form::NewTaskForm;
pub use task_card::{CardActionsHandle, TaskCard};
pub use task_column::TaskColumn;
