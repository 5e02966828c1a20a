//! Task Board Core
//!
//! Layered architecture:
//! - domain: Task entity, status enum, validated drafts, errors
//! - api: REST collaborator trait and its reqwest implementation
//! - board: the in-memory collection, drag reorder and card/form state
//!
//! Nothing here touches the DOM, so the whole crate runs under `cargo test`.

pub mod api;
pub mod board;
pub mod domain;

pub use api::{ApiConfig, HttpTaskApi, TaskApi, DEFAULT_API_URL};
pub use board::{
    reorder, Board, CardActions, CardEditor, CardMode, DragEnd, DragOutcome, LoadQuery, Reordered,
    Slot, StatusChange, TaskForm,
};
pub use domain::{
    position_of, DomainError, DomainResult, Entity, Task, TaskDraft, TaskId, TaskStatus, FIELDS_REQUIRED,
};
